// Template bodies.

use super::DocumentTemplate;

pub(crate) const TEMPLATES: &[DocumentTemplate] = &[
    DocumentTemplate {
        id: "lettera_contestazione",
        name: "Lettera di Contestazione",
        body: "Spett.le [Nome Azienda/Ente],

Oggetto: Contestazione [specificare il motivo]

Io sottoscritto/a [Nome e Cognome], nato/a a [Luogo] il [Data], residente in [Indirizzo completo], con la presente intendo contestare [specificare dettagliatamente il problema].

I fatti si sono svolti nel seguente modo: [descrivere i fatti cronologicamente].

Ritengo che [esporre le proprie ragioni e il diritto che si ritiene violato].

Pertanto, chiedo [specificare ciò che si richiede: rimborso, sostituzione, riparazione, etc.].

In attesa di un Vostro cortese riscontro, porgo distinti saluti.

[Luogo e data]
[Firma]",
        icon: "\u{2696}\u{FE0F}",
    },
    DocumentTemplate {
        id: "email_formale",
        name: "Email Formale",
        body: "Oggetto: [Specificare l'oggetto della comunicazione]

Gentile [Signore/Signora/Dottore] [Cognome],

La presente per [specificare il motivo della comunicazione].

[Corpo del messaggio - esporre chiaramente la richiesta o l'informazione]

In attesa di una Sua cortese risposta, La ringrazio per l'attenzione.

Distinti saluti,

[Nome e Cognome]
[Telefono]
[Email]",
        icon: "\u{1F4E7}",
    },
    DocumentTemplate {
        id: "lettera_auguri",
        name: "Lettera di Auguri",
        body: "Caro/a [Nome],

In occasione di [specificare l'occasione: compleanno, matrimonio, laurea, etc.], desidero porgerti i miei più sinceri auguri.

[Aggiungere un messaggio personale e affettuoso]

Ti auguro ogni bene e tanta felicità.

Con affetto,
[Il tuo nome]

[Data]",
        icon: "\u{1F389}",
    },
    DocumentTemplate {
        id: "richiesta_informazioni",
        name: "Richiesta Informazioni",
        body: "Spett.le [Nome Azienda/Ufficio],

Oggetto: Richiesta informazioni riguardo [specificare l'argomento]

Io sottoscritto/a [Nome e Cognome], vorrei ricevere informazioni dettagliate riguardo [specificare l'oggetto della richiesta].

In particolare, mi interesserebbe sapere:
- [Prima domanda]
- [Seconda domanda]
- [Terza domanda]

Vi sarei grato/a se poteste fornirmi tutte le informazioni necessarie e i documenti eventualmente richiesti.

Resto in attesa di una Vostra cortese risposta.

Distinti saluti,

[Nome e Cognome]
[Telefono]
[Email]
[Data]",
        icon: "\u{2139}\u{FE0F}",
    },
    DocumentTemplate {
        id: "curriculum_semplice",
        name: "Curriculum Vitae Semplice",
        body: "CURRICULUM VITAE

INFORMAZIONI PERSONALI
Nome e Cognome: [Inserire nome e cognome]
Data di nascita: [gg/mm/aaaa]
Luogo di nascita: [Inserire città]
Residenza: [Inserire indirizzo completo]
Telefono: [Inserire numero]
Email: [Inserire email]

ISTRUZIONE
[Anno] - [Titolo di studio] presso [Nome istituto/università]

ESPERIENZA LAVORATIVA
[Periodo] - [Ruolo] presso [Nome azienda]
Principali mansioni: [Descrivere brevemente le attività svolte]

COMPETENZE
- [Competenza 1]
- [Competenza 2]
- [Competenza 3]

LINGUE STRANIERE
- [Lingua]: [Livello]

Autorizzo il trattamento dei miei dati personali ai sensi del Decreto Legislativo 30 giugno 2003, n. 196 e del GDPR (Regolamento UE 2016/679).

[Luogo e data]
[Firma]",
        icon: "\u{1F4C4}",
    },
    DocumentTemplate {
        id: "condoglianze",
        name: "Messaggio di Condoglianze",
        body: "Cara/o [Nome] e famiglia,

Ho appreso con grande dispiacere della scomparsa di [Nome del defunto].

[Aggiungere un ricordo personale o parole di conforto]

Vi sono vicino/a in questo momento di dolore e vi porgo le mie più sentite condoglianze.

Con affetto e partecipazione,

[Il tuo nome]
[Data]",
        icon: "\u{1F54A}\u{FE0F}",
    },
];
