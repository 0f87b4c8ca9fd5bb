// Built-in Italian rule tables
//
// Keys are already normalized (lower case, no surrounding punctuation).
// Multi-word phrases cannot appear here: the tokenizer splits on whitespace,
// so a key containing a space would never match.

/// Common Italian misspellings, mostly wrong accents and apostrophes.
pub(crate) const CORRECTIONS: &[(&str, &str)] = &[
    ("qualè", "qual è"),
    ("qual'è", "qual è"),
    ("qualcosè", "qualcos'è"),
    ("perchè", "perché"),
    ("affinchè", "affinché"),
    ("benchè", "benché"),
    ("finchè", "finché"),
    ("poichè", "poiché"),
    ("nè", "né"),
    ("sè", "sé"),
    ("pò", "po'"),
    ("un'altro", "un altro"),
    ("daccordo", "d'accordo"),
    ("propio", "proprio"),
    ("sopratutto", "soprattutto"),
    ("areoporto", "aeroporto"),
    ("metereologico", "meteorologico"),
];

/// Informal words with a more formal replacement for letters and e-mails.
pub(crate) const FORMALITY: &[(&str, &str)] = &[
    ("ciao", "saluti"),
    ("hey", "gentile signore/signora"),
    ("ehi", "gentile signore/signora"),
    ("ok", "d'accordo"),
    ("okay", "d'accordo"),
    ("vabbè", "va bene"),
    ("puoi", "può"),
    ("vuoi", "desidera"),
];
