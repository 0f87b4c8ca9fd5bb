// Letter template catalog
//
// A fixed set of Italian document skeletons. Bodies mark the parts the user
// has to fill in with `[square brackets]`.

mod catalog;

use hashbrown::HashMap;

/// One document template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentTemplate {
    /// Stable identifier, e.g. `"email_formale"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Template body with `[placeholder]` markers.
    pub body: &'static str,
    /// Emoji shown next to the name.
    pub icon: &'static str,
}

impl DocumentTemplate {
    /// Placeholder labels in order of first appearance, without brackets.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for label in placeholder_spans(self.body).map(|(_, label)| label) {
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
        seen
    }

    /// Replace placeholders that have a value in `values`; unknown ones are
    /// left in place so the user can still see what is missing.
    pub fn fill(&self, values: &HashMap<String, String>) -> String {
        let mut out = String::with_capacity(self.body.len());
        let mut last = 0;
        for (start, label) in placeholder_spans(self.body) {
            let end = start + label.len() + 2;
            if let Some(value) = values.get(label) {
                out.push_str(&self.body[last..start]);
                out.push_str(value);
                last = end;
            }
        }
        out.push_str(&self.body[last..]);
        out
    }
}

/// Byte offset of each `[label]` together with its label. Brackets do not
/// nest and never span a line.
fn placeholder_spans(body: &'static str) -> impl Iterator<Item = (usize, &'static str)> {
    let mut pos = 0;
    std::iter::from_fn(move || {
        while let Some(open) = body[pos..].find('[') {
            let start = pos + open;
            let rest = &body[start + 1..];
            let Some(close) = rest.find(|c: char| c == ']' || c == '[' || c == '\n') else {
                pos = body.len();
                return None;
            };
            if rest.as_bytes()[close] != b']' || close == 0 {
                pos = start + 1;
                continue;
            }
            pos = start + close + 2;
            return Some((start, &rest[..close]));
        }
        pos = body.len();
        None
    })
}

/// All templates, in catalog order.
pub fn all() -> &'static [DocumentTemplate] {
    catalog::TEMPLATES
}

/// Look up a template by id.
pub fn get(id: &str) -> Option<&'static DocumentTemplate> {
    catalog::TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids() {
        let ids: Vec<&str> = all().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            [
                "lettera_contestazione",
                "email_formale",
                "lettera_auguri",
                "richiesta_informazioni",
                "curriculum_semplice",
                "condoglianze",
            ]
        );
    }

    #[test]
    fn lookup() {
        let t = get("email_formale").unwrap();
        assert_eq!(t.name, "Email Formale");
        assert!(get("missing").is_none());
    }

    #[test]
    fn every_template_has_placeholders() {
        for t in all() {
            assert!(!t.placeholders().is_empty(), "{} has no placeholders", t.id);
        }
    }

    #[test]
    fn placeholders_are_deduplicated_in_order() {
        let t = get("email_formale").unwrap();
        let ph = t.placeholders();
        assert_eq!(ph[0], "Specificare l'oggetto della comunicazione");
        assert_eq!(ph.iter().filter(|p| **p == "Nome e Cognome").count(), 1);
    }

    #[test]
    fn fill_replaces_known_values() {
        let t = get("lettera_auguri").unwrap();
        let mut values = HashMap::new();
        values.insert("Nome".to_string(), "Giulia".to_string());
        let filled = t.fill(&values);
        assert!(filled.starts_with("Caro/a Giulia,"));
        assert!(filled.contains("[Il tuo nome]"));
        assert!(!filled.contains("[Nome]"));
    }

    #[test]
    fn fill_without_values_is_identity() {
        let t = get("condoglianze").unwrap();
        assert_eq!(t.fill(&HashMap::new()), t.body);
    }
}
