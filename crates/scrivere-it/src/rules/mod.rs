// Rule tables for the suggestion engine
//
// Two independent lookup maps keyed by normalized word:
//   - corrections: misspelling -> corrected form
//   - formality:   informal term -> formal replacement
//
// Tables are immutable once built. They can come from the built-in Italian
// data or from a JSON document supplied by the caller:
//
//   { "corrections": { "perchè": "perché" }, "formality": { "ciao": "saluti" } }

mod builtin;

use hashbrown::HashMap;
use serde::Deserialize;
use tracing::debug;

use scrivere_core::character::is_normalized;

/// Error type for rule table construction.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// The JSON document could not be parsed.
    #[error("invalid rules document: {0}")]
    Json(#[from] serde_json::Error),

    /// A key is empty or not in normalized form, so it could never match.
    #[error("invalid key {key:?} in {table} table: keys must be non-empty normalized single words")]
    InvalidKey { table: &'static str, key: String },
}

/// Wire shape of a rules document. Missing tables default to empty.
#[derive(Debug, Default, Deserialize)]
struct RulesDocument {
    #[serde(default)]
    corrections: HashMap<String, String>,
    #[serde(default)]
    formality: HashMap<String, String>,
}

/// Immutable correction and formality tables.
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    corrections: HashMap<String, String>,
    formality: HashMap<String, String>,
}

impl RuleTables {
    /// Build tables from explicit maps, validating every key.
    pub fn new(
        corrections: HashMap<String, String>,
        formality: HashMap<String, String>,
    ) -> Result<Self, RulesError> {
        validate_keys("corrections", &corrections)?;
        validate_keys("formality", &formality)?;
        debug!(
            corrections = corrections.len(),
            formality = formality.len(),
            "rule tables loaded"
        );
        Ok(Self {
            corrections,
            formality,
        })
    }

    /// The built-in Italian tables.
    pub fn builtin() -> Self {
        Self {
            corrections: to_map(builtin::CORRECTIONS),
            formality: to_map(builtin::FORMALITY),
        }
    }

    /// Parse tables from a JSON rules document.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let doc: RulesDocument = serde_json::from_str(json)?;
        Self::new(doc.corrections, doc.formality)
    }

    /// Corrected form for a normalized misspelling.
    pub fn correction(&self, key: &str) -> Option<&str> {
        self.corrections.get(key).map(String::as_str)
    }

    /// Formal replacement for a normalized informal term.
    pub fn formality(&self, key: &str) -> Option<&str> {
        self.formality.get(key).map(String::as_str)
    }

    /// Number of correction rules.
    pub fn corrections_len(&self) -> usize {
        self.corrections.len()
    }

    /// Number of formality rules.
    pub fn formality_len(&self) -> usize {
        self.formality.len()
    }
}

fn validate_keys(table: &'static str, map: &HashMap<String, String>) -> Result<(), RulesError> {
    match map.keys().find(|k| !is_normalized(k)) {
        Some(key) => Err(RulesError::InvalidKey {
            table,
            key: key.clone(),
        }),
        None => Ok(()),
    }
}

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_are_normalized() {
        for &(k, _) in builtin::CORRECTIONS.iter().chain(builtin::FORMALITY) {
            assert!(is_normalized(k), "builtin key {k:?} is not normalized");
        }
    }

    #[test]
    fn builtin_has_no_duplicate_keys() {
        let tables = RuleTables::builtin();
        assert_eq!(tables.corrections_len(), builtin::CORRECTIONS.len());
        assert_eq!(tables.formality_len(), builtin::FORMALITY.len());
    }

    #[test]
    fn builtin_lookups() {
        let tables = RuleTables::builtin();
        assert_eq!(tables.correction("perchè"), Some("perché"));
        assert_eq!(tables.formality("ciao"), Some("saluti"));
        assert_eq!(tables.correction("ciao"), None);
        assert_eq!(tables.correction(""), None);
        assert_eq!(tables.formality(""), None);
    }

    #[test]
    fn from_json_both_tables() {
        let tables = RuleTables::from_json(
            r#"{"corrections": {"xe": "è"}, "formality": {"ciao": "buongiorno"}}"#,
        )
        .unwrap();
        assert_eq!(tables.correction("xe"), Some("è"));
        assert_eq!(tables.formality("ciao"), Some("buongiorno"));
    }

    #[test]
    fn from_json_missing_table_is_empty() {
        let tables = RuleTables::from_json(r#"{"formality": {"ok": "va bene"}}"#).unwrap();
        assert_eq!(tables.corrections_len(), 0);
        assert_eq!(tables.formality_len(), 1);
    }

    #[test]
    fn from_json_rejects_empty_key() {
        let err = RuleTables::from_json(r#"{"corrections": {"": "x"}}"#).unwrap_err();
        assert!(matches!(
            err,
            RulesError::InvalidKey { table: "corrections", .. }
        ));
    }

    #[test]
    fn from_json_rejects_phrase_key() {
        let err = RuleTables::from_json(r#"{"formality": {"grazie mille": "la ringrazio"}}"#)
            .unwrap_err();
        match err {
            RulesError::InvalidKey { table, key } => {
                assert_eq!(table, "formality");
                assert_eq!(key, "grazie mille");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_json_rejects_uppercase_key() {
        assert!(RuleTables::from_json(r#"{"formality": {"Ciao": "saluti"}}"#).is_err());
    }

    #[test]
    fn from_json_syntax_error() {
        let err = RuleTables::from_json("{not json").unwrap_err();
        assert!(matches!(err, RulesError::Json(_)));
    }
}
