// Suggestion public API type

use std::fmt;

/// Fixed explanation attached to every spelling suggestion.
pub const SPELLING_EXPLANATION: &str = "Correzione ortografica suggerita";

/// Fixed explanation attached to every formality suggestion.
pub const FORMALITY_EXPLANATION: &str = "Suggerimento per linguaggio più formale";

/// Which rule table produced a suggestion.
///
/// The declaration order is also the emission order for a token that
/// matches both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SuggestionKind {
    /// The word is a known misspelling.
    Spelling,
    /// The word is informal and has a more formal replacement.
    Formality,
}

impl SuggestionKind {
    /// Wire name of this kind (`"spelling"` or `"formality"`).
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Spelling => "spelling",
            SuggestionKind::Formality => "formality",
        }
    }

    /// Human-readable explanation shared by all suggestions of this kind.
    pub fn explanation(self) -> &'static str {
        match self {
            SuggestionKind::Spelling => SPELLING_EXPLANATION,
            SuggestionKind::Formality => FORMALITY_EXPLANATION,
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding emitted by the suggestion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Which table matched.
    pub kind: SuggestionKind,

    /// The token as written by the user (original casing and punctuation).
    pub original: String,

    /// The replacement from the matching table.
    pub suggestion: String,

    /// Index of the token in the whitespace-split token sequence.
    pub position: usize,

    /// Explanation text, fixed per kind.
    pub explanation: &'static str,
}

impl Suggestion {
    /// Create a suggestion; the explanation is derived from `kind`.
    pub fn new(
        kind: SuggestionKind,
        original: impl Into<String>,
        suggestion: impl Into<String>,
        position: usize,
    ) -> Self {
        Self {
            kind,
            original: original.into(),
            suggestion: suggestion.into(),
            position,
            explanation: kind.explanation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spelling() {
        let s = Suggestion::new(SuggestionKind::Spelling, "Perchè", "perché", 2);
        assert_eq!(s.kind, SuggestionKind::Spelling);
        assert_eq!(s.original, "Perchè");
        assert_eq!(s.suggestion, "perché");
        assert_eq!(s.position, 2);
        assert_eq!(s.explanation, SPELLING_EXPLANATION);
    }

    #[test]
    fn explanation_follows_kind() {
        let s = Suggestion::new(SuggestionKind::Formality, "ciao", "saluti", 0);
        assert_eq!(s.explanation, FORMALITY_EXPLANATION);
    }

    #[test]
    fn kind_names() {
        assert_eq!(SuggestionKind::Spelling.as_str(), "spelling");
        assert_eq!(SuggestionKind::Formality.to_string(), "formality");
    }

    #[test]
    fn spelling_orders_before_formality() {
        assert!(SuggestionKind::Spelling < SuggestionKind::Formality);
    }
}
