// Token public API type

use crate::character::normalize_word;

/// A whitespace-delimited word extracted from input text.
///
/// Tokens are created per check request and never persisted. The raw form
/// keeps the original casing and punctuation so it can be echoed back to the
/// user; the normalized form is the rule-table lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word as it appeared in the input.
    pub text: String,

    /// Lower-cased lookup key with punctuation removed. May be empty.
    pub normalized: String,

    /// Zero-based index of this token in the token sequence.
    pub index: usize,
}

impl Token {
    /// Create a new token, computing its normalized form.
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        let text = text.into();
        let normalized = normalize_word(&text);
        Self {
            text,
            normalized,
            index,
        }
    }

    /// Whether the token has a non-empty lookup key.
    ///
    /// Tokens made only of punctuation have no key and never match a rule.
    pub fn has_key(&self) -> bool {
        !self.normalized.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new() {
        let tok = Token::new("Perchè,", 3);
        assert_eq!(tok.text, "Perchè,");
        assert_eq!(tok.normalized, "perchè");
        assert_eq!(tok.index, 3);
        assert!(tok.has_key());
    }

    #[test]
    fn punctuation_token_has_no_key() {
        let tok = Token::new("?!", 0);
        assert_eq!(tok.normalized, "");
        assert!(!tok.has_key());
    }

    #[test]
    fn token_clone() {
        let tok = Token::new("ciao", 0);
        assert_eq!(tok, tok.clone());
    }
}
