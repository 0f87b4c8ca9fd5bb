// Suggestion engine
//
// Scans tokenized text against the correction and formality tables and
// reports one suggestion per (token, matching table) pair. The engine holds
// no mutable state, so a single instance can serve concurrent callers.

use tracing::trace;

use scrivere_core::suggestion::{Suggestion, SuggestionKind};
use scrivere_core::token::Token;

use crate::rules::RuleTables;
use crate::tokenizer;

/// Trait for text checkers producing positioned suggestions.
pub trait Checker {
    /// Check a piece of text. Never fails; empty text yields no suggestions.
    fn check(&self, text: &str) -> Vec<Suggestion>;
}

/// Table-driven suggestion engine.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    rules: RuleTables,
}

impl SuggestionEngine {
    /// Create an engine over the given tables.
    pub fn new(rules: RuleTables) -> Self {
        Self { rules }
    }

    /// The tables this engine matches against.
    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    /// Suggestions for a single token, spelling first.
    ///
    /// At most two suggestions are produced, both at the token's index.
    pub fn check_token(&self, token: &Token, out: &mut Vec<Suggestion>) {
        if !token.has_key() {
            return;
        }
        if let Some(fix) = self.rules.correction(&token.normalized) {
            trace!(position = token.index, word = %token.text, "spelling match");
            out.push(Suggestion::new(
                SuggestionKind::Spelling,
                token.text.as_str(),
                fix,
                token.index,
            ));
        }
        if let Some(formal) = self.rules.formality(&token.normalized) {
            trace!(position = token.index, word = %token.text, "formality match");
            out.push(Suggestion::new(
                SuggestionKind::Formality,
                token.text.as_str(),
                formal,
                token.index,
            ));
        }
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(RuleTables::builtin())
    }
}

impl Checker for SuggestionEngine {
    fn check(&self, text: &str) -> Vec<Suggestion> {
        let mut out = Vec::new();
        for token in tokenizer::tokens(text) {
            self.check_token(&token, &mut out);
        }
        out
    }
}
