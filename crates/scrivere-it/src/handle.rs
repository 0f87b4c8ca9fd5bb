// ScrivereHandle: top-level integration point for the writing assistant.
//
// Owns the suggestion engine (with its rule tables) and the layout options,
// and provides the two request-level operations used by outer layers:
//   - check_grammar: suggestions plus word/character counts
//   - layout:        positioned lines for a paginated renderer
// plus access to the letter template catalog.
//
// The handle is immutable during request processing, so one instance can be
// shared across threads behind an `Arc`.

use scrivere_core::layout::Layout;
use scrivere_core::suggestion::Suggestion;

use crate::layout::{self, LayoutError, LayoutOptions};
use crate::rules::{RuleTables, RulesError};
use crate::suggestion::{Checker, SuggestionEngine};
use crate::templates::{self, DocumentTemplate};
use crate::tokenizer;

/// Title used when the caller supplies an empty one.
pub const DEFAULT_TITLE: &str = "Documento";

/// Error type for handle operations.
#[derive(Debug, thiserror::Error)]
pub enum ScrivereError {
    /// The rule tables could not be built.
    #[error("failed to load rule tables: {0}")]
    Rules(#[from] RulesError),

    /// The layout options are invalid.
    #[error("invalid layout options: {0}")]
    Layout(#[from] LayoutError),

    /// A check was requested on empty text.
    #[error("no text provided")]
    EmptyText,

    /// No template has the requested id.
    #[error("template not found: {0}")]
    TemplateNotFound(String),
}

/// Result of a grammar check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarReport {
    /// Suggestions in token order.
    pub suggestions: Vec<Suggestion>,
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Number of characters in the raw input.
    pub character_count: usize,
}

/// Top-level handle owning the engines and their configuration.
#[derive(Debug, Clone, Default)]
pub struct ScrivereHandle {
    engine: SuggestionEngine,
    layout_options: LayoutOptions,
}

impl ScrivereHandle {
    /// Create a handle with the built-in Italian tables and default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle over caller-supplied rule tables.
    pub fn with_rules(rules: RuleTables) -> Self {
        Self {
            engine: SuggestionEngine::new(rules),
            layout_options: LayoutOptions::default(),
        }
    }

    /// Create a handle from a JSON rules document.
    pub fn from_json_rules(json: &str) -> Result<Self, ScrivereError> {
        Ok(Self::with_rules(RuleTables::from_json(json)?))
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Suggestions for `text`. Never fails; empty text yields none.
    pub fn check(&self, text: &str) -> Vec<Suggestion> {
        self.engine.check(text)
    }

    /// Full check request: suggestions plus word and character counts.
    ///
    /// Empty text is rejected with [`ScrivereError::EmptyText`].
    /// Whitespace-only text is a valid request with no words.
    pub fn check_grammar(&self, text: &str) -> Result<GrammarReport, ScrivereError> {
        if text.is_empty() {
            return Err(ScrivereError::EmptyText);
        }
        Ok(GrammarReport {
            suggestions: self.engine.check(text),
            word_count: tokenizer::word_count(text),
            character_count: tokenizer::character_count(text),
        })
    }

    /// The rule tables in use.
    pub fn rules(&self) -> &RuleTables {
        self.engine.rules()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Lay out a document for export. An empty title becomes
    /// [`DEFAULT_TITLE`].
    pub fn layout(&self, title: &str, content: &str) -> Layout {
        let title = if title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            title
        };
        layout::layout(title, content, &self.layout_options)
    }

    /// Current layout options.
    pub fn layout_options(&self) -> &LayoutOptions {
        &self.layout_options
    }

    /// Replace the layout options after validating them.
    pub fn set_layout_options(&mut self, options: LayoutOptions) -> Result<(), ScrivereError> {
        options.validate()?;
        self.layout_options = options;
        Ok(())
    }

    /// Set the wrap width in characters.
    pub fn set_page_width_chars(&mut self, value: usize) -> Result<(), ScrivereError> {
        self.set_layout_options(LayoutOptions {
            page_width_chars: value,
            ..self.layout_options
        })
    }

    /// Set the page-break granularity.
    pub fn set_break_policy(&mut self, value: layout::BreakPolicy) {
        self.layout_options.break_policy = value;
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// All letter templates.
    pub fn templates(&self) -> &'static [DocumentTemplate] {
        templates::all()
    }

    /// A single template by id.
    pub fn template(&self, id: &str) -> Result<&'static DocumentTemplate, ScrivereError> {
        templates::get(id).ok_or_else(|| ScrivereError::TemplateNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use scrivere_core::suggestion::SuggestionKind;

    use super::*;
    use crate::layout::BreakPolicy;

    #[test]
    fn check_grammar_counts() {
        let handle = ScrivereHandle::new();
        let report = handle.check_grammar("Ciao, perchè non vieni?").unwrap();
        assert_eq!(report.word_count, 4);
        assert_eq!(report.character_count, 23);
        assert_eq!(report.suggestions.len(), 2);
        assert_eq!(report.suggestions[0].kind, SuggestionKind::Formality);
        assert_eq!(report.suggestions[1].kind, SuggestionKind::Spelling);
    }

    #[test]
    fn check_grammar_rejects_empty() {
        let handle = ScrivereHandle::new();
        assert!(matches!(handle.check_grammar(""), Err(ScrivereError::EmptyText)));
        assert!(handle.check("").is_empty());
    }

    #[test]
    fn check_grammar_accepts_blank_text() {
        let handle = ScrivereHandle::new();
        let report = handle.check_grammar("   ").unwrap();
        assert!(report.suggestions.is_empty());
        assert_eq!(report.word_count, 0);
        assert_eq!(report.character_count, 3);
    }

    #[test]
    fn custom_rules() {
        let handle =
            ScrivereHandle::from_json_rules(r#"{"corrections": {"xké": "perché"}}"#).unwrap();
        let out = handle.check("xké no");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].suggestion, "perché");
        assert!(handle.check("ciao").is_empty());
    }

    #[test]
    fn bad_rules_are_reported() {
        let err = ScrivereHandle::from_json_rules("[]").unwrap_err();
        assert!(matches!(err, ScrivereError::Rules(_)));
    }

    #[test]
    fn empty_title_gets_default() {
        let handle = ScrivereHandle::new();
        let out = handle.layout("  ", "testo");
        assert_eq!(out.lines[0].text, DEFAULT_TITLE);
    }

    #[test]
    fn layout_options_are_validated() {
        let mut handle = ScrivereHandle::new();
        assert!(matches!(
            handle.set_page_width_chars(0),
            Err(ScrivereError::Layout(LayoutError::ZeroWidth))
        ));
        assert_eq!(handle.layout_options().page_width_chars, 80);
        handle.set_page_width_chars(20).unwrap();
        handle.set_break_policy(BreakPolicy::InputLine);
        assert_eq!(handle.layout_options().page_width_chars, 20);
        assert_eq!(handle.layout_options().break_policy, BreakPolicy::InputLine);
    }

    #[test]
    fn nan_title_spacing_is_rejected() {
        let mut handle = ScrivereHandle::new();
        let result = handle.set_layout_options(LayoutOptions {
            title_spacing: f32::NAN,
            ..LayoutOptions::default()
        });
        assert!(matches!(
            result,
            Err(ScrivereError::Layout(LayoutError::InvalidTitleSpacing(_)))
        ));
        assert_eq!(handle.layout_options().title_spacing, 30.0);

        let content = vec!["riga"; 1000].join("\n");
        let out = handle.layout("T", &content);
        assert!(out.page_count > 1);
        assert!(out.lines.iter().all(|l| l.y >= 50.0 && l.y <= 750.0));
    }

    #[test]
    fn template_lookup() {
        let handle = ScrivereHandle::new();
        assert_eq!(handle.templates().len(), 6);
        assert_eq!(handle.template("condoglianze").unwrap().id, "condoglianze");
        assert!(matches!(
            handle.template("nope"),
            Err(ScrivereError::TemplateNotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScrivereHandle>();
    }
}
