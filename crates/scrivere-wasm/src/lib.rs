// WASM bindings for the scrivere writing assistant.
//
// Provides a `WasmScrivere` class exported via wasm-bindgen that wraps the
// `ScrivereHandle` from scrivere-it. Complex return types (suggestions,
// reports, layouts, templates) are serialized to JavaScript values using
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const scrivere = new WasmScrivere();            // built-in tables
//   const custom = new WasmScrivere(rulesJson);     // caller tables
//   scrivere.check("Ciao, perchè?");     // => [{ type: "formality", ... }, ...]
//   scrivere.checkGrammar("Ciao");       // => { suggestions, wordCount, characterCount }
//   scrivere.layout("Titolo", "testo");  // => { lines: [...], pageCount: 1 }
//   scrivere.templates();                // => [{ id, name, template, icon }, ...]
//   scrivere.template("email_formale");  // => { id, name, template, icon }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use scrivere_core::layout::{Layout, LineStyle};
use scrivere_core::suggestion::Suggestion;
use scrivere_it::handle::{GrammarReport, ScrivereError, ScrivereHandle};
use scrivere_it::templates::DocumentTemplate;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a suggestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuggestion {
    #[serde(rename = "type")]
    kind: &'static str,
    original: String,
    suggestion: String,
    position: usize,
    explanation: &'static str,
}

/// Serializable representation of a grammar report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsGrammarReport {
    suggestions: Vec<JsSuggestion>,
    word_count: usize,
    character_count: usize,
}

/// Serializable representation of a layout line.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLayoutLine {
    text: String,
    page: usize,
    y: f32,
    style: &'static str,
}

/// Serializable representation of a layout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLayout {
    lines: Vec<JsLayoutLine>,
    page_count: usize,
}

/// Serializable representation of a document template.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTemplate {
    id: &'static str,
    name: &'static str,
    template: &'static str,
    icon: &'static str,
    placeholders: Vec<&'static str>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn suggestion_to_js(s: Suggestion) -> JsSuggestion {
    JsSuggestion {
        kind: s.kind.as_str(),
        original: s.original,
        suggestion: s.suggestion,
        position: s.position,
        explanation: s.explanation,
    }
}

fn report_to_js(r: GrammarReport) -> JsGrammarReport {
    JsGrammarReport {
        suggestions: r.suggestions.into_iter().map(suggestion_to_js).collect(),
        word_count: r.word_count,
        character_count: r.character_count,
    }
}

fn line_style_to_string(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Title => "title",
        LineStyle::Body => "body",
    }
}

fn layout_to_js(layout: Layout) -> JsLayout {
    JsLayout {
        page_count: layout.page_count,
        lines: layout
            .lines
            .into_iter()
            .map(|l| JsLayoutLine {
                text: l.text,
                page: l.page,
                y: l.y,
                style: line_style_to_string(l.style),
            })
            .collect(),
    }
}

fn template_to_js(t: &DocumentTemplate) -> JsTemplate {
    JsTemplate {
        id: t.id,
        name: t.name,
        template: t.body,
        icon: t.icon,
        placeholders: t.placeholders(),
    }
}

fn scrivere_error_to_js(e: ScrivereError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmScrivere
// ============================================================================

/// Italian writing assistant for WebAssembly.
///
/// Provides spelling/formality suggestions, document layout for export, and
/// letter templates.
#[wasm_bindgen]
pub struct WasmScrivere {
    handle: ScrivereHandle,
}

#[wasm_bindgen]
impl WasmScrivere {
    /// Create a new instance.
    ///
    /// - `rules_json`: optional JSON rules document replacing the built-in
    ///   tables (`{"corrections": {...}, "formality": {...}}`)
    #[wasm_bindgen(constructor)]
    pub fn new(rules_json: Option<String>) -> Result<WasmScrivere, JsError> {
        let handle = match rules_json {
            Some(json) => ScrivereHandle::from_json_rules(&json).map_err(scrivere_error_to_js)?,
            None => ScrivereHandle::new(),
        };
        Ok(WasmScrivere { handle })
    }

    /// Suggestions for the text. Empty text yields an empty array.
    pub fn check(&self, text: &str) -> Result<JsValue, JsError> {
        let suggestions: Vec<JsSuggestion> = self
            .handle
            .check(text)
            .into_iter()
            .map(suggestion_to_js)
            .collect();
        to_js(&suggestions)
    }

    /// Suggestions plus word and character counts.
    ///
    /// Throws when the text is empty.
    #[wasm_bindgen(js_name = "checkGrammar")]
    pub fn check_grammar(&self, text: &str) -> Result<JsValue, JsError> {
        let report = self
            .handle
            .check_grammar(text)
            .map_err(scrivere_error_to_js)?;
        to_js(&report_to_js(report))
    }

    /// Lay out a document for export.
    ///
    /// Returns `{ lines: [{ text, page, y, style }], pageCount }`.
    pub fn layout(&self, title: &str, content: &str) -> Result<JsValue, JsError> {
        to_js(&layout_to_js(self.handle.layout(title, content)))
    }

    /// Set the wrap width in characters.
    #[wasm_bindgen(js_name = "setPageWidthChars")]
    pub fn set_page_width_chars(&mut self, value: usize) -> Result<(), JsError> {
        self.handle
            .set_page_width_chars(value)
            .map_err(scrivere_error_to_js)
    }

    /// All letter templates.
    pub fn templates(&self) -> Result<JsValue, JsError> {
        let templates: Vec<JsTemplate> = self.handle.templates().iter().map(template_to_js).collect();
        to_js(&templates)
    }

    /// A single template by id. Throws when the id is unknown.
    pub fn template(&self, id: &str) -> Result<JsValue, JsError> {
        let t = self.handle.template(id).map_err(scrivere_error_to_js)?;
        to_js(&template_to_js(t))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_dto_uses_wire_names() {
        let handle = ScrivereHandle::new();
        let s = handle.check("ciao").into_iter().next().unwrap();
        let js = suggestion_to_js(s);
        assert_eq!(js.kind, "formality");
        assert_eq!(js.suggestion, "saluti");
        assert_eq!(js.position, 0);
    }

    #[test]
    fn layout_dto_keeps_order() {
        let handle = ScrivereHandle::new();
        let js = layout_to_js(handle.layout("T", "a\nb"));
        let styles: Vec<&str> = js.lines.iter().map(|l| l.style).collect();
        assert_eq!(styles, ["title", "body", "body"]);
        assert_eq!(js.page_count, 1);
    }

    #[test]
    fn template_dto_lists_placeholders() {
        let handle = ScrivereHandle::new();
        let js = template_to_js(handle.template("lettera_auguri").unwrap());
        assert_eq!(js.placeholders[0], "Nome");
    }
}
