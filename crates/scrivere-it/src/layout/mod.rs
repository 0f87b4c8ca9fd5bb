// Pagination engine
//
// Turns a title and free text into positioned lines for a paginated
// renderer. Works on character counts only (monospaced-width wrapping);
// fonts and glyph metrics are the renderer's concern.
//
// Pipeline per input line:
//   1. split content on '\n' (a trailing '\r' is dropped)
//   2. wrap lines wider than `page_width_chars` (see `wrap::wrap_line`)
//   3. place each resulting line, starting a new page once the cursor has
//      dropped below the bottom margin

pub mod cursor;
pub mod wrap;

use tracing::debug;

use scrivere_core::layout::{Layout, LayoutLine};

pub use cursor::{PageBounds, PageCursor};
pub use wrap::wrap_line;

/// Error type for invalid layout options.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Lines cannot be zero characters wide.
    #[error("page width must be at least one character")]
    ZeroWidth,

    /// The line pitch must move the cursor downwards.
    #[error("line pitch must be positive, got {0}")]
    NonPositivePitch(f32),

    /// The top margin must lie above the bottom margin.
    #[error("top offset {top} must be above bottom offset {bottom}")]
    InvertedMargins { top: f32, bottom: f32 },

    /// The title gap must be a finite, non-negative distance.
    #[error("title spacing must be finite and non-negative, got {0}")]
    InvalidTitleSpacing(f32),
}

/// When the page-break decision is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakPolicy {
    /// Check before every emitted line. No line is ever placed below the
    /// bottom margin.
    #[default]
    EveryLine,

    /// Check once per input line. The wrapped continuation lines of a long
    /// input line stay on the page where it started, even past the bottom
    /// margin. Matches the legacy PDF export.
    InputLine,
}

/// Page geometry and wrapping options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Lines longer than this many characters are wrapped.
    pub page_width_chars: usize,

    /// Offset of the first line on a page (and of the title).
    pub top_y: f32,

    /// Lower margin; the cursor moving below it triggers a page break.
    pub bottom_y: f32,

    /// Vertical distance between lines.
    pub line_pitch: f32,

    /// Gap between the title and the first body line.
    pub title_spacing: f32,

    /// Page-break granularity.
    pub break_policy: BreakPolicy,
}

impl Default for LayoutOptions {
    /// US-letter geometry: title at 750pt, body from 720pt down to 50pt in
    /// 15pt steps, 80 characters per line.
    fn default() -> Self {
        Self {
            page_width_chars: 80,
            top_y: 750.0,
            bottom_y: 50.0,
            line_pitch: 15.0,
            title_spacing: 30.0,
            break_policy: BreakPolicy::default(),
        }
    }
}

impl LayoutOptions {
    /// Reject geometry that cannot produce a sensible layout.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.page_width_chars == 0 {
            return Err(LayoutError::ZeroWidth);
        }
        if !(self.line_pitch > 0.0) {
            return Err(LayoutError::NonPositivePitch(self.line_pitch));
        }
        if !(self.top_y > self.bottom_y) {
            return Err(LayoutError::InvertedMargins {
                top: self.top_y,
                bottom: self.bottom_y,
            });
        }
        if !(self.title_spacing >= 0.0 && self.title_spacing.is_finite()) {
            return Err(LayoutError::InvalidTitleSpacing(self.title_spacing));
        }
        Ok(())
    }

    /// Vertical bounds used by the page cursor.
    pub fn bounds(&self) -> PageBounds {
        PageBounds {
            top_y: self.top_y,
            bottom_y: self.bottom_y,
            line_pitch: self.line_pitch,
        }
    }
}

/// Lay out a document.
///
/// The title is always the first line, on page 1 at `top_y`. Empty content
/// produces a title-only layout on a single page.
pub fn layout(title: &str, content: &str, options: &LayoutOptions) -> Layout {
    let mut cursor = PageCursor::new(options.bounds());
    let mut lines = vec![LayoutLine::title(title, cursor.page(), cursor.y())];
    cursor.skip(options.title_spacing);

    if content.is_empty() {
        return Layout::from_lines(lines);
    }

    for raw in content.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if options.break_policy == BreakPolicy::InputLine {
            advance(&mut cursor);
        }
        for text in wrap_line(raw, options.page_width_chars) {
            if options.break_policy == BreakPolicy::EveryLine {
                advance(&mut cursor);
            }
            lines.push(LayoutLine::body(text, cursor.page(), cursor.y()));
            cursor.feed_line();
        }
    }

    let layout = Layout::from_lines(lines);
    debug!(
        lines = layout.lines.len(),
        pages = layout.page_count,
        "layout complete"
    );
    layout
}

fn advance(cursor: &mut PageCursor) {
    if cursor.advance_if_needed() {
        debug!(page = cursor.page(), "page break");
    }
}

#[cfg(test)]
mod tests {
    use scrivere_core::layout::LineStyle;

    use super::*;

    fn body_count(layout: &Layout) -> usize {
        layout.body_lines().count()
    }

    #[test]
    fn empty_content_is_title_only() {
        let out = layout("Lettera", "", &LayoutOptions::default());
        assert_eq!(out.lines.len(), 1);
        assert_eq!(out.lines[0], LayoutLine::title("Lettera", 1, 750.0));
        assert_eq!(out.page_count, 1);
    }

    #[test]
    fn body_starts_below_title() {
        let out = layout("T", "uno\ndue", &LayoutOptions::default());
        assert_eq!(out.lines[1], LayoutLine::body("uno", 1, 720.0));
        assert_eq!(out.lines[2], LayoutLine::body("due", 1, 705.0));
    }

    #[test]
    fn blank_lines_consume_a_slot() {
        let out = layout("T", "a\n\nb", &LayoutOptions::default());
        let ys: Vec<f32> = out.body_lines().map(|l| l.y).collect();
        assert_eq!(ys, [720.0, 705.0, 690.0]);
        assert_eq!(out.lines[2].text, "");
    }

    #[test]
    fn crlf_is_stripped() {
        let out = layout("T", "uno\r\ndue\r\n", &LayoutOptions::default());
        let texts: Vec<&str> = out.body_lines().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["uno", "due", ""]);
    }

    #[test]
    fn page_break_resets_to_top() {
        // 720 down to 50 in 15pt steps is 45 lines on the first page.
        let content = vec!["riga"; 46].join("\n");
        let out = layout("T", &content, &LayoutOptions::default());
        let last_first_page = &out.lines[45];
        assert_eq!(last_first_page.page, 1);
        assert_eq!(last_first_page.y, 60.0);
        let first_second_page = &out.lines[46];
        assert_eq!(first_second_page.page, 2);
        assert_eq!(first_second_page.y, 750.0);
        assert_eq!(out.page_count, 2);
    }

    #[test]
    fn line_exactly_at_bottom_margin_stays() {
        let options = LayoutOptions {
            top_y: 100.0,
            bottom_y: 50.0,
            line_pitch: 10.0,
            title_spacing: 20.0,
            ..LayoutOptions::default()
        };
        // Body at 80, 70, 60, 50, then 40 < 50 breaks.
        let content = vec!["x"; 5].join("\n");
        let out = layout("T", &content, &options);
        let placed: Vec<(usize, f32)> = out.body_lines().map(|l| (l.page, l.y)).collect();
        assert_eq!(
            placed,
            [(1, 80.0), (1, 70.0), (1, 60.0), (1, 50.0), (2, 100.0)]
        );
    }

    #[test]
    fn title_style_only_on_first_line() {
        let out = layout("T", "a\nb", &LayoutOptions::default());
        assert_eq!(out.lines[0].style, LineStyle::Title);
        assert!(out.lines[1..].iter().all(|l| l.style == LineStyle::Body));
    }

    fn tight_options(policy: BreakPolicy) -> LayoutOptions {
        LayoutOptions {
            page_width_chars: 10,
            top_y: 100.0,
            bottom_y: 50.0,
            line_pitch: 10.0,
            title_spacing: 20.0,
            break_policy: policy,
        }
    }

    #[test]
    fn every_line_policy_never_crosses_margin() {
        let content = "aaa bbb ccc ddd eee fff ggg hhh iii jjj kkk lll mmm";
        let options = tight_options(BreakPolicy::EveryLine);
        let out = layout("T", content, &options);
        assert!(body_count(&out) > 5);
        assert!(out.lines.iter().all(|l| l.y >= options.bottom_y));
        assert!(out.page_count >= 2);
    }

    #[test]
    fn input_line_policy_overflows_within_page() {
        let content = "aaa bbb ccc ddd eee fff ggg hhh iii jjj kkk lll mmm\nnext";
        let options = tight_options(BreakPolicy::InputLine);
        let out = layout("T", content, &options);
        let wrapped: Vec<&LayoutLine> = out
            .body_lines()
            .filter(|l| l.text != "next")
            .collect();
        assert!(wrapped.iter().all(|l| l.page == 1));
        assert!(wrapped.iter().any(|l| l.y < options.bottom_y));
        let next = out.lines.last().unwrap();
        assert_eq!(next.text, "next");
        assert_eq!(next.page, 2);
        assert_eq!(next.y, options.top_y);
    }

    #[test]
    fn validate_defaults() {
        assert_eq!(LayoutOptions::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_geometry() {
        let zero = LayoutOptions {
            page_width_chars: 0,
            ..LayoutOptions::default()
        };
        assert_eq!(zero.validate(), Err(LayoutError::ZeroWidth));

        let pitch = LayoutOptions {
            line_pitch: 0.0,
            ..LayoutOptions::default()
        };
        assert_eq!(pitch.validate(), Err(LayoutError::NonPositivePitch(0.0)));

        let inverted = LayoutOptions {
            top_y: 40.0,
            ..LayoutOptions::default()
        };
        assert_eq!(
            inverted.validate(),
            Err(LayoutError::InvertedMargins {
                top: 40.0,
                bottom: 50.0
            })
        );

        let above_top = LayoutOptions {
            title_spacing: -500.0,
            ..LayoutOptions::default()
        };
        assert_eq!(
            above_top.validate(),
            Err(LayoutError::InvalidTitleSpacing(-500.0))
        );

        let nan = LayoutOptions {
            title_spacing: f32::NAN,
            ..LayoutOptions::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(LayoutError::InvalidTitleSpacing(v)) if v.is_nan()
        ));

        let zero_gap = LayoutOptions {
            title_spacing: 0.0,
            ..LayoutOptions::default()
        };
        assert_eq!(zero_gap.validate(), Ok(()));
    }
}
