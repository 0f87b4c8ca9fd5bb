// Layout public API types
//
// A layout is the hand-off between the pagination engine and a renderer:
// an ordered list of lines, each already assigned to a page and a vertical
// offset. The renderer only draws text at the given coordinates.

/// Presentation marker carried alongside each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    /// The document title (drawn bold/larger).
    Title,
    /// Regular body text.
    #[default]
    Body,
}

/// One physical output line.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    /// Text to draw. May be empty for blank lines.
    pub text: String,

    /// Target page, 1-based.
    pub page: usize,

    /// Vertical offset on the page, in points from the bottom edge.
    pub y: f32,

    /// Title or body.
    pub style: LineStyle,
}

impl LayoutLine {
    /// Create a body line.
    pub fn body(text: impl Into<String>, page: usize, y: f32) -> Self {
        Self {
            text: text.into(),
            page,
            y,
            style: LineStyle::Body,
        }
    }

    /// Create a title line.
    pub fn title(text: impl Into<String>, page: usize, y: f32) -> Self {
        Self {
            text: text.into(),
            page,
            y,
            style: LineStyle::Title,
        }
    }
}

/// Result of paginating a document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    /// Lines in drawing order. The first line is always the title.
    pub lines: Vec<LayoutLine>,

    /// Highest page number referenced by any line.
    pub page_count: usize,
}

impl Layout {
    /// Build a layout from lines, deriving the page count.
    pub fn from_lines(lines: Vec<LayoutLine>) -> Self {
        let page_count = lines.iter().map(|l| l.page).max().unwrap_or(0);
        Self { lines, page_count }
    }

    /// Iterate over the lines placed on `page`.
    pub fn lines_on_page(&self, page: usize) -> impl Iterator<Item = &LayoutLine> {
        self.lines.iter().filter(move |l| l.page == page)
    }

    /// Iterate over body lines only.
    pub fn body_lines(&self) -> impl Iterator<Item = &LayoutLine> {
        self.lines.iter().filter(|l| l.style == LineStyle::Body)
    }

    /// Whether the layout holds no body text.
    pub fn is_empty_body(&self) -> bool {
        self.body_lines().next().is_none()
    }
}
