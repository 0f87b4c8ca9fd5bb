// Page cursor: where the next line goes.
//
// The cursor is a tiny state machine with a single state, "on page P at
// offset Y". Deciding whether to break (`needs_advance`) is kept separate
// from performing the break (`advance`) so that callers can choose how
// often the decision is taken.

/// Vertical bounds of a page, in points from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBounds {
    /// Offset of the first line on a fresh page.
    pub top_y: f32,
    /// Lines must not be placed below this offset.
    pub bottom_y: f32,
    /// Distance between consecutive lines.
    pub line_pitch: f32,
}

/// Current write position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    page: usize,
    y: f32,
    bounds: PageBounds,
}

impl PageCursor {
    /// A cursor at the top of page 1.
    pub fn new(bounds: PageBounds) -> Self {
        Self {
            page: 1,
            y: bounds.top_y,
            bounds,
        }
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current vertical offset.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Whether the offset has crossed the bottom margin.
    pub fn needs_advance(&self) -> bool {
        self.y < self.bounds.bottom_y
    }

    /// Start a new page and move to its top.
    pub fn advance(&mut self) {
        self.page += 1;
        self.y = self.bounds.top_y;
    }

    /// Advance if the bottom margin has been crossed. Returns whether a new
    /// page was started.
    pub fn advance_if_needed(&mut self) -> bool {
        if self.needs_advance() {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Move down by one line pitch.
    pub fn feed_line(&mut self) {
        self.y -= self.bounds.line_pitch;
    }

    /// Move down by an arbitrary amount.
    pub fn skip(&mut self, dy: f32) {
        self.y -= dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: PageBounds = PageBounds {
        top_y: 750.0,
        bottom_y: 50.0,
        line_pitch: 15.0,
    };

    #[test]
    fn starts_at_top_of_page_one() {
        let c = PageCursor::new(BOUNDS);
        assert_eq!(c.page(), 1);
        assert_eq!(c.y(), 750.0);
        assert!(!c.needs_advance());
    }

    #[test]
    fn bottom_margin_itself_is_usable() {
        let mut c = PageCursor::new(BOUNDS);
        c.skip(700.0);
        assert_eq!(c.y(), 50.0);
        assert!(!c.advance_if_needed());
        c.feed_line();
        assert!(c.needs_advance());
    }

    #[test]
    fn advance_resets_offset() {
        let mut c = PageCursor::new(BOUNDS);
        c.skip(701.0);
        assert!(c.advance_if_needed());
        assert_eq!(c.page(), 2);
        assert_eq!(c.y(), 750.0);
        assert!(!c.advance_if_needed());
        assert_eq!(c.page(), 2);
    }
}
