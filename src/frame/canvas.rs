//! Drawing surface: visible viewport over a scroll region

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::scroll::ScrollState;

/// Scrollable drawing surface
///
/// `viewport` is in screen coordinates. `scroll_region` is in content
/// coordinates with the embedded panel anchored north-west at `(0, 0)`.
/// The view offset is the first region row shown at the top of the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    viewport: Rect,
    window_width: u16,
    scroll_region: Rect,
    scroll: ScrollState,
    background: Color,
}

impl Canvas {
    pub fn new(background: Color) -> Self {
        Self {
            viewport: Rect::default(),
            window_width: 0,
            scroll_region: Rect::default(),
            scroll: ScrollState::new(),
            background,
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Displayed width of the embedded content panel
    pub fn window_width(&self) -> u16 {
        self.window_width
    }

    pub fn scroll_region(&self) -> Rect {
        self.scroll_region
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// First visible row of the scroll region
    pub fn offset(&self) -> u16 {
        self.scroll.offset
    }

    pub fn max_offset(&self) -> u16 {
        self.scroll.max_offset
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.refresh_bounds();
    }

    pub fn set_window_width(&mut self, width: u16) {
        self.window_width = width;
    }

    pub fn set_scroll_region(&mut self, region: Rect) {
        self.scroll_region = region;
        self.refresh_bounds();
    }

    fn refresh_bounds(&mut self) {
        self.scroll
            .update_bounds(self.scroll_region.height as u32, self.viewport.height);
    }

    /// Scroll the view by `rows`; negative moves toward the top.
    ///
    /// Returns `true` if the view moved.
    pub fn yview_scroll(&mut self, rows: i32) -> bool {
        self.scroll.scroll_by(rows)
    }

    /// Move the view to a fraction of its scrollable range
    pub fn yview_moveto(&mut self, fraction: f64) {
        self.scroll.move_to(fraction);
    }

    /// Visible span of the scroll region as `(first, last)` fractions
    pub fn yview(&self) -> (f64, f64) {
        let total = self.scroll_region.height;
        if total == 0 {
            return (0.0, 1.0);
        }
        let first = self.scroll.offset as f64 / total as f64;
        let last = (self.scroll.offset as u32 + self.viewport.height as u32).min(total as u32)
            as f64
            / total as f64;
        (first, last)
    }

    /// Scroll-region row under screen row `row`, if the row is in the viewport
    pub fn content_row(&self, row: u16) -> Option<u16> {
        if row < self.viewport.y || row >= self.viewport.bottom() {
            return None;
        }
        let row = self.scroll_region.y as u32 + self.scroll.offset as u32
            + (row - self.viewport.y) as u32;
        (row < self.scroll_region.bottom() as u32).then_some(row as u16)
    }

    /// Whether the content is taller than the viewport
    pub fn overflows(&self) -> bool {
        self.scroll.max_offset > 0
    }
}
