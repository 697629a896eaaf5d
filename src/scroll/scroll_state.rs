/// Vertical view offset into a scroll region, in rows.
///
/// `offset` is the first visible row of the region and is always kept in
/// `0..=max_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_lines: u32, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as u32)
            .min(u16::MAX as u32) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll by a signed row count (negative scrolls toward the top).
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, rows: i32) -> bool {
        let before = self.offset;
        let magnitude = rows.unsigned_abs().min(u16::MAX as u32) as u16;
        if rows < 0 {
            self.scroll_up(magnitude);
        } else {
            self.scroll_down(magnitude);
        }
        self.offset != before
    }

    /// Move to a fraction of the scrollable range (0.0 = top, 1.0 = bottom).
    pub fn move_to(&mut self, fraction: f64) {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.offset = (fraction * self.max_offset as f64).round() as u16;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
