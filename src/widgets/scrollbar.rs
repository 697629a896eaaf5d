//! Vertical scrollbar rendering and hit mapping
//!
//! The scrollbar is a projection of the canvas view: the view offset drives
//! the thumb, and a click or drag on the track maps back to a view fraction.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

/// Render a vertical scrollbar filling `area`
///
/// The scrollbar is only rendered if the content exceeds the viewport size.
/// Uses ratatui's Scrollbar widget with minimal styling (no end symbols).
///
/// # Arguments
/// * `buf` - The buffer to render to
/// * `area` - The scrollbar column
/// * `total_rows` - Height of the scroll region
/// * `viewport_rows` - Number of visible rows
/// * `scroll_offset` - Current scroll position (0 = top)
/// * `style` - Style for the thumb and track
pub fn render_vertical_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    total_rows: usize,
    viewport_rows: usize,
    scroll_offset: usize,
    style: Style,
) {
    if total_rows <= viewport_rows || viewport_rows == 0 || area.is_empty() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(style)
        .track_style(style);

    // Ratatui uses max_position = content_length - 1 for thumb positioning.
    // To make the thumb reach the bottom when at max scroll, we pass
    // content_length = max_scroll + 1, so max_position equals our max_scroll.
    let max_scroll = total_rows.saturating_sub(viewport_rows);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(scroll_offset.min(max_scroll))
        .viewport_content_length(viewport_rows);

    scrollbar.render(area, buf, &mut state);
}

/// Fraction of the scrollable range selected by a click on track row `row`
///
/// The top row maps to 0.0 and the bottom row to 1.0; rows outside the track
/// clamp to the nearest end.
pub fn fraction_for_row(track: Rect, row: u16) -> f64 {
    if track.height <= 1 {
        return 0.0;
    }
    let relative = row.clamp(track.y, track.bottom() - 1) - track.y;
    relative as f64 / (track.height - 1) as f64
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
