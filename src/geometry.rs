//! Rectangle helpers shared by layout and hit testing

use ratatui::layout::{Position, Rect};

/// Smallest rectangle enclosing every rectangle in `rects`
///
/// Returns `None` for an empty iterator. Zero-sized rectangles still
/// contribute their position.
pub fn bounding_box<I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = Rect>,
{
    rects.into_iter().reduce(|acc, rect| acc.union(rect))
}

/// Check if a point is within a rectangle
pub fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    rect.contains(Position::new(x, y))
}
