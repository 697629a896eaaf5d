//! Hit testing for layout regions
//!
//! Determines which UI component is at a given screen position.

use super::layout_regions::{LayoutRegions, Region};
use crate::geometry::contains;

/// Returns the topmost region containing the given point
///
/// Frames are checked in reverse render order (last rendered is topmost),
/// then the host window. Returns `None` if the point is outside all tracked
/// regions.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    for frame in regions.frames.iter().rev() {
        if contains(&frame.canvas, x, y) {
            return Some(Region::Canvas(frame.id));
        }
        if contains(&frame.scrollbar, x, y) {
            return Some(Region::Scrollbar(frame.id));
        }
    }

    if let Some(rect) = &regions.host
        && contains(rect, x, y)
    {
        return Some(Region::Host);
    }

    None
}
