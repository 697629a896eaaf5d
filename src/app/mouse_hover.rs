//! Mouse hover handling
//!
//! Turns pointer movement into enter/leave notifications on frame canvases.

use super::app_state::App;
use crate::layout::Region;

/// Update hover state for the region under the pointer
///
/// The previously hovered frame is notified of the leave before the newly
/// hovered frame is notified of the enter, so the new frame ends up holding
/// the wheel route.
pub fn handle_hover(app: &mut App, region: Option<Region>) {
    let hovered = match region {
        Some(Region::Canvas(id)) => Some(id),
        _ => None,
    };

    if hovered == app.hovered {
        return;
    }

    if let Some(previous) = app.hovered.take()
        && let Some(frame) = app.frame_mut(previous)
    {
        frame.on_pointer_leave();
    }

    if let Some(id) = hovered
        && let Some(frame) = app.frame_mut(id)
    {
        frame.on_pointer_enter();
    }

    app.hovered = hovered;
}
