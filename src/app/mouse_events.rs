//! Mouse event dispatcher
//!
//! Routes mouse events to appropriate handlers based on position.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;
use super::{mouse_click, mouse_hover, mouse_scroll};
use crate::layout::region_at;

/// Handle mouse events by routing to appropriate handlers
///
/// Every event first updates hover state so enter/leave transitions are
/// applied before the event itself is routed.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);
    mouse_hover::handle_hover(app, region);

    match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            mouse_scroll::handle_scroll(app, mouse);
        }
        MouseEventKind::Down(_) | MouseEventKind::Drag(_) | MouseEventKind::Up(_) => {
            mouse_click::handle_click(app, region, mouse);
        }
        // Horizontal scrolling and plain moves need no routing
        _ => {}
    }
}
