//! Mouse scroll handling
//!
//! Wheel events go to whichever frame holds the wheel route, wherever the
//! pointer is. With no holder, wheel events are dropped.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;

pub fn handle_scroll(app: &mut App, mouse: MouseEvent) {
    let Some(holder) = app.route.holder() else {
        return;
    };

    if let Some(frame) = app.frame_mut(holder) {
        frame.handle_mouse_event(mouse);
    }
}
