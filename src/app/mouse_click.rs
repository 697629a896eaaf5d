//! Mouse click handling
//!
//! Presses go to the frame under the pointer; drags and the release go to
//! the frame that received the press.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::frame::MouseResponse;
use crate::layout::Region;

pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    let target = match mouse.kind {
        MouseEventKind::Down(_) => {
            app.pressed = region.and_then(Region::frame_id);
            app.pressed
        }
        MouseEventKind::Drag(_) => app.pressed,
        MouseEventKind::Up(_) => app.pressed.take(),
        _ => None,
    };

    let Some(frame) = target.and_then(|id| app.frame_mut(id)) else {
        return;
    };

    if let MouseResponse::Activated(message) = frame.handle_mouse_event(mouse) {
        #[cfg(debug_assertions)]
        log::debug!("Activated: {}", message);

        app.status = Some(format!("Clicked {}", message));
    }
}
