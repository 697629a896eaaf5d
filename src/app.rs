mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_events;
mod mouse_hover;
mod mouse_scroll;


// Re-export public types
pub use app_state::{App, DEMO_PADY, HOST_HEIGHT, HOST_WIDTH, TITLE};
pub use mouse_events::handle_mouse_event;
