//! Vertical view offset tracking for the drawing surface

mod scroll_state;

pub use scroll_state::ScrollState;
