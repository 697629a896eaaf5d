//! scrollframe library - scrollable container widget for ratatui
//!
//! A [`ScrollableFrame`] presents a fixed-size viewport onto an arbitrarily
//! tall [`ContentPanel`], with a vertical scrollbar and mouse-wheel scrolling
//! that is only active while the pointer hovers over the frame.

pub mod app;
pub mod config;
pub mod elements;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod route;
pub mod scroll;
#[cfg(test)]
pub mod test_utils;
pub mod wheel;
pub mod widgets;

// Re-export commonly used types for convenience
pub use config::Config;
pub use elements::{Button, Element, Label};
pub use frame::{BindingState, ContentPanel, FrameOptions, MouseResponse, ScrollableFrame};
pub use route::{FrameId, WheelRoute};
pub use wheel::{WheelButton, WheelEvent, scroll_units};
