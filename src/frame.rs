//! Scrollable frame widget
//!
//! A [`ScrollableFrame`] composes a drawing surface ([`Canvas`]), a vertical
//! scrollbar and a [`ContentPanel`] embedded in the canvas. Layout keeps two
//! projections in step:
//!
//! - canvas visible width → panel displayed width
//! - panel bounding box → canvas scroll region
//!
//! Wheel scrolling is only active while the pointer is over the canvas; see
//! [`WheelRoute`](crate::route::WheelRoute).

mod canvas;
mod frame_render;
mod options;
mod panel;
mod scrollable_frame;

pub use canvas::Canvas;
pub use options::FrameOptions;
pub use panel::ContentPanel;
pub use scrollable_frame::{BindingState, MouseResponse, ScrollableFrame};
