//! Child elements for the content panel
//!
//! Anything placed in a [`ContentPanel`](crate::frame::ContentPanel)
//! implements [`Element`]. The panel asks each element for its natural height
//! at the panel's width and renders it into a scratch buffer of exactly that
//! size, so elements never need to know about scrolling or clipping.

mod button;
mod label;

use std::fmt;

use ratatui::{buffer::Buffer, layout::Rect};

pub use button::Button;
pub use label::Label;

pub trait Element: fmt::Debug {
    /// Natural height in rows when laid out at `width` columns
    fn height(&self, width: u16) -> u16;

    /// Draw into `area`, which is exactly `height(area.width)` rows tall
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Called on a left click inside the element.
    ///
    /// Returns a message for the host when the click did something.
    fn activate(&mut self) -> Option<String> {
        None
    }
}
