//! Wheel event decoding and translation
//!
//! Platform wheel input arrives either as discrete button presses (X11
//! buttons 4 and 5, terminal scroll reports) or as a continuous delta
//! (Windows/macOS `WHEEL_DELTA` multiples). Both are decoded into
//! [`WheelEvent`] once at the input boundary and translated to a signed unit
//! count by [`scroll_units`].

mod wheel_event;

pub use wheel_event::{WHEEL_DELTA, WheelButton, WheelEvent, scroll_units};

#[cfg(test)]
#[path = "wheel/wheel_event_tests.rs"]
mod wheel_event_tests;
