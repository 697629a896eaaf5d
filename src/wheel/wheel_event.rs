use ratatui::crossterm::event::MouseEventKind;

use crate::config::WheelConfig;

/// Raw delta reported for one notch of a continuous wheel
pub const WHEEL_DELTA: i32 = 120;

/// Discrete wheel button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelButton {
    /// Button 4: toward the start of the content
    Up,
    /// Button 5: toward the end of the content
    Down,
}

impl WheelButton {
    /// Decode an X11-style button number. Only 4 and 5 are wheel buttons.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            4 => Some(Self::Up),
            5 => Some(Self::Down),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Up => 4,
            Self::Down => 5,
        }
    }
}

/// A wheel event in one of the two platform encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    Discrete(WheelButton),
    /// Raw platform delta; positive means the wheel was rolled away from the user
    Continuous(i32),
}

impl WheelEvent {
    /// Decode a crossterm mouse event kind. Terminals report wheel notches as
    /// discrete scroll events; anything else is not a wheel event.
    pub fn from_mouse_kind(kind: MouseEventKind) -> Option<Self> {
        match kind {
            MouseEventKind::ScrollUp => Some(Self::Discrete(WheelButton::Up)),
            MouseEventKind::ScrollDown => Some(Self::Discrete(WheelButton::Down)),
            _ => None,
        }
    }
}

/// Translate a wheel event to a signed unit count.
///
/// Negative values scroll toward the top of the content. Continuous deltas
/// are divided by the configured divisor, truncated toward zero, and
/// inverted, so a positive delta scrolls back toward the top.
pub fn scroll_units(event: WheelEvent, config: &WheelConfig) -> i32 {
    match event {
        WheelEvent::Discrete(WheelButton::Up) => -1,
        WheelEvent::Discrete(WheelButton::Down) => 1,
        WheelEvent::Continuous(delta) => delta
            .checked_div(config.delta_divisor)
            .unwrap_or_else(|| delta / WHEEL_DELTA)
            .saturating_neg(),
    }
}
