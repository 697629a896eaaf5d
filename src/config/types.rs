// Configuration type definitions

use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::wheel::WHEEL_DELTA;

/// Background of the drawing surface and content panel
pub const DEFAULT_BACKGROUND: Color = Color::Rgb(0xDD, 0xDD, 0xDD);

/// Wheel translation section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WheelConfig {
    /// Rows scrolled per wheel unit
    #[serde(default = "default_unit_rows")]
    pub unit_rows: u16,
    /// Raw continuous delta that makes up one unit
    #[serde(default = "default_delta_divisor")]
    pub delta_divisor: i32,
}

fn default_unit_rows() -> u16 {
    1
}

fn default_delta_divisor() -> i32 {
    WHEEL_DELTA
}

impl WheelConfig {
    /// Reset settings that would stop or reverse scrolling to their defaults.
    ///
    /// Returns one message per setting that was reset.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.unit_rows == 0 {
            problems.push("wheel.unit_rows must be at least 1".to_string());
            self.unit_rows = default_unit_rows();
        }
        if self.delta_divisor <= 0 {
            problems.push(format!(
                "wheel.delta_divisor must be positive, got {}",
                self.delta_divisor
            ));
            self.delta_divisor = default_delta_divisor();
        }
        problems
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        WheelConfig {
            unit_rows: default_unit_rows(),
            delta_divisor: default_delta_divisor(),
        }
    }
}

/// Frame appearance section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct FrameConfig {
    /// Canvas background, any colour ratatui can parse ("#DDDDDD", "gray")
    #[serde(default)]
    pub background: Option<String>,
    /// Blank rows above and below each child; unset leaves the choice to the host
    #[serde(default)]
    pub pady: Option<u16>,
}

impl FrameConfig {
    /// Parsed background colour, falling back to the default grey
    pub fn background_color(&self) -> Color {
        self.background
            .as_deref()
            .and_then(|value| Color::from_str(value).ok())
            .unwrap_or(DEFAULT_BACKGROUND)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub wheel: WheelConfig,
    #[serde(default)]
    pub frame: FrameConfig,
}
