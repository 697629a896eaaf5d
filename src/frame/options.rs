use ratatui::{
    style::{Color, Style},
    widgets::Block,
};

use crate::config::{Config, DEFAULT_BACKGROUND, WheelConfig};

/// Construction options passed through to the outer frame
#[derive(Debug, Clone)]
pub struct FrameOptions {
    /// Border and title drawn around the whole frame
    pub block: Option<Block<'static>>,
    /// Style applied to the outer frame area
    pub style: Style,
    /// Canvas and content panel background
    pub background: Color,
    /// Scrollbar column width
    pub scrollbar_width: u16,
    /// Blank rows above and below each child
    pub pady: u16,
    pub wheel: WheelConfig,
}

impl FrameOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            background: config.frame.background_color(),
            pady: config.frame.pady.unwrap_or_default(),
            wheel: config.wheel,
            ..Self::default()
        }
    }

    pub fn block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn pady(mut self, pady: u16) -> Self {
        self.pady = pady;
        self
    }
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            block: None,
            style: Style::default(),
            background: DEFAULT_BACKGROUND,
            scrollbar_width: 1,
            pady: 0,
            wheel: WheelConfig::default(),
        }
    }
}
