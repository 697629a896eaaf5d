use ratatui::widgets::{Block, Borders};

use crate::config::Config;
use crate::elements::{Button, Label};
use crate::frame::{FrameOptions, ScrollableFrame};
use crate::layout::LayoutRegions;
use crate::route::{FrameId, WheelRoute};

/// Fixed host window size in cells
pub const HOST_WIDTH: u16 = 60;
pub const HOST_HEIGHT: u16 = 20;

pub const TITLE: &str = "Scrollable Frame Example";

/// Blank rows around each demo child unless the config sets `frame.pady`
pub const DEMO_PADY: u16 = 1;

/// Demo host: two scrollable frames side by side sharing one wheel route
pub struct App {
    pub frames: Vec<ScrollableFrame>,
    pub route: WheelRoute,
    pub layout_regions: LayoutRegions,
    /// Frame whose canvas the pointer is over
    pub hovered: Option<FrameId>,
    /// Frame that received the last button press, for drag and release
    pub pressed: Option<FrameId>,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, labels: usize, buttons: usize) -> Self {
        let route = WheelRoute::new();
        let options = FrameOptions::from_config(config)
            .pady(config.frame.pady.unwrap_or(DEMO_PADY))
            .block(Block::default().borders(Borders::ALL));

        let mut left = ScrollableFrame::new(route.clone(), options.clone());
        for i in 0..labels {
            left.inner.push(Label::new(format!("Frame 1 Label {}", i + 1)));
        }

        let mut right = ScrollableFrame::new(route.clone(), options);
        for i in 0..buttons {
            right.inner.push(Button::new(format!("Click {}", i + 1)));
        }

        Self {
            frames: vec![left, right],
            route,
            layout_regions: LayoutRegions::new(),
            hovered: None,
            pressed: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn frame(&self, id: FrameId) -> Option<&ScrollableFrame> {
        self.frames.iter().find(|frame| frame.id() == id)
    }

    pub fn frame_mut(&mut self, id: FrameId) -> Option<&mut ScrollableFrame> {
        self.frames.iter_mut().find(|frame| frame.id() == id)
    }

    /// Frame currently receiving wheel events
    pub fn wheel_target(&self) -> Option<&ScrollableFrame> {
        self.route.holder().and_then(|id| self.frame(id))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
