//! Layout regions tracking for UI components
//!
//! Tracks where frames are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

use crate::frame::ScrollableFrame;
use crate::route::FrameId;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Drawing surface of a frame; hovering it binds the wheel route
    Canvas(FrameId),
    Scrollbar(FrameId),
    /// Host window outside any frame
    Host,
}

impl Region {
    pub fn frame_id(self) -> Option<FrameId> {
        match self {
            Region::Canvas(id) | Region::Scrollbar(id) => Some(id),
            Region::Host => None,
        }
    }
}

/// Rendered areas of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegions {
    pub id: FrameId,
    pub canvas: Rect,
    pub scrollbar: Rect,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Used by mouse event handlers to determine
/// which component is under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub host: Option<Rect>,
    pub frames: Vec<FrameRegions>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        self.host = None;
        self.frames.clear();
    }

    /// Record where a frame was just rendered
    pub fn record_frame(&mut self, frame: &ScrollableFrame) {
        self.frames.push(FrameRegions {
            id: frame.id(),
            canvas: frame.canvas().viewport(),
            scrollbar: frame.scrollbar_area(),
        });
    }
}
