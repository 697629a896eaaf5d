//! The scrollable frame: canvas, scrollbar and content panel wired together

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Position, Rect};

use super::canvas::Canvas;
use super::options::FrameOptions;
use super::panel::ContentPanel;
use crate::route::{FrameId, WheelRoute};
use crate::wheel::{self, WheelEvent};
use crate::widgets::scrollbar;

/// Wheel capture state of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unbound,
    Bound,
}

/// Outcome of a mouse event delivered to a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseResponse {
    Ignored,
    Consumed,
    /// A child was clicked and reported this message
    Activated(String),
}

/// Fixed-size viewport onto an arbitrarily tall content panel
///
/// The frame owns its drawing surface and content panel. Application code
/// fills [`inner`](Self::inner) with children; the frame keeps the panel's
/// width equal to the visible width and the scroll region equal to the
/// panel's bounding box. Wheel events are only honoured while the frame holds
/// the shared [`WheelRoute`], which it claims on pointer-enter and releases on
/// pointer-leave.
#[derive(Debug)]
pub struct ScrollableFrame {
    id: FrameId,
    route: WheelRoute,
    options: FrameOptions,
    canvas: Canvas,
    scrollbar_area: Rect,
    dragging_scrollbar: bool,
    pub inner: ContentPanel,
}

impl ScrollableFrame {
    pub fn new(route: WheelRoute, options: FrameOptions) -> Self {
        let canvas = Canvas::new(options.background);
        let inner = ContentPanel::new(options.pady);
        Self {
            id: FrameId::next(),
            route,
            options,
            canvas,
            scrollbar_area: Rect::default(),
            dragging_scrollbar: false,
            inner,
        }
    }

    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn options(&self) -> &FrameOptions {
        &self.options
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn inner(&self) -> &ContentPanel {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut ContentPanel {
        &mut self.inner
    }

    pub fn scrollbar_area(&self) -> Rect {
        self.scrollbar_area
    }

    pub fn state(&self) -> BindingState {
        if self.route.is_held_by(self.id) {
            BindingState::Bound
        } else {
            BindingState::Unbound
        }
    }

    pub fn is_bound(&self) -> bool {
        self.state() == BindingState::Bound
    }

    /// Place the frame in `area`: canvas on the left filling the space,
    /// scrollbar in a fixed-width column on the right.
    pub fn layout(&mut self, area: Rect) {
        let inner_area = match &self.options.block {
            Some(block) => block.inner(area),
            None => area,
        };
        let [canvas_area, scrollbar_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(self.options.scrollbar_width),
        ])
        .areas(inner_area);

        self.scrollbar_area = scrollbar_area;
        if canvas_area != self.canvas.viewport() {
            self.on_viewport_resize(canvas_area);
        }
    }

    /// Canvas geometry changed: the embedded panel takes the visible width.
    pub fn on_viewport_resize(&mut self, viewport: Rect) {
        #[cfg(debug_assertions)]
        log::debug!(
            "frame {} viewport resized to {}x{}",
            self.id.get(),
            viewport.width,
            viewport.height
        );

        self.canvas.set_viewport(viewport);
        self.canvas.set_window_width(viewport.width);
        self.inner.set_width(viewport.width);
    }

    /// Panel geometry changed: the scroll region becomes its bounding box.
    pub fn on_content_configure(&mut self) {
        let region = self.inner.bounding_box();

        #[cfg(debug_assertions)]
        log::debug!(
            "frame {} scroll region {}x{}",
            self.id.get(),
            region.width,
            region.height
        );

        self.canvas.set_scroll_region(region);
    }

    /// Settle layout after any resize or content change.
    ///
    /// Applies the width projection and then the bounding-box projection.
    /// Neither triggers the other, so calling this repeatedly is a no-op.
    /// Rendering and every scrolling entry point call this first, so edits to
    /// [`inner`](Self::inner) never scroll against a stale region.
    pub fn sync_layout(&mut self) {
        let viewport_width = self.canvas.viewport().width;
        if self.inner.width() != viewport_width || self.canvas.window_width() != viewport_width {
            self.on_viewport_resize(self.canvas.viewport());
        }
        if self.inner.bounding_box() != self.canvas.scroll_region() {
            self.on_content_configure();
        }
    }

    /// Pointer entered the canvas: claim the wheel route.
    pub fn on_pointer_enter(&mut self) {
        #[cfg(debug_assertions)]
        log::debug!("frame {} bound wheel route", self.id.get());

        self.route.bind(self.id);
    }

    /// Pointer left the canvas: release the wheel route.
    pub fn on_pointer_leave(&mut self) {
        #[cfg(debug_assertions)]
        log::debug!("frame {} unbound wheel route", self.id.get());

        self.route.unbind();
    }

    /// Scroll the canvas for a wheel event; ignored unless this frame holds the route.
    ///
    /// Returns `true` if the view moved.
    pub fn on_wheel(&mut self, event: WheelEvent) -> bool {
        if !self.is_bound() {
            return false;
        }
        self.sync_layout();
        let units = wheel::scroll_units(event, &self.options.wheel);
        let rows = units.saturating_mul(self.options.wheel.unit_rows as i32);
        self.canvas.yview_scroll(rows)
    }

    pub fn yview_scroll(&mut self, rows: i32) -> bool {
        self.sync_layout();
        self.canvas.yview_scroll(rows)
    }

    pub fn yview_moveto(&mut self, fraction: f64) {
        self.sync_layout();
        self.canvas.yview_moveto(fraction);
    }

    /// Handle wheel, scrollbar and click input addressed to this frame.
    ///
    /// Hover tracking is the host's job: it calls
    /// [`on_pointer_enter`](Self::on_pointer_enter) and
    /// [`on_pointer_leave`](Self::on_pointer_leave) as the pointer crosses
    /// the canvas.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> MouseResponse {
        // Children may have changed since the last draw
        self.sync_layout();

        if let Some(event) = WheelEvent::from_mouse_kind(mouse.kind) {
            if !self.is_bound() {
                return MouseResponse::Ignored;
            }
            self.on_wheel(event);
            return MouseResponse::Consumed;
        }

        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.scrollbar_area.contains(position) => {
                self.dragging_scrollbar = true;
                self.move_to_scrollbar_row(mouse.row);
                MouseResponse::Consumed
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging_scrollbar => {
                self.move_to_scrollbar_row(mouse.row);
                MouseResponse::Consumed
            }
            MouseEventKind::Up(MouseButton::Left) if self.dragging_scrollbar => {
                self.dragging_scrollbar = false;
                MouseResponse::Consumed
            }
            MouseEventKind::Down(MouseButton::Left)
                if self.canvas.viewport().contains(position) =>
            {
                self.activate_child_at(mouse.row)
            }
            _ => MouseResponse::Ignored,
        }
    }

    fn move_to_scrollbar_row(&mut self, row: u16) {
        let fraction = scrollbar::fraction_for_row(self.scrollbar_area, row);
        self.canvas.yview_moveto(fraction);
    }

    fn activate_child_at(&mut self, row: u16) -> MouseResponse {
        let Some(index) = self
            .canvas
            .content_row(row)
            .and_then(|content_row| self.inner.child_at(content_row))
        else {
            return MouseResponse::Consumed;
        };

        match self.inner.child_mut(index).and_then(|child| child.activate()) {
            Some(message) => MouseResponse::Activated(message),
            None => MouseResponse::Consumed,
        }
    }
}
