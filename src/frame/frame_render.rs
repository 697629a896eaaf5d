//! Rendering for ScrollableFrame

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::scrollable_frame::ScrollableFrame;
use crate::widgets::scrollbar::render_vertical_scrollbar;

impl ScrollableFrame {
    /// Lay out in `area`, settle geometry and draw.
    pub fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        self.layout(area);
        self.sync_layout();

        buf.set_style(area, self.options().style);
        if let Some(block) = &self.options().block {
            block.clone().render(area, buf);
        }

        let viewport = self.canvas().viewport();
        buf.set_style(viewport, Style::default().bg(self.canvas().background()));
        self.render_children(buf);

        render_vertical_scrollbar(
            buf,
            self.scrollbar_area(),
            self.canvas().scroll_region().height as usize,
            viewport.height as usize,
            self.canvas().offset() as usize,
            Style::default().fg(Color::DarkGray),
        );
    }

    /// Copy the visible rows of each child into the viewport.
    ///
    /// Children are drawn at full size into a scratch buffer so partially
    /// visible children clip cleanly at the viewport edges. Only children
    /// overlapping the viewport are drawn, but each of those is drawn at its
    /// full height, so the cost follows the tallest partially visible child.
    /// One scratch buffer is reused for every child in a pass.
    fn render_children(&self, buf: &mut Buffer) {
        let canvas = self.canvas();
        let viewport = canvas.viewport();
        if viewport.is_empty() {
            return;
        }

        let top = canvas.scroll_region().y.saturating_add(canvas.offset());
        let bottom = top.saturating_add(viewport.height);
        let background = Style::default().bg(canvas.background());
        let mut scratch = Buffer::empty(Rect::ZERO);

        for (child, slot) in self.inner.children().zip(self.inner.slots()) {
            if slot.is_empty() || slot.bottom() <= top || slot.y >= bottom {
                continue;
            }

            let child_area = Rect::new(0, 0, slot.width, slot.height);
            scratch.resize(child_area);
            scratch.reset();
            scratch.set_style(child_area, background);
            child.render(child_area, &mut scratch);

            let columns = slot.width.min(viewport.width);
            for row in slot.y.max(top)..slot.bottom().min(bottom) {
                let source_y = row - slot.y;
                let target_y = viewport.y + (row - top);
                for column in 0..columns {
                    buf[(viewport.x + column, target_y)] = scratch[(column, source_y)].clone();
                }
            }
        }
    }
}

impl Widget for &mut ScrollableFrame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw(area, buf);
    }
}
