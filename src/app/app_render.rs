use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::app_state::{App, HOST_HEIGHT, HOST_WIDTH, TITLE};
use crate::widgets::placement::{centered_rect, inset_rect};

impl App {
    /// Render the host window and both frames
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let host = centered_rect(frame.area(), HOST_WIDTH, HOST_HEIGHT);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title_line());
        let inner = block.inner(host);
        frame.render_widget(block, host);
        self.layout_regions.host = Some(host);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(inner);

        for (scrollable, area) in self.frames.iter_mut().zip([left, right]) {
            frame.render_widget(&mut *scrollable, inset_rect(area, 1, 1));
            self.layout_regions.record_frame(scrollable);
        }
    }

    fn title_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(format!(" {} ", TITLE))];
        if let Some(status) = &self.status {
            spans.push(Span::styled(
                format!("| {} ", status),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}
