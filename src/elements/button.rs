use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const BUTTON_HEIGHT: u16 = 3;

/// Bordered one-line button
///
/// Activation counts presses and reports the button text back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    text: String,
    presses: u32,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            presses: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn presses(&self) -> u32 {
        self.presses
    }
}

impl super::Element for Button {
    fn height(&self, _width: u16) -> u16 {
        BUTTON_HEIGHT
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        // Sized to the label plus border and one column of padding
        let width = (self.text.chars().count() as u16)
            .saturating_add(4)
            .min(area.width);
        let x = area.x + (area.width - width) / 2;
        let button_area = Rect::new(x, area.y, width, area.height.min(BUTTON_HEIGHT));

        Paragraph::new(self.text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Black).bg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(button_area, buf);
    }

    fn activate(&mut self) -> Option<String> {
        self.presses = self.presses.saturating_add(1);
        Some(self.text.clone())
    }
}
