use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Text,
    widgets::{Paragraph, Widget},
};

/// Static text, one row per line, centred horizontally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
    style: Style,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default().fg(Color::Black),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl super::Element for Label {
    fn height(&self, _width: u16) -> u16 {
        self.text.lines().count().clamp(1, u16::MAX as usize) as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Text::raw(self.text.as_str()))
            .style(self.style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
