//! Shared test utilities for scrollframe
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    use crate::app::{App, HOST_HEIGHT, HOST_WIDTH};
    use crate::config::Config;
    use crate::elements::Button;
    use crate::frame::{FrameOptions, ScrollableFrame};
    use crate::route::WheelRoute;

    /// Helper to create the demo App with default config for tests
    pub fn test_app() -> App {
        App::new(&Config::default(), 20, 30)
    }

    /// Helper to render the app once at the fixed host size
    pub fn render_app(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(HOST_WIDTH, HOST_HEIGHT)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
    }

    /// Helper to create a frame of `buttons` three-row buttons laid out in `area`
    pub fn populated_frame(route: WheelRoute, area: Rect, buttons: usize) -> ScrollableFrame {
        let mut frame = ScrollableFrame::new(route, FrameOptions::default());
        for i in 0..buttons {
            frame.inner.push(Button::new(format!("Click {}", i + 1)));
        }
        frame.layout(area);
        frame.sync_layout();
        frame
    }

    /// Helper to create a MouseEvent without modifiers
    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Text of one buffer row
    pub fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }
}
