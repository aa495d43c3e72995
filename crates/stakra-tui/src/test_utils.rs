//! Test utilities for widget rendering
//!
//! Renders widgets into ratatui's `TestBackend` so tests can inspect
//! buffer text and cell colors.
//!
//! # Example
//!
//! ```ignore
//! let theme = build_theme();
//! let mut term = TestTerminal::new();
//! term.render_widget(StatusBadge::new(&theme, "done"), term.area());
//! assert!(term.buffer_contains("Done"));
//! ```

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use crate::preview::buffer_text;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Below the showcase minimum, for fallback layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// A `TestBackend` terminal with text and color lookups.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal should build");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("test terminal has a size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("widget should render");
    }

    /// Draw a full frame with a custom closure
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("frame should draw");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Buffer text, one line per row, trailing spaces trimmed
    pub fn content(&self) -> String {
        buffer_text(self.buffer())
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Untrimmed text of one row; empty when out of range
    pub fn row(&self, y: u16) -> String {
        let buffer = self.buffer();
        if y >= buffer.area.height {
            return String::new();
        }
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    pub fn line_contains(&self, y: u16, text: &str) -> bool {
        self.row(y).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        (x < buffer.area.width && y < buffer.area.height).then(|| buffer[(x, y)].symbol())
    }

    /// Column of the first cell on row `y` whose symbol is `symbol`
    pub fn find_in_row(&self, y: u16, symbol: &str) -> Option<u16> {
        let width = self.buffer().area.width;
        (0..width).find(|&x| self.cell_at(x, y) == Some(symbol))
    }

    pub fn fg_at(&self, x: u16, y: u16) -> Color {
        self.buffer()[(x, y)].fg
    }

    pub fn bg_at(&self, x: u16, y: u16) -> Color {
        self.buffer()[(x, y)].bg
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;
    use ratatui::text::Span;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::compact().area(), Rect::new(0, 0, 40, 12));
        assert_eq!(TestTerminal::with_size(7, 3).area(), Rect::new(0, 0, 7, 3));
        assert_eq!(TestTerminal::default().area().width, TEST_WIDTH);
    }

    #[test]
    fn test_text_lookups() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.buffer_contains("World"));
        assert!(term.line_contains(0, "Hello"));
        assert!(!term.line_contains(0, "World"));
        assert_eq!(term.row(0).len(), 20);
        assert_eq!(term.row(9), "");
        assert_eq!(term.cell_at(1, 1), Some("o"));
        assert_eq!(term.cell_at(40, 1), None);
        assert_eq!(term.find_in_row(1, "r"), Some(2));
        assert_eq!(term.content(), "Hello\nWorld\n\n");
    }

    #[test]
    fn test_color_lookups() {
        let mut term = TestTerminal::with_size(5, 1);
        let style = Style::default().fg(Color::Rgb(1, 2, 3)).bg(Color::Rgb(4, 5, 6));
        term.render_widget(Paragraph::new(Span::styled("ab", style)), term.area());

        assert_eq!(term.fg_at(0, 0), Color::Rgb(1, 2, 3));
        assert_eq!(term.bg_at(1, 0), Color::Rgb(4, 5, 6));
        assert_eq!(term.bg_at(4, 0), Color::Reset);
    }

    #[test]
    fn test_draw_with_frame() {
        let mut term = TestTerminal::with_size(10, 2);
        term.draw_with(|frame| frame.render_widget(Paragraph::new("frame"), frame.area()));
        assert!(term.line_contains(0, "frame"));
    }
}
