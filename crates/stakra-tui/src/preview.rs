//! Showcase preview: offscreen text rendering and an interactive viewer.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use stakra_core::prelude::*;

use crate::widgets::Showcase;

/// Poll interval of the interactive viewer
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Render the showcase into an offscreen buffer.
pub fn render_buffer(theme: &ThemeConfig, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Showcase::new(theme).render(area, &mut buf);
    buf
}

/// Render the showcase and return its text, one line per row.
///
/// Trailing spaces are trimmed from each row. Colors are dropped.
pub fn render_to_string(theme: &ThemeConfig, width: u16, height: u16) -> String {
    let buf = render_buffer(theme, width, height);
    debug!(width, height, "rendered offscreen preview");
    buffer_text(&buf)
}

/// Plain text of a buffer, trailing whitespace trimmed per row
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..area.right() {
            row.push_str(buf[(x, y)].symbol());
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

/// Show the showcase full-screen until `q`, `Esc` or `Ctrl+C`.
pub fn run_interactive(theme: &ThemeConfig) -> Result<()> {
    let mut terminal = ratatui::try_init().map_err(|e| Error::terminal(e.to_string()))?;
    info!("interactive preview started");

    let result = loop {
        if let Err(e) = terminal.draw(|frame| frame.render_widget(Showcase::new(theme), frame.area()))
        {
            break Err(Error::terminal(e.to_string()));
        }

        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => break Err(Error::terminal(e.to_string())),
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press && is_quit_key(key) => {
                break Ok(());
            }
            Ok(_) => {}
            Err(e) => break Err(Error::terminal(e.to_string())),
        }
    };

    ratatui::restore();
    info!("interactive preview closed");
    result
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakra_core::build_theme;

    #[test]
    fn test_render_to_string_has_one_line_per_row() {
        let theme = build_theme();
        let text = render_to_string(&theme, 80, 24);
        assert_eq!(text.lines().count(), 24);
        assert!(text.lines().all(|line| line.chars().count() <= 80));
        assert!(text.starts_with("Stakra Design System"));
    }

    #[test]
    fn test_render_to_string_trims_rows() {
        let theme = build_theme();
        let text = render_to_string(&theme, 80, 24);
        assert!(text.lines().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn test_render_to_string_contains_issue_scenario() {
        let theme = build_theme();
        let text = render_to_string(&theme, 80, 24);
        assert!(text.contains("Bug"));
        assert!(text.contains("Ready for QA"));
    }

    #[test]
    fn test_small_preview_shows_notice() {
        let theme = build_theme();
        let text = render_to_string(&theme, 24, 2);
        insta::assert_snapshot!(text.trim_end(), @"Preview needs 60x16");
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
