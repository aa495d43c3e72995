//! Inline pills: workflow status badges and issue label chips.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use stakra_core::{classify_label, classify_status, ClassificationResult, ColorToken, ThemeConfig};

use super::text::{display_width, truncate_with_ellipsis};
use crate::theme::styles;

/// Horizontal padding on each side of a pill's text
const PILL_PADDING: u16 = 1;

/// Workflow status shown as colored text on a faint tint.
///
/// Unknown statuses are shown verbatim in the muted color.
pub struct StatusBadge<'a> {
    theme: &'a ThemeConfig,
    status: ClassificationResult<'a>,
}

impl<'a> StatusBadge<'a> {
    pub fn new(theme: &'a ThemeConfig, status: &'a str) -> Self {
        Self {
            theme,
            status: classify_status(status),
        }
    }

    pub fn color(&self) -> ColorToken {
        self.status.color
    }

    pub fn label(&self) -> &str {
        &self.status.label
    }

    /// Cells needed to show the badge without truncation
    pub fn width(&self) -> u16 {
        pill_width(&self.status.label)
    }
}

impl Widget for StatusBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = styles::badge_style(self.theme, self.status.color);
        render_pill(buf, area, &self.status.label, style);
    }
}

/// Issue label chip, colored by label.
pub struct LabelChip<'a> {
    theme: &'a ThemeConfig,
    label: &'a str,
    selected: bool,
}

impl<'a> LabelChip<'a> {
    pub fn new(theme: &'a ThemeConfig, label: &'a str) -> Self {
        Self {
            theme,
            label,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn color(&self) -> ColorToken {
        classify_label(self.label)
    }

    pub fn width(&self) -> u16 {
        pill_width(self.label)
    }
}

impl Widget for LabelChip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = styles::chip_style(self.theme, self.color(), self.selected);
        render_pill(buf, area, self.label, style);
    }
}

fn pill_width(text: &str) -> u16 {
    display_width(text).saturating_add(PILL_PADDING * 2)
}

/// Draw ` text ` on the first row of `area`, truncating to fit.
fn render_pill(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    if area.is_empty() {
        return;
    }

    let width = pill_width(text).min(area.width);
    let inner = usize::from(width.saturating_sub(PILL_PADDING * 2));
    let content = format!(" {} ", truncate_with_ellipsis(text, inner));

    buf.set_style(Rect::new(area.x, area.y, width, 1), style);
    buf.set_stringn(area.x, area.y, content, usize::from(width), style);
}
