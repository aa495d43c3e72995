//! Metric card: a label, a headline value and a signed change.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use stakra_core::{classify_change, ColorToken, ThemeConfig, TypeStyleName};

use super::surface::Surface;
use super::text::{display_width, truncate_with_ellipsis};
use crate::theme::styles;

pub struct KpiCard<'a> {
    theme: &'a ThemeConfig,
    title: &'a str,
    value: &'a str,
    change: Option<&'a str>,
    icon: Option<&'a str>,
}

impl<'a> KpiCard<'a> {
    pub fn new(theme: &'a ThemeConfig, title: &'a str, value: &'a str) -> Self {
        Self {
            theme,
            title,
            value,
            change: None,
            icon: None,
        }
    }

    /// Change since the previous period, e.g. `"+12%"`
    pub fn change(mut self, change: &'a str) -> Self {
        self.change = Some(change);
        self
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Color of the change figure, if there is one
    pub fn change_color(&self) -> Option<ColorToken> {
        self.change.map(classify_change)
    }
}

impl Widget for KpiCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = Surface::glass(self.theme);
        let inner = surface.inner(area);
        surface.render(area, buf);
        if inner.is_empty() {
            return;
        }

        // Header row: icon and title on the left, change on the right
        let mut reserved = 0;
        if let Some(change) = self.change {
            let change_width = display_width(change);
            if change_width < inner.width {
                let x = inner.x + inner.width - change_width;
                buf.set_stringn(
                    x,
                    inner.y,
                    change,
                    usize::from(change_width),
                    styles::change_style(self.theme, change),
                );
                reserved = change_width + 1;
            }
        }

        let title_room = inner.width.saturating_sub(reserved);
        let mut header = Vec::new();
        if let Some(icon) = self.icon {
            header.push(Span::styled(
                format!("{icon} "),
                styles::text_style(self.theme, TypeStyleName::TitleSmall),
            ));
        }
        header.push(Span::styled(
            self.title,
            styles::text_style(self.theme, TypeStyleName::LabelMedium),
        ));
        buf.set_line(inner.x, inner.y, &Line::from(header), title_room);

        if inner.height < 2 {
            return;
        }
        let value = truncate_with_ellipsis(self.value, usize::from(inner.width));
        buf.set_stringn(
            inner.x,
            inner.y + 1,
            value,
            usize::from(inner.width),
            styles::text_style(self.theme, TypeStyleName::HeadlineMedium),
        );
    }
}
