//! Issue list item: title, label chips and a workflow status badge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use stakra_core::{ThemeConfig, TypeStyleName};

use super::badge::{LabelChip, StatusBadge};
use super::surface::Surface;
use super::text::truncate_with_ellipsis;
use crate::theme::styles;

/// Gap between adjacent chips
const CHIP_GAP: u16 = 1;

pub struct IssueCard<'a> {
    theme: &'a ThemeConfig,
    title: &'a str,
    number: Option<u64>,
    labels: &'a [&'a str],
    status: &'a str,
}

impl<'a> IssueCard<'a> {
    pub fn new(theme: &'a ThemeConfig, title: &'a str, status: &'a str) -> Self {
        Self {
            theme,
            title,
            number: None,
            labels: &[],
            status,
        }
    }

    pub fn number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    pub fn labels(mut self, labels: &'a [&'a str]) -> Self {
        self.labels = labels;
        self
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        let mut used = 0;
        if let Some(number) = self.number {
            let number = format!("#{number} ");
            used = number.len();
            spans.push(Span::styled(
                number,
                styles::text_style(self.theme, TypeStyleName::LabelSmall),
            ));
        }
        let room = usize::from(area.width).saturating_sub(used);
        spans.push(Span::styled(
            truncate_with_ellipsis(self.title, room),
            styles::text_style(self.theme, TypeStyleName::TitleMedium),
        ));
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }

    /// Chips from the left, badge on the right. Chips that would run into
    /// the badge are dropped.
    fn render_meta(&self, area: Rect, buf: &mut Buffer) {
        let badge = StatusBadge::new(self.theme, self.status);
        let badge_width = badge.width().min(area.width);
        let badge_x = area.x + area.width - badge_width;
        badge.render(Rect::new(badge_x, area.y, badge_width, 1), buf);

        let mut x = area.x;
        for &label in self.labels {
            let chip = LabelChip::new(self.theme, label);
            let width = chip.width();
            if x + width + CHIP_GAP > badge_x {
                break;
            }
            chip.render(Rect::new(x, area.y, width, 1), buf);
            x += width + CHIP_GAP;
        }
    }
}

impl Widget for IssueCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = Surface::glass(self.theme);
        let inner = surface.inner(area);
        surface.render(area, buf);
        if inner.is_empty() {
            return;
        }

        self.render_title(Rect { height: 1, ..inner }, buf);
        if inner.height >= 2 {
            let meta = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            self.render_meta(meta, buf);
        }
    }
}
