//! One-screen tour of every widget, rendered with sample data.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use stakra_core::{ColorToken, GradientToken, ThemeConfig, TypeStyleName};

use super::{surface::fill_area, GlassCard, GradientButton, IssueCard, KpiCard};
use crate::theme::styles;

/// Smallest area the showcase lays out in; anything smaller shows a notice.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 16;

const KPIS: [(&str, &str, &str); 3] = [
    ("Open issues", "128", "+12%"),
    ("Cycle time", "3.2d", "-3%"),
    ("Shipped", "17", "+4"),
];

struct SampleIssue {
    number: u64,
    title: &'static str,
    labels: &'static [&'static str],
    status: &'static str,
}

const ISSUES: [SampleIssue; 2] = [
    SampleIssue {
        number: 42,
        title: "Login fails on Safari",
        labels: &["Bug", "frontend"],
        status: "ready_for_qa",
    },
    SampleIssue {
        number: 57,
        title: "Checkout API pagination",
        labels: &["backend", "feature"],
        status: "in_progress",
    },
];

pub struct Showcase<'a> {
    theme: &'a ThemeConfig,
}

impl<'a> Showcase<'a> {
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self { theme }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = styles::text_style(self.theme, TypeStyleName::HeadlineSmall);
        let subtitle = styles::text_style(self.theme, TypeStyleName::BodySmall);
        let line = Line::from(vec![
            Span::styled("Stakra Design System", title),
            Span::styled("  dark theme preview", subtitle),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn render_kpis(&self, area: Rect, buf: &mut Buffer) {
        let columns: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
        for ((title, value, change), column) in KPIS.into_iter().zip(columns) {
            KpiCard::new(self.theme, title, value)
                .change(change)
                .render(column, buf);
        }
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let [primary, _, icon, _] = Layout::horizontal([
            Constraint::Length(16),
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(area);
        GradientButton::new(self.theme, "New issue")
            .icon("+")
            .render(primary, buf);
        GradientButton::icon_only(self.theme, "*").render(icon, buf);
    }

    fn render_tokens(&self, area: Rect, buf: &mut Buffer) {
        let palette = self.theme.palette();
        let primary = palette.gradient(GradientToken::Primary);
        let lines = [
            format!(
                "primary gradient  {} -> {}",
                palette.color(primary.from),
                palette.color(primary.to)
            ),
            format!(
                "background {}  surface {}  border {}",
                palette.color(ColorToken::Background),
                palette.color(ColorToken::Surface),
                palette.color(ColorToken::Border)
            ),
        ];
        GlassCard::new(self.theme)
            .title("Tokens")
            .body(lines)
            .render(area, buf);
    }
}

impl Widget for Showcase<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        fill_area(buf, area, styles::scaffold_style(self.theme));

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let notice = format!("Preview needs {MIN_WIDTH}x{MIN_HEIGHT}");
            Paragraph::new(notice)
                .style(styles::text_style(self.theme, TypeStyleName::BodyMedium))
                .render(area, buf);
            return;
        }

        let [header, kpis, first, second, buttons, rest] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_header(header, buf);
        self.render_kpis(kpis, buf);
        for (issue, row) in ISSUES.iter().zip([first, second]) {
            IssueCard::new(self.theme, issue.title, issue.status)
                .number(issue.number)
                .labels(issue.labels)
                .render(row, buf);
        }
        self.render_buttons(buttons, buf);
        if rest.height >= 3 {
            self.render_tokens(rest, buf);
        }
    }
}
