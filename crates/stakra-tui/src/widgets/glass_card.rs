//! Translucent content card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use stakra_core::{ThemeConfig, TypeStyleName, DEFAULT_DECORATION_RADIUS};

use super::surface::Surface;
use crate::theme::styles;

/// Glass panel with an optional title and body text.
pub struct GlassCard<'a> {
    theme: &'a ThemeConfig,
    title: Option<&'a str>,
    body: Vec<Line<'a>>,
    radius: f32,
}

impl<'a> GlassCard<'a> {
    pub fn new(theme: &'a ThemeConfig) -> Self {
        Self {
            theme,
            title: None,
            body: Vec::new(),
            radius: DEFAULT_DECORATION_RADIUS,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Body text in the body-medium style, one entry per line
    pub fn body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<std::borrow::Cow<'a, str>>,
    {
        let style = styles::text_style(self.theme, TypeStyleName::BodyMedium);
        self.body = lines
            .into_iter()
            .map(|text| Line::from(Span::styled(text, style)))
            .collect();
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    fn surface(&self) -> Surface<'a> {
        let surface = Surface::new(self.theme, stakra_core::glass_decoration(self.radius));
        match self.title {
            Some(title) => surface.title(Span::styled(
                format!(" {title} "),
                styles::text_style(self.theme, TypeStyleName::TitleMedium),
            )),
            None => surface,
        }
    }

    /// Area left for content inside the card
    pub fn inner(&self, area: Rect) -> Rect {
        self.surface().inner(area)
    }
}

impl Widget for GlassCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let surface = self.surface();
        let inner = surface.inner(area);
        surface.render(area, buf);

        if inner.is_empty() || self.body.is_empty() {
            return;
        }
        Paragraph::new(self.body)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
