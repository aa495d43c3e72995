//! Primary call-to-action button on the primary gradient.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use stakra_core::{ButtonVariant, DecorationSpec, ThemeConfig, DEFAULT_DECORATION_RADIUS};

use super::surface::{fill_gradient, offset_cells, render_shadow};
use super::text::{display_width, truncate_with_ellipsis};
use crate::theme::{palette, styles};

/// Gradient-filled button with a centered label and an optional leading icon.
///
/// Without a label it renders as an icon button.
pub struct GradientButton<'a> {
    theme: &'a ThemeConfig,
    label: Option<&'a str>,
    icon: Option<&'a str>,
    radius: f32,
}

impl<'a> GradientButton<'a> {
    pub fn new(theme: &'a ThemeConfig, label: &'a str) -> Self {
        Self {
            theme,
            label: Some(label),
            icon: None,
            radius: theme.buttons().filled.radius,
        }
    }

    /// Square button showing only an icon
    pub fn icon_only(theme: &'a ThemeConfig, icon: &'a str) -> Self {
        Self {
            theme,
            label: None,
            icon: Some(icon),
            radius: DEFAULT_DECORATION_RADIUS,
        }
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn decoration(&self) -> DecorationSpec {
        stakra_core::gradient_border_decoration(self.radius)
    }

    fn content(&self) -> String {
        match (self.icon, self.label) {
            (Some(icon), Some(label)) => format!("{icon} {label}"),
            (Some(icon), None) => icon.to_string(),
            (None, Some(label)) => label.to_string(),
            (None, None) => String::new(),
        }
    }
}

impl Widget for GradientButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spec = self.decoration();
        let (dx, dy) = spec.shadow.map(|s| offset_cells(s.offset)).unwrap_or((0, 0));

        // Keep the glow only when there is room for a face under it
        let (dx, dy) = if area.height > dy + 1 { (dx, dy) } else { (0, 0) };
        let face = Rect {
            width: area.width.saturating_sub(dx),
            height: area.height.saturating_sub(dy),
            ..area
        };
        if face.is_empty() {
            return;
        }

        if let Some(shadow) = spec.shadow {
            render_shadow(buf, face, dx, dy, styles::shadow_style(self.theme, shadow.paint));
        }
        if let stakra_core::Background::Gradient(token) = spec.background {
            fill_gradient(buf, face, self.theme, token);
        }

        let filled = &self.theme.buttons().filled;
        let fg = palette::paint_color(self.theme, filled.foreground, self.theme.colors().primary);
        let text_style = styles::button_style(self.theme, ButtonVariant::Filled).fg(fg);

        let content = truncate_with_ellipsis(&self.content(), usize::from(face.width));
        let width = display_width(&content);
        let x = face.x + face.width.saturating_sub(width) / 2;
        let y = face.y + face.height.saturating_sub(1) / 2;

        // Only fg and modifiers, so the gradient stays visible behind the text
        let span_style = Style {
            bg: None,
            ..text_style
        };
        let line = Line::from(Span::styled(content, span_style));
        buf.set_line(x, y, &line, width);
    }
}
