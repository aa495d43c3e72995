//! Decorated surfaces: fill, border and shadow from a [`DecorationSpec`].
//!
//! Also provides the cell-level helpers the surface is built from, so other
//! widgets can paint gradients and shadows directly.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use stakra_core::{Background, DecorationSpec, GradientToken, Offset, ThemeConfig};

use crate::theme::{palette, styles};

/// Logical pixels per terminal cell, horizontally
const CELL_WIDTH_PX: f32 = 8.0;
/// Logical pixels per terminal cell, vertically
const CELL_HEIGHT_PX: f32 = 16.0;

/// A decorated panel. Render it, then draw content into [`Surface::inner`].
pub struct Surface<'a> {
    theme: &'a ThemeConfig,
    spec: DecorationSpec,
    title: Option<Line<'a>>,
}

impl<'a> Surface<'a> {
    pub fn new(theme: &'a ThemeConfig, spec: DecorationSpec) -> Self {
        Self {
            theme,
            spec,
            title: None,
        }
    }

    pub fn glass(theme: &'a ThemeConfig) -> Self {
        Self::new(theme, DecorationSpec::glass())
    }

    pub fn gradient_border(theme: &'a ThemeConfig) -> Self {
        Self::new(theme, DecorationSpec::gradient_border())
    }

    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Area left for content once shadow and border are taken out
    pub fn inner(&self, area: Rect) -> Rect {
        styles::decoration_block(self.theme, &self.spec).inner(self.body(area))
    }

    /// The panel itself, excluding the cells reserved for the shadow
    fn body(&self, area: Rect) -> Rect {
        let (dx, dy) = self.shadow_cells();
        Rect {
            width: area.width.saturating_sub(dx),
            height: area.height.saturating_sub(dy),
            ..area
        }
    }

    fn shadow_cells(&self) -> (u16, u16) {
        self.spec
            .shadow
            .map(|shadow| offset_cells(shadow.offset))
            .unwrap_or((0, 0))
    }
}

impl Widget for Surface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = self.body(area);
        if body.is_empty() {
            return;
        }

        if let Some(shadow) = self.spec.shadow {
            let (dx, dy) = offset_cells(shadow.offset);
            render_shadow(buf, body, dx, dy, styles::shadow_style(self.theme, shadow.paint));
        }

        match self.spec.background {
            Background::Solid(paint) => {
                let color = palette::paint_color(
                    self.theme,
                    paint,
                    self.theme.colors().scaffold_background,
                );
                fill_area(buf, body, Style::default().bg(color));
            }
            Background::Gradient(token) => fill_gradient(buf, body, self.theme, token),
        }

        let block = styles::decoration_block(self.theme, &self.spec);
        let block = match self.title {
            Some(title) => block.title(title),
            None => block,
        };
        block.render(body, buf);
    }
}

/// Convert a logical shadow offset to whole cells, rounding away from zero.
///
/// Negative offsets have no room to draw into and map to zero.
pub fn offset_cells(offset: Offset) -> (u16, u16) {
    let cells = |px: f32, per_cell: f32| -> u16 {
        if px <= 0.0 {
            0
        } else {
            (px / per_cell).ceil() as u16
        }
    };
    (
        cells(offset.dx, CELL_WIDTH_PX),
        cells(offset.dy, CELL_HEIGHT_PX),
    )
}

/// Apply `style` to every cell in `area`, keeping the cell contents.
pub fn fill_area(buf: &mut Buffer, area: Rect, style: Style) {
    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
            }
        }
    }
}

/// Paint a gradient across `area` as cell backgrounds.
pub fn fill_gradient(buf: &mut Buffer, area: Rect, theme: &ThemeConfig, token: GradientToken) {
    for row in 0..area.height {
        for col in 0..area.width {
            let color = palette::gradient_color(theme, token, col, row, area.width, area.height);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_bg(color);
            }
        }
    }
}

/// Render a shadow `dx` cells right and `dy` cells below `rect`.
///
/// Only the strips that stick out from under the panel are drawn.
pub fn render_shadow(buf: &mut Buffer, rect: Rect, dx: u16, dy: u16, style: Style) {
    if dx == 0 && dy == 0 {
        return;
    }

    let right = rect.x.saturating_add(rect.width);
    let bottom = rect.y.saturating_add(rect.height);

    // Right strip, shifted down by dy
    for x in right..right.saturating_add(dx) {
        for y in rect.y.saturating_add(dy)..bottom.saturating_add(dy) {
            set_shadow_cell(buf, x, y, style);
        }
    }

    // Bottom strip, shifted right by dx
    for y in bottom..bottom.saturating_add(dy) {
        for x in rect.x.saturating_add(dx)..right.saturating_add(dx) {
            set_shadow_cell(buf, x, y, style);
        }
    }
}

fn set_shadow_cell(buf: &mut Buffer, x: u16, y: u16, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(' ');
        cell.set_style(style);
    }
}
