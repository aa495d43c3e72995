//! Color conversion from design tokens to terminal colors.
//!
//! Terminals have no alpha channel. Translucent paints are flattened onto a
//! base token before conversion; the alpha of the result is dropped.

use ratatui::style::Color;
use stakra_core::{ColorToken, GradientToken, Paint, Rgba, ThemeConfig};

/// Convert a concrete color to a 24-bit terminal color, ignoring alpha.
pub fn to_color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}

pub fn token_color(theme: &ThemeConfig, token: ColorToken) -> Color {
    to_color(theme.color(token))
}

/// Resolve `paint` and flatten it onto `base`.
pub fn paint_color(theme: &ThemeConfig, paint: Paint, base: ColorToken) -> Color {
    to_color(theme.resolve_over(paint, base))
}

/// The scaffold background everything else is painted on
pub fn background(theme: &ThemeConfig) -> Color {
    token_color(theme, theme.colors().scaffold_background)
}

/// Sample a gradient at cell `(col, row)` of a `width` x `height` area.
///
/// Cells are mapped to normalized `-1.0..=1.0` coordinates through their
/// centers, so the first and last column land on the gradient's ends.
pub fn gradient_color(
    theme: &ThemeConfig,
    token: GradientToken,
    col: u16,
    row: u16,
    width: u16,
    height: u16,
) -> Color {
    let x = normalize(col, width);
    let y = normalize(row, height);
    to_color(theme.palette().sample_gradient(token, x, y))
}

fn normalize(index: u16, extent: u16) -> f32 {
    if extent <= 1 {
        return 0.0;
    }
    -1.0 + 2.0 * f32::from(index) / f32::from(extent - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakra_core::build_theme;

    #[test]
    fn test_to_color_drops_alpha() {
        assert_eq!(to_color(Rgba::from_u32(0x2563EB)), Color::Rgb(0x25, 0x63, 0xEB));
        assert_eq!(
            to_color(Rgba::new(1, 2, 3, 0)),
            Color::Rgb(1, 2, 3),
            "alpha is ignored, not applied"
        );
    }

    #[test]
    fn test_token_color_matches_palette() {
        let theme = build_theme();
        assert_eq!(token_color(&theme, ColorToken::Amber), Color::Rgb(0xF5, 0x9E, 0x0B));
        assert_eq!(background(&theme), Color::Rgb(0x0A, 0x0C, 0x10));
    }

    #[test]
    fn test_transparent_paint_shows_base() {
        let theme = build_theme();
        let paint = Paint::solid(ColorToken::Transparent);
        assert_eq!(
            paint_color(&theme, paint, ColorToken::Surface),
            token_color(&theme, ColorToken::Surface)
        );
    }

    #[test]
    fn test_translucent_paint_is_between_base_and_token() {
        let theme = build_theme();
        let paint = Paint::solid(ColorToken::White).with_opacity(0.5);
        let Color::Rgb(r, g, b) = paint_color(&theme, paint, ColorToken::Background) else {
            panic!("expected an rgb color");
        };
        for channel in [r, g, b] {
            assert!(channel > 0x10 && channel < 0xFF, "{channel}");
        }
    }

    #[test]
    fn test_gradient_ends_match_tokens() {
        let theme = build_theme();
        assert_eq!(
            gradient_color(&theme, GradientToken::Primary, 0, 0, 10, 3),
            token_color(&theme, ColorToken::Primary)
        );
        assert_eq!(
            gradient_color(&theme, GradientToken::Primary, 9, 2, 10, 3),
            token_color(&theme, ColorToken::PrimaryLight)
        );
    }

    #[test]
    fn test_normalize_single_cell_is_center() {
        assert_eq!(normalize(0, 1), 0.0);
        assert_eq!(normalize(0, 0), 0.0);
        assert_eq!(normalize(0, 5), -1.0);
        assert_eq!(normalize(4, 5), 1.0);
    }
}
