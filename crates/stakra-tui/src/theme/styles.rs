//! Semantic style builders for the Stakra theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use stakra_core::{
    classify_change, BorderSide, ButtonVariant, ColorToken, DecorationSpec, InputState, Paint,
    ThemeConfig, TypeStyle, TypeStyleName,
};

use super::palette::{paint_color, to_color, token_color};

/// Opacity of a badge's tinted background
const BADGE_TINT_OPACITY: f32 = 0.15;

// --- Text styles ---

/// Terminal style for a named text style: color, and bold for semibold and up.
pub fn text_style(theme: &ThemeConfig, name: TypeStyleName) -> Style {
    type_style(theme, theme.text(name))
}

pub fn type_style(theme: &ThemeConfig, style: &TypeStyle) -> Style {
    let base = Style::default().fg(token_color(theme, style.color));
    if style.weight.is_bold() {
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

/// Signed change such as `"+12%"`, green for gains and red otherwise
pub fn change_style(theme: &ThemeConfig, change: &str) -> Style {
    Style::default()
        .fg(token_color(theme, classify_change(change)))
        .add_modifier(Modifier::BOLD)
}

// --- Component styles ---

pub fn button_style(theme: &ThemeConfig, variant: ButtonVariant) -> Style {
    let surface = theme.colors().surface;
    let button = theme.buttons().style(variant);
    let style = type_style(theme, &button.text_style)
        .fg(paint_color(theme, button.foreground, surface));
    match button.background {
        Some(paint) => style.bg(paint_color(theme, paint, surface)),
        None => style,
    }
}

/// Label chip in `accent`, on the chip background for its selection state.
pub fn chip_style(theme: &ThemeConfig, accent: ColorToken, selected: bool) -> Style {
    let chip = theme.chip();
    type_style(theme, &chip.label_style)
        .fg(token_color(theme, accent))
        .bg(paint_color(
            theme,
            chip.background_for(selected),
            theme.colors().surface,
        ))
}

/// Status badge: bold text in `accent` over a faint tint of the same color.
pub fn badge_style(theme: &ThemeConfig, accent: ColorToken) -> Style {
    let tint = Paint::solid(accent).with_opacity(BADGE_TINT_OPACITY);
    Style::default()
        .fg(token_color(theme, accent))
        .bg(paint_color(theme, tint, theme.colors().surface))
        .add_modifier(Modifier::BOLD)
}

pub fn divider_style(theme: &ThemeConfig) -> Style {
    Style::default().fg(paint_color(
        theme,
        theme.divider().paint,
        theme.colors().scaffold_background,
    ))
}

pub fn border_style(theme: &ThemeConfig, side: &BorderSide, base: ColorToken) -> Style {
    Style::default().fg(paint_color(theme, side.paint, base))
}

/// Hairlines draw as rounded corners; anything heavier draws thick.
pub fn border_type(width: f32, radius: f32) -> BorderType {
    if width > 1.0 {
        BorderType::Thick
    } else if radius > 0.0 {
        BorderType::Rounded
    } else {
        BorderType::Plain
    }
}

// --- Block builders ---

/// Bordered block for a decoration. The fill is left to the caller since
/// gradients vary per cell.
pub fn decoration_block(theme: &ThemeConfig, spec: &DecorationSpec) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(spec.border_width, spec.radius))
        .border_style(Style::default().fg(paint_color(
            theme,
            spec.border,
            theme.colors().scaffold_background,
        )))
}

pub fn glass_block(theme: &ThemeConfig) -> Block<'static> {
    decoration_block(theme, &DecorationSpec::glass())
}

/// Solid card: themed fill with a hairline border.
pub fn card_block(theme: &ThemeConfig) -> Block<'static> {
    let card = theme.card();
    let background = theme.colors().scaffold_background;
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(card.border.width, card.radius))
        .border_style(border_style(theme, &card.border, background))
        .style(Style::default().bg(paint_color(theme, card.fill, background)))
}

/// Text field frame for an interaction state
pub fn input_block(theme: &ThemeConfig, state: InputState) -> Block<'static> {
    let input = theme.input();
    let background = theme.colors().scaffold_background;
    let side = input.border_for(state);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(side.width, input.radius))
        .border_style(border_style(theme, side, background));
    if input.filled {
        block.style(Style::default().bg(paint_color(theme, input.fill, background)))
    } else {
        block
    }
}

/// Page background
pub fn scaffold_style(theme: &ThemeConfig) -> Style {
    let colors = theme.colors();
    Style::default()
        .bg(token_color(theme, colors.scaffold_background))
        .fg(token_color(theme, colors.on_surface))
}

/// Shadow of a decoration, flattened onto the page background
pub fn shadow_style(theme: &ThemeConfig, paint: Paint) -> Style {
    let color = to_color(theme.resolve_opaque(paint));
    Style::default().fg(color).bg(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use stakra_core::build_theme;

    #[test]
    fn test_text_style_bold_follows_weight() {
        let theme = build_theme();
        let title = text_style(&theme, TypeStyleName::TitleLarge);
        assert!(title.add_modifier.contains(Modifier::BOLD));
        assert_eq!(title.fg, Some(token_color(&theme, ColorToken::TextPrimary)));

        let body = text_style(&theme, TypeStyleName::BodyMedium);
        assert!(!body.add_modifier.contains(Modifier::BOLD));
        assert_eq!(body.fg, Some(token_color(&theme, ColorToken::TextSecondary)));

        let label = text_style(&theme, TypeStyleName::LabelMedium);
        assert!(!label.add_modifier.contains(Modifier::BOLD), "w500 is not bold");
    }

    #[test]
    fn test_change_style_colors() {
        let theme = build_theme();
        assert_eq!(
            change_style(&theme, "+12%").fg,
            Some(token_color(&theme, ColorToken::Success))
        );
        assert_eq!(
            change_style(&theme, "-3%").fg,
            Some(token_color(&theme, ColorToken::Danger))
        );
    }

    #[test]
    fn test_filled_button_is_white_on_primary() {
        let theme = build_theme();
        let style = button_style(&theme, ButtonVariant::Filled);
        assert_eq!(style.fg, Some(Color::Rgb(0xFF, 0xFF, 0xFF)));
        assert_eq!(style.bg, Some(token_color(&theme, ColorToken::Primary)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_text_button_has_no_background() {
        let theme = build_theme();
        let style = button_style(&theme, ButtonVariant::Text);
        assert_eq!(style.fg, Some(token_color(&theme, ColorToken::Primary)));
        assert_eq!(style.bg, None);
    }

    #[test]
    fn test_selected_chip_is_tinted() {
        let theme = build_theme();
        let idle = chip_style(&theme, ColorToken::Red, false);
        let selected = chip_style(&theme, ColorToken::Red, true);
        assert_eq!(idle.fg, Some(token_color(&theme, ColorToken::Red)));
        assert_eq!(idle.bg, Some(token_color(&theme, ColorToken::SurfaceAlt)));
        assert_ne!(selected.bg, idle.bg);
    }

    #[test]
    fn test_badge_style_is_bold_accent() {
        let theme = build_theme();
        let style = badge_style(&theme, ColorToken::Amber);
        assert_eq!(style.fg, Some(token_color(&theme, ColorToken::Amber)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_ne!(style.bg, style.fg);
    }

    #[test]
    fn test_border_type_by_width() {
        assert_eq!(border_type(1.0, 14.0), BorderType::Rounded);
        assert_eq!(border_type(1.5, 14.0), BorderType::Thick);
        assert_eq!(border_type(1.0, 0.0), BorderType::Plain);
    }

    #[test]
    fn test_shadow_style_is_opaque_fill() {
        let theme = build_theme();
        let shadow = Paint::solid(ColorToken::Primary).with_opacity(0.3);
        let style = shadow_style(&theme, shadow);
        assert_eq!(style.fg, style.bg);
        assert_ne!(style.bg, Some(token_color(&theme, ColorToken::Background)));
    }

    #[test]
    fn test_blocks_build() {
        let theme = build_theme();
        let _ = glass_block(&theme);
        let _ = card_block(&theme);
        for state in [InputState::Enabled, InputState::Focused, InputState::Invalid] {
            let _ = input_block(&theme, state);
        }
    }
}
