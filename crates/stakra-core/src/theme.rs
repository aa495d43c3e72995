//! Theme composition.
//!
//! [`ThemeConfig::compose`] turns a [`Palette`] and a [`TypeScale`] into the
//! per-component style defaults every widget reads. The result is immutable:
//! there are no setters, and a different theme means composing a new value.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::{Paint, Rgba};
use crate::error::Result;
use crate::palette::{ColorToken, Palette};
use crate::typography::{TypeScale, TypeStyle, TypeStyleName};

pub const BUTTON_RADIUS: f32 = 14.0;
pub const BUTTON_PADDING: EdgeInsets = EdgeInsets::symmetric(20.0, 16.0);
pub const INPUT_RADIUS: f32 = 14.0;
pub const INPUT_FOCUSED_WIDTH: f32 = 1.5;
pub const CARD_RADIUS: f32 = 18.0;
pub const CHIP_RADIUS: f32 = 8.0;
pub const CHIP_SELECTED_OPACITY: f32 = 0.2;
pub const DIVIDER_THICKNESS: f32 = 1.0;

/// Horizontal and vertical padding, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeInsets {
    pub horizontal: f32,
    pub vertical: f32,
}

impl EdgeInsets {
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// A stroke: color and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderSide {
    pub paint: Paint,
    pub width: f32,
}

impl BorderSide {
    pub const fn new(token: ColorToken, width: f32) -> Self {
        Self {
            paint: Paint::solid(token),
            width,
        }
    }

    /// One-unit stroke
    pub const fn hairline(token: ColorToken) -> Self {
        Self::new(token, 1.0)
    }
}

/// App-wide colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Page background behind every surface
    pub scaffold_background: ColorToken,
    pub surface: ColorToken,
    pub primary: ColorToken,
    pub error: ColorToken,
    /// Content drawn on top of `primary`
    pub on_primary: ColorToken,
    /// Content drawn on top of `surface`
    pub on_surface: ColorToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonVariant {
    Filled,
    Outlined,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Paint>,
    pub foreground: Paint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderSide>,
    pub radius: f32,
    pub padding: EdgeInsets,
    pub text_style: TypeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTheme {
    pub filled: ButtonStyle,
    pub outlined: ButtonStyle,
    pub text: ButtonStyle,
}

impl ButtonTheme {
    pub fn style(&self, variant: ButtonVariant) -> &ButtonStyle {
        match variant {
            ButtonVariant::Filled => &self.filled,
            ButtonVariant::Outlined => &self.outlined,
            ButtonVariant::Text => &self.text,
        }
    }
}

/// Interaction state of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputState {
    Enabled,
    Focused,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTheme {
    pub filled: bool,
    pub fill: Paint,
    pub radius: f32,
    /// Border when no more specific state applies
    pub border: BorderSide,
    pub enabled_border: BorderSide,
    pub focused_border: BorderSide,
    pub error_border: BorderSide,
    pub label_style: TypeStyle,
    pub hint_style: TypeStyle,
}

impl InputTheme {
    pub fn border_for(&self, state: InputState) -> &BorderSide {
        match state {
            InputState::Enabled => &self.enabled_border,
            InputState::Focused => &self.focused_border,
            InputState::Invalid => &self.error_border,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTheme {
    pub fill: Paint,
    pub radius: f32,
    pub elevation: f32,
    pub border: BorderSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipTheme {
    pub background: Paint,
    pub selected: Paint,
    pub radius: f32,
    pub border: BorderSide,
    pub label_style: TypeStyle,
}

impl ChipTheme {
    pub fn background_for(&self, selected: bool) -> Paint {
        if selected {
            self.selected
        } else {
            self.background
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerTheme {
    pub paint: Paint,
    pub thickness: f32,
}

/// The composed theme.
///
/// Owned by the application root and shared read-only, typically as an
/// `Arc<ThemeConfig>`. All fields are private; read them through the
/// accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    palette: Arc<Palette>,
    text_theme: Arc<TypeScale>,
    colors: ThemeColors,
    buttons: ButtonTheme,
    input: InputTheme,
    card: CardTheme,
    chip: ChipTheme,
    divider: DividerTheme,
}

impl ThemeConfig {
    /// Compose component defaults from a palette and a type scale.
    pub fn compose(palette: Arc<Palette>, text_theme: Arc<TypeScale>) -> Self {
        let label_large = *text_theme.get(TypeStyleName::LabelLarge);
        let label_medium = *text_theme.get(TypeStyleName::LabelMedium);
        let body_medium = *text_theme.get(TypeStyleName::BodyMedium);

        let colors = ThemeColors {
            scaffold_background: ColorToken::Background,
            surface: ColorToken::Surface,
            primary: ColorToken::Primary,
            error: ColorToken::Danger,
            on_primary: ColorToken::White,
            on_surface: ColorToken::TextPrimary,
        };

        let buttons = ButtonTheme {
            filled: ButtonStyle {
                background: Some(Paint::solid(ColorToken::Primary)),
                foreground: Paint::solid(ColorToken::White),
                border: None,
                radius: BUTTON_RADIUS,
                padding: BUTTON_PADDING,
                text_style: label_large,
            },
            outlined: ButtonStyle {
                background: None,
                foreground: Paint::solid(ColorToken::TextPrimary),
                border: Some(BorderSide::hairline(ColorToken::Border)),
                radius: BUTTON_RADIUS,
                padding: BUTTON_PADDING,
                text_style: label_large,
            },
            text: ButtonStyle {
                background: None,
                foreground: Paint::solid(ColorToken::Primary),
                border: None,
                radius: BUTTON_RADIUS,
                padding: BUTTON_PADDING,
                text_style: label_large,
            },
        };

        let input = InputTheme {
            filled: true,
            fill: Paint::solid(ColorToken::SurfaceAlt),
            radius: INPUT_RADIUS,
            border: BorderSide::hairline(ColorToken::Border),
            enabled_border: BorderSide::hairline(ColorToken::Border),
            focused_border: BorderSide::new(ColorToken::Primary, INPUT_FOCUSED_WIDTH),
            error_border: BorderSide::hairline(ColorToken::Danger),
            label_style: body_medium,
            hint_style: body_medium.with_color(ColorToken::TextMuted),
        };

        let card = CardTheme {
            fill: Paint::solid(ColorToken::Surface),
            radius: CARD_RADIUS,
            elevation: 0.0,
            border: BorderSide::hairline(ColorToken::Border),
        };

        let chip = ChipTheme {
            background: Paint::solid(ColorToken::SurfaceAlt),
            selected: Paint::solid(ColorToken::Primary).with_opacity(CHIP_SELECTED_OPACITY),
            radius: CHIP_RADIUS,
            border: BorderSide::hairline(ColorToken::Border),
            label_style: label_medium,
        };

        let divider = DividerTheme {
            paint: Paint::solid(ColorToken::Border),
            thickness: DIVIDER_THICKNESS,
        };

        tracing::debug!(
            colors = ColorToken::COUNT,
            text_styles = TypeStyleName::COUNT,
            "composed theme"
        );

        Self {
            palette,
            text_theme,
            colors,
            buttons,
            input,
            card,
            chip,
            divider,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn text_theme(&self) -> &TypeScale {
        &self.text_theme
    }

    pub fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    pub fn buttons(&self) -> &ButtonTheme {
        &self.buttons
    }

    pub fn input(&self) -> &InputTheme {
        &self.input
    }

    pub fn card(&self) -> &CardTheme {
        &self.card
    }

    pub fn chip(&self) -> &ChipTheme {
        &self.chip
    }

    pub fn divider(&self) -> &DividerTheme {
        &self.divider
    }

    pub fn text(&self, name: TypeStyleName) -> &TypeStyle {
        self.text_theme.get(name)
    }

    pub fn color(&self, token: ColorToken) -> Rgba {
        self.palette.color(token)
    }

    pub fn resolve(&self, paint: Paint) -> Rgba {
        self.palette.resolve(paint)
    }

    /// Resolve `paint` and flatten it onto the scaffold background.
    ///
    /// For renderers without an alpha channel.
    pub fn resolve_opaque(&self, paint: Paint) -> Rgba {
        self.resolve_over(paint, self.colors.scaffold_background)
    }

    /// Resolve `paint` and flatten it onto `base`.
    pub fn resolve_over(&self, paint: Paint, base: ColorToken) -> Rgba {
        self.resolve(paint).over(self.color(base))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        build_theme()
    }
}

/// Compose the Stakra theme from the default palette and type scale.
pub fn build_theme() -> ThemeConfig {
    ThemeConfig::compose(Arc::new(Palette::stakra()), Arc::new(TypeScale::stakra()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_theme_is_idempotent() {
        assert_eq!(build_theme(), build_theme());
    }

    #[test]
    fn test_global_colors() {
        let theme = build_theme();
        assert_eq!(theme.colors().scaffold_background, ColorToken::Background);
        assert_eq!(theme.colors().primary, ColorToken::Primary);
        assert_eq!(theme.colors().error, ColorToken::Danger);
    }

    #[test]
    fn test_buttons_share_shape_and_text() {
        let theme = build_theme();
        let label_large = *theme.text(TypeStyleName::LabelLarge);

        for variant in [ButtonVariant::Filled, ButtonVariant::Outlined, ButtonVariant::Text] {
            let style = theme.buttons().style(variant);
            assert_eq!(style.radius, 14.0);
            assert_eq!(style.padding, EdgeInsets::symmetric(20.0, 16.0));
            assert_eq!(style.text_style, label_large);
        }
    }

    #[test]
    fn test_button_variants() {
        let buttons = *build_theme().buttons();

        assert_eq!(buttons.filled.background, Some(Paint::solid(ColorToken::Primary)));
        assert_eq!(buttons.filled.foreground, Paint::solid(ColorToken::White));
        assert_eq!(buttons.filled.border, None);

        assert_eq!(buttons.outlined.background, None);
        assert_eq!(
            buttons.outlined.border,
            Some(BorderSide::hairline(ColorToken::Border))
        );
        assert_eq!(buttons.outlined.foreground, Paint::solid(ColorToken::TextPrimary));

        assert_eq!(buttons.text.background, None);
        assert_eq!(buttons.text.border, None);
        assert_eq!(buttons.text.foreground, Paint::solid(ColorToken::Primary));
    }

    #[test]
    fn test_input_borders_by_state() {
        let theme = build_theme();
        let input = theme.input();

        assert!(input.filled);
        assert_eq!(input.fill, Paint::solid(ColorToken::SurfaceAlt));
        assert_eq!(input.border.paint.token, ColorToken::Border);
        assert_eq!(input.border_for(InputState::Enabled).paint.token, ColorToken::Border);

        let focused = input.border_for(InputState::Focused);
        assert_eq!(focused.paint.token, ColorToken::Primary);
        assert_eq!(focused.width, 1.5);

        assert_eq!(input.border_for(InputState::Invalid).paint.token, ColorToken::Danger);
    }

    #[test]
    fn test_input_text_styles() {
        let theme = build_theme();
        let body = *theme.text(TypeStyleName::BodyMedium);

        assert_eq!(theme.input().label_style, body);
        assert_eq!(theme.input().hint_style.color, ColorToken::TextMuted);
        assert_eq!(theme.input().hint_style.size, body.size);
    }

    #[test]
    fn test_card_is_flat_with_border() {
        let card = *build_theme().card();
        assert_eq!(card.radius, 18.0);
        assert_eq!(card.elevation, 0.0);
        assert_eq!(card.border.paint.token, ColorToken::Border);
        assert_eq!(card.fill, Paint::solid(ColorToken::Surface));
    }

    #[test]
    fn test_chip_states() {
        let chip = *build_theme().chip();
        assert_eq!(chip.background, Paint::solid(ColorToken::SurfaceAlt));
        assert_eq!(chip.selected.token, ColorToken::Primary);
        assert_eq!(chip.selected.opacity, 0.2);
        assert_eq!(chip.radius, 8.0);
        assert_eq!(chip.border.paint.token, ColorToken::Border);
        assert_eq!(chip.background_for(true), chip.selected);
        assert_eq!(chip.background_for(false), chip.background);
    }

    #[test]
    fn test_divider() {
        let divider = *build_theme().divider();
        assert_eq!(divider.paint, Paint::solid(ColorToken::Border));
        assert_eq!(divider.thickness, 1.0);
    }

    #[test]
    fn test_compose_uses_given_palette() {
        let palette = Arc::new(Palette::stakra());
        let scale = Arc::new(TypeScale::stakra());
        let theme = ThemeConfig::compose(Arc::clone(&palette), scale);
        assert_eq!(theme.palette(), palette.as_ref());
        assert_eq!(theme.color(ColorToken::Danger), palette.color(ColorToken::Danger));
    }

    #[test]
    fn test_resolve_opaque_flattens_translucent_paint() {
        let theme = build_theme();
        let selected = theme.resolve_opaque(theme.chip().selected);
        assert!(selected.is_opaque());
        // 20% primary over the near-black background stays dark but bluish
        assert!(selected.b > selected.r);
        assert!(selected.b < theme.color(ColorToken::Primary).b);
    }

    #[test]
    fn test_theme_serializes_to_json_and_toml() {
        let theme = build_theme();

        let json = theme.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["colors"]["error"], "danger");
        assert_eq!(value["card"]["radius"], 18.0);
        assert_eq!(value["palette"]["colors"]["border"], "#2D333B");
        assert_eq!(value["textTheme"]["labelLarge"]["weight"], 600);

        let toml = theme.to_toml().unwrap();
        assert!(toml.contains("scaffoldBackground = \"background\""));
    }

    #[test]
    fn test_theme_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThemeConfig>();
        assert_send_sync::<Arc<ThemeConfig>>();
    }
}
