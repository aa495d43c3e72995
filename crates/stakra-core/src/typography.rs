//! Typographic scale.
//!
//! Each [`TypeStyle`] names its color by [`ColorToken`], so a style can only
//! reference colors that exist in the palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::palette::ColorToken;

/// Numeric font weight (100-900).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const W400: FontWeight = FontWeight(400);
    pub const W500: FontWeight = FontWeight(500);
    pub const W600: FontWeight = FontWeight(600);
    pub const W700: FontWeight = FontWeight(700);

    pub const NORMAL: FontWeight = Self::W400;
    pub const BOLD: FontWeight = Self::W700;

    /// Semibold and heavier. Renderers without weights use this to pick bold.
    pub fn is_bold(self) -> bool {
        self.0 >= 600
    }
}

/// A text style: size in points, weight, color, optional tracking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: ColorToken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
}

impl TypeStyle {
    pub const fn new(size: f32, weight: FontWeight, color: ColorToken) -> Self {
        Self {
            size,
            weight,
            color,
            letter_spacing: None,
        }
    }

    pub const fn with_letter_spacing(self, letter_spacing: f32) -> Self {
        Self {
            letter_spacing: Some(letter_spacing),
            ..self
        }
    }

    /// Same style in another color
    pub const fn with_color(self, color: ColorToken) -> Self {
        Self { color, ..self }
    }
}

/// Names of the styles in the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeStyleName {
    DisplayLarge,
    DisplayMedium,
    DisplaySmall,
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    BodyLarge,
    BodyMedium,
    BodySmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
}

impl TypeStyleName {
    pub const ALL: [TypeStyleName; 15] = [
        TypeStyleName::DisplayLarge,
        TypeStyleName::DisplayMedium,
        TypeStyleName::DisplaySmall,
        TypeStyleName::HeadlineLarge,
        TypeStyleName::HeadlineMedium,
        TypeStyleName::HeadlineSmall,
        TypeStyleName::TitleLarge,
        TypeStyleName::TitleMedium,
        TypeStyleName::TitleSmall,
        TypeStyleName::BodyLarge,
        TypeStyleName::BodyMedium,
        TypeStyleName::BodySmall,
        TypeStyleName::LabelLarge,
        TypeStyleName::LabelMedium,
        TypeStyleName::LabelSmall,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn name(self) -> &'static str {
        match self {
            TypeStyleName::DisplayLarge => "displayLarge",
            TypeStyleName::DisplayMedium => "displayMedium",
            TypeStyleName::DisplaySmall => "displaySmall",
            TypeStyleName::HeadlineLarge => "headlineLarge",
            TypeStyleName::HeadlineMedium => "headlineMedium",
            TypeStyleName::HeadlineSmall => "headlineSmall",
            TypeStyleName::TitleLarge => "titleLarge",
            TypeStyleName::TitleMedium => "titleMedium",
            TypeStyleName::TitleSmall => "titleSmall",
            TypeStyleName::BodyLarge => "bodyLarge",
            TypeStyleName::BodyMedium => "bodyMedium",
            TypeStyleName::BodySmall => "bodySmall",
            TypeStyleName::LabelLarge => "labelLarge",
            TypeStyleName::LabelMedium => "labelMedium",
            TypeStyleName::LabelSmall => "labelSmall",
        }
    }

    pub const fn stakra_value(self) -> TypeStyle {
        use ColorToken::{TextMuted, TextPrimary, TextSecondary};
        use FontWeight as W;

        match self {
            TypeStyleName::DisplayLarge => {
                TypeStyle::new(48.0, W::W700, TextPrimary).with_letter_spacing(-1.0)
            }
            TypeStyleName::DisplayMedium => {
                TypeStyle::new(40.0, W::W700, TextPrimary).with_letter_spacing(-0.5)
            }
            TypeStyleName::DisplaySmall => {
                TypeStyle::new(32.0, W::W700, TextPrimary).with_letter_spacing(-0.5)
            }
            TypeStyleName::HeadlineLarge => TypeStyle::new(28.0, W::W600, TextPrimary),
            TypeStyleName::HeadlineMedium => TypeStyle::new(24.0, W::W600, TextPrimary),
            TypeStyleName::HeadlineSmall => TypeStyle::new(20.0, W::W600, TextPrimary),
            TypeStyleName::TitleLarge => TypeStyle::new(18.0, W::W600, TextPrimary),
            TypeStyleName::TitleMedium => TypeStyle::new(16.0, W::W600, TextPrimary),
            TypeStyleName::TitleSmall => TypeStyle::new(14.0, W::W600, TextSecondary),
            TypeStyleName::BodyLarge => TypeStyle::new(16.0, W::W400, TextPrimary),
            TypeStyleName::BodyMedium => TypeStyle::new(14.0, W::W400, TextSecondary),
            TypeStyleName::BodySmall => TypeStyle::new(12.0, W::W400, TextMuted),
            TypeStyleName::LabelLarge => {
                TypeStyle::new(14.0, W::W600, TextPrimary).with_letter_spacing(0.2)
            }
            TypeStyleName::LabelMedium => {
                TypeStyle::new(12.0, W::W500, TextSecondary).with_letter_spacing(0.2)
            }
            TypeStyleName::LabelSmall => {
                TypeStyle::new(11.0, W::W500, TextMuted).with_letter_spacing(0.4)
            }
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TypeStyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeStyleName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TypeStyleName::ALL
            .into_iter()
            .find(|name| name.name() == s)
            .ok_or_else(|| Error::unknown_type_style(s))
    }
}

/// The full set of named text styles.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeScale {
    styles: [TypeStyle; TypeStyleName::COUNT],
}

impl TypeScale {
    pub fn stakra() -> Self {
        Self {
            styles: TypeStyleName::ALL.map(TypeStyleName::stakra_value),
        }
    }

    pub fn get(&self, name: TypeStyleName) -> &TypeStyle {
        &self.styles[name.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeStyleName, &TypeStyle)> + '_ {
        TypeStyleName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }
}

impl Default for TypeScale {
    fn default() -> Self {
        Self::stakra()
    }
}

impl Serialize for TypeScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(name, style)| (name.name(), style)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, name) in TypeStyleName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i, "{name} is out of order");
        }
    }

    #[test]
    fn test_names_parse_back() {
        for name in TypeStyleName::ALL {
            assert_eq!(name.name().parse::<TypeStyleName>().unwrap(), name);
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.name()));
        }
        assert!(matches!(
            "jumbo".parse::<TypeStyleName>(),
            Err(Error::UnknownTypeStyle { .. })
        ));
    }

    #[test]
    fn test_sizes_shrink_within_each_group() {
        let scale = TypeScale::stakra();
        let groups = [
            [
                TypeStyleName::DisplayLarge,
                TypeStyleName::DisplayMedium,
                TypeStyleName::DisplaySmall,
            ],
            [
                TypeStyleName::HeadlineLarge,
                TypeStyleName::HeadlineMedium,
                TypeStyleName::HeadlineSmall,
            ],
            [
                TypeStyleName::TitleLarge,
                TypeStyleName::TitleMedium,
                TypeStyleName::TitleSmall,
            ],
            [
                TypeStyleName::BodyLarge,
                TypeStyleName::BodyMedium,
                TypeStyleName::BodySmall,
            ],
            [
                TypeStyleName::LabelLarge,
                TypeStyleName::LabelMedium,
                TypeStyleName::LabelSmall,
            ],
        ];
        for [large, medium, small] in groups {
            assert!(scale.get(large).size > scale.get(medium).size);
            assert!(scale.get(medium).size > scale.get(small).size);
        }
    }

    #[test]
    fn test_documented_styles() {
        let scale = TypeScale::stakra();

        let body = scale.get(TypeStyleName::BodyMedium);
        assert_eq!(body.size, 14.0);
        assert_eq!(body.weight, FontWeight::W400);
        assert_eq!(body.color, ColorToken::TextSecondary);

        let label = scale.get(TypeStyleName::LabelLarge);
        assert_eq!(label.weight, FontWeight::W600);
        assert_eq!(label.color, ColorToken::TextPrimary);
        assert_eq!(label.letter_spacing, Some(0.2));

        assert_eq!(scale.get(TypeStyleName::HeadlineSmall).letter_spacing, None);
    }

    #[test]
    fn test_with_color_keeps_metrics() {
        let body = TypeStyleName::BodyMedium.stakra_value();
        let hint = body.with_color(ColorToken::TextMuted);
        assert_eq!(hint.color, ColorToken::TextMuted);
        assert_eq!(hint.size, body.size);
        assert_eq!(hint.weight, body.weight);
    }

    #[test]
    fn test_font_weight_boldness() {
        assert!(!FontWeight::W400.is_bold());
        assert!(!FontWeight::W500.is_bold());
        assert!(FontWeight::W600.is_bold());
        assert!(FontWeight::BOLD.is_bold());
    }

    #[test]
    fn test_letter_spacing_omitted_when_absent() {
        let json = serde_json::to_value(TypeStyleName::BodyLarge.stakra_value()).unwrap();
        assert!(json.get("letterSpacing").is_none());
        assert_eq!(json["weight"], 400);
        assert_eq!(json["color"], "textPrimary");
    }
}
