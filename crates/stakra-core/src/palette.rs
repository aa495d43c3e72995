//! Color palette for the Stakra dark theme.
//!
//! The token set is closed: [`ColorToken`] enumerates every named color and
//! [`GradientToken`] every named gradient. A [`Palette`] maps each token to a
//! concrete value. Because the mapping is built from an exhaustive `match`,
//! adding a token without giving it a value does not compile.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::color::{Paint, Rgba};
use crate::error::{Error, Result};

/// Every named color in the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    // --- Brand ---
    Primary,
    PrimaryLight,

    // --- Background layers ---
    Background,
    Surface,
    SurfaceAlt,
    Border,

    // --- Text ---
    TextPrimary,
    TextSecondary,
    TextMuted,

    // --- Fixed ---
    White,
    Transparent,

    // --- Semantic ---
    Success,
    Warning,
    Danger,
    Info,

    // --- Categorical (labels, workflow states) ---
    Green,
    Blue,
    Amber,
    Red,
    Purple,
    Teal,
}

impl ColorToken {
    /// All tokens in declaration order
    pub const ALL: [ColorToken; 21] = [
        ColorToken::Primary,
        ColorToken::PrimaryLight,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::SurfaceAlt,
        ColorToken::Border,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::TextMuted,
        ColorToken::White,
        ColorToken::Transparent,
        ColorToken::Success,
        ColorToken::Warning,
        ColorToken::Danger,
        ColorToken::Info,
        ColorToken::Green,
        ColorToken::Blue,
        ColorToken::Amber,
        ColorToken::Red,
        ColorToken::Purple,
        ColorToken::Teal,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stable camelCase name, identical to the serde representation
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryLight => "primaryLight",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::SurfaceAlt => "surfaceAlt",
            ColorToken::Border => "border",
            ColorToken::TextPrimary => "textPrimary",
            ColorToken::TextSecondary => "textSecondary",
            ColorToken::TextMuted => "textMuted",
            ColorToken::White => "white",
            ColorToken::Transparent => "transparent",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Danger => "danger",
            ColorToken::Info => "info",
            ColorToken::Green => "green",
            ColorToken::Blue => "blue",
            ColorToken::Amber => "amber",
            ColorToken::Red => "red",
            ColorToken::Purple => "purple",
            ColorToken::Teal => "teal",
        }
    }

    /// The Stakra value for this token.
    pub const fn stakra_value(self) -> Rgba {
        match self {
            ColorToken::Primary => Rgba::from_u32(0x2563EB),
            ColorToken::PrimaryLight => Rgba::from_u32(0x6366F1),
            ColorToken::Background => Rgba::from_u32(0x0A0C10),
            ColorToken::Surface => Rgba::from_u32(0x12151C),
            ColorToken::SurfaceAlt => Rgba::from_u32(0x1C212B),
            ColorToken::Border => Rgba::from_u32(0x2D333B),
            ColorToken::TextPrimary => Rgba::from_u32(0xE6EDF3),
            ColorToken::TextSecondary => Rgba::from_u32(0x7D8590),
            ColorToken::TextMuted => Rgba::from_u32(0x484F58),
            ColorToken::White => Rgba::WHITE,
            ColorToken::Transparent => Rgba::TRANSPARENT,
            ColorToken::Success => Rgba::from_u32(0x10B981),
            ColorToken::Warning => Rgba::from_u32(0xEAB308),
            ColorToken::Danger => Rgba::from_u32(0xF43F5E),
            ColorToken::Info => Rgba::from_u32(0x38BDF8),
            ColorToken::Green => Rgba::from_u32(0x22C55E),
            ColorToken::Blue => Rgba::from_u32(0x3B82F6),
            ColorToken::Amber => Rgba::from_u32(0xF59E0B),
            ColorToken::Red => Rgba::from_u32(0xEF4444),
            ColorToken::Purple => Rgba::from_u32(0xA855F7),
            ColorToken::Teal => Rgba::from_u32(0x14B8A6),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorToken::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| Error::unknown_token(s))
    }
}

/// Gradient anchor points, matching the usual nine-point alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    /// Position in normalized coordinates, `(-1, -1)` top-left to `(1, 1)` bottom-right
    pub fn xy(self) -> (f32, f32) {
        match self {
            Alignment::TopLeft => (-1.0, -1.0),
            Alignment::TopCenter => (0.0, -1.0),
            Alignment::TopRight => (1.0, -1.0),
            Alignment::CenterLeft => (-1.0, 0.0),
            Alignment::Center => (0.0, 0.0),
            Alignment::CenterRight => (1.0, 0.0),
            Alignment::BottomLeft => (-1.0, 1.0),
            Alignment::BottomCenter => (0.0, 1.0),
            Alignment::BottomRight => (1.0, 1.0),
        }
    }
}

/// A two-stop linear gradient between color tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub from: ColorToken,
    pub to: ColorToken,
    pub begin: Alignment,
    pub end: Alignment,
}

impl Gradient {
    /// Gradient parameter at a point given in normalized coordinates.
    ///
    /// The point is projected onto the `begin -> end` axis; the result is
    /// clamped to `0.0..=1.0`. A degenerate axis yields `0.0`.
    pub fn position(&self, x: f32, y: f32) -> f32 {
        let (bx, by) = self.begin.xy();
        let (ex, ey) = self.end.xy();
        let (ax, ay) = (ex - bx, ey - by);
        let len_sq = ax * ax + ay * ay;
        if len_sq == 0.0 {
            return 0.0;
        }
        (((x - bx) * ax + (y - by) * ay) / len_sq).clamp(0.0, 1.0)
    }
}

/// Every named gradient in the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientToken {
    Primary,
    Surface,
}

impl GradientToken {
    pub const ALL: [GradientToken; 2] = [GradientToken::Primary, GradientToken::Surface];

    pub const COUNT: usize = Self::ALL.len();

    pub fn name(self) -> &'static str {
        match self {
            GradientToken::Primary => "primary",
            GradientToken::Surface => "surface",
        }
    }

    pub const fn stakra_value(self) -> Gradient {
        match self {
            GradientToken::Primary => Gradient {
                from: ColorToken::Primary,
                to: ColorToken::PrimaryLight,
                begin: Alignment::TopLeft,
                end: Alignment::BottomRight,
            },
            GradientToken::Surface => Gradient {
                from: ColorToken::Surface,
                to: ColorToken::SurfaceAlt,
                begin: Alignment::TopLeft,
                end: Alignment::BottomRight,
            },
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GradientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradientToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GradientToken::ALL
            .into_iter()
            .find(|token| token.name() == s)
            .ok_or_else(|| Error::unknown_gradient(s))
    }
}

/// The resolved color table.
///
/// Built once at start-up and shared read-only (usually behind an `Arc`
/// owned by the [`ThemeConfig`](crate::theme::ThemeConfig)).
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Rgba; ColorToken::COUNT],
    gradients: [Gradient; GradientToken::COUNT],
}

impl Palette {
    /// The Stakra dark palette
    pub fn stakra() -> Self {
        Self {
            colors: ColorToken::ALL.map(ColorToken::stakra_value),
            gradients: GradientToken::ALL.map(GradientToken::stakra_value),
        }
    }

    pub fn color(&self, token: ColorToken) -> Rgba {
        self.colors[token.index()]
    }

    /// Resolve a paint to a concrete color, applying its opacity.
    pub fn resolve(&self, paint: Paint) -> Rgba {
        self.color(paint.token).with_opacity(paint.opacity)
    }

    pub fn gradient(&self, token: GradientToken) -> Gradient {
        self.gradients[token.index()]
    }

    pub fn primary_gradient(&self) -> Gradient {
        self.gradient(GradientToken::Primary)
    }

    pub fn surface_gradient(&self) -> Gradient {
        self.gradient(GradientToken::Surface)
    }

    /// Color of `token`'s gradient at a normalized point (see [`Gradient::position`]).
    pub fn sample_gradient(&self, token: GradientToken, x: f32, y: f32) -> Rgba {
        let gradient = self.gradient(token);
        let t = gradient.position(x, y);
        self.color(gradient.from).lerp(self.color(gradient.to), t)
    }

    /// Tokens paired with their values, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, Rgba)> + '_ {
        ColorToken::ALL
            .into_iter()
            .map(move |token| (token, self.color(token)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::stakra()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Palette", 2)?;
        state.serialize_field("colors", &ColorTable(self))?;
        state.serialize_field("gradients", &GradientTable(self))?;
        state.end()
    }
}

/// Serializes as an ordered `name -> hex` map
struct ColorTable<'a>(&'a Palette);

impl Serialize for ColorTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(token, color)| (token.name(), color)))
    }
}

struct GradientTable<'a>(&'a Palette);

impl Serialize for GradientTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            GradientToken::ALL
                .into_iter()
                .map(|token| (token.name(), self.0.gradient(token))),
        )
    }
}
