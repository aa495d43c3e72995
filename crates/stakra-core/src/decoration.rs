//! Reusable surface descriptors for cards and buttons.

use serde::{Deserialize, Serialize};

use crate::color::Paint;
use crate::palette::{ColorToken, GradientToken};

/// Corner radius used when a caller has no opinion
pub const DEFAULT_DECORATION_RADIUS: f32 = 18.0;

const GLASS_BORDER_OPACITY: f32 = 0.5;
const GLOW_OPACITY: f32 = 0.3;
const GLOW_BLUR: f32 = 10.0;
const GLOW_OFFSET: Offset = Offset { dx: 0.0, dy: 4.0 };

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Background {
    Solid(Paint),
    Gradient(GradientToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub paint: Paint,
    pub blur: f32,
    pub offset: Offset,
}

/// Fill, border and shadow of a surface, independent of how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationSpec {
    pub background: Background,
    pub border: Paint,
    pub border_width: f32,
    pub radius: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl DecorationSpec {
    /// [`glass_decoration`] at the default radius
    pub fn glass() -> Self {
        glass_decoration(DEFAULT_DECORATION_RADIUS)
    }

    /// [`gradient_border_decoration`] at the default radius
    pub fn gradient_border() -> Self {
        gradient_border_decoration(DEFAULT_DECORATION_RADIUS)
    }
}

/// Translucent panel: surface gradient with a half-opacity border.
pub fn glass_decoration(radius: f32) -> DecorationSpec {
    DecorationSpec {
        background: Background::Gradient(GradientToken::Surface),
        border: Paint::solid(ColorToken::Border).with_opacity(GLASS_BORDER_OPACITY),
        border_width: 1.0,
        radius,
        shadow: None,
    }
}

/// Primary gradient panel with a soft primary glow underneath.
///
/// The border is transparent; the gradient itself forms the edge.
pub fn gradient_border_decoration(radius: f32) -> DecorationSpec {
    DecorationSpec {
        background: Background::Gradient(GradientToken::Primary),
        border: Paint::solid(ColorToken::Transparent),
        border_width: 1.0,
        radius,
        shadow: Some(Shadow {
            paint: Paint::solid(ColorToken::Primary).with_opacity(GLOW_OPACITY),
            blur: GLOW_BLUR,
            offset: GLOW_OFFSET,
        }),
    }
}
