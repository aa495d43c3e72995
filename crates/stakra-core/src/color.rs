//! Color values and symbolic paints.
//!
//! [`Rgba`] is a concrete sRGB value. [`Paint`] is the symbolic form used by
//! the theme and decorations: a [`ColorToken`] plus an opacity, resolved to
//! an `Rgba` through a [`Palette`](crate::palette::Palette) only when a
//! renderer needs pixels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::palette::ColorToken;

/// An sRGB color with straight (non-premultiplied) alpha.
///
/// Serializes as a hex string: `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::from_u32(0x000000);
    pub const WHITE: Rgba = Rgba::from_u32(0xFFFFFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 0xFF,
        }
    }

    /// Alpha as a fraction in `0.0..=1.0`
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Scale the alpha channel by `opacity` (clamped to `0.0..=1.0`).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            a: (self.a as f32 * opacity).round() as u8,
            ..self
        }
    }

    /// Source-over compositing of `self` onto `base`.
    pub fn over(self, base: Rgba) -> Rgba {
        let src_a = self.opacity();
        let dst_a = base.opacity() * (1.0 - src_a);
        let out_a = src_a + dst_a;
        if out_a <= 0.0 {
            return Rgba::TRANSPARENT;
        }

        let channel = |src: u8, dst: u8| -> u8 {
            ((src as f32 * src_a + dst as f32 * dst_a) / out_a)
                .round()
                .clamp(0.0, 255.0) as u8
        };

        Rgba {
            r: channel(self.r, base.r),
            g: channel(self.g, base.g),
            b: channel(self.b, base.b),
            a: (out_a * 255.0).round() as u8,
        }
    }

    /// Linear interpolation between two colors, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };

        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = Error;

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_hex(s));
        }

        let byte = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| Error::invalid_hex(s))
        };

        let alpha = if digits.len() == 8 { byte(6)? } else { 0xFF };
        Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, alpha))
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

fn full_opacity() -> f32 {
    1.0
}

/// A color token at some opacity: "primary at 20%".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    pub token: ColorToken,
    #[serde(default = "full_opacity")]
    pub opacity: f32,
}

impl Paint {
    pub const fn solid(token: ColorToken) -> Self {
        Self {
            token,
            opacity: 1.0,
        }
    }

    /// Same token at a different opacity (clamped to `0.0..=1.0`)
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}

impl From<ColorToken> for Paint {
    fn from(token: ColorToken) -> Self {
        Paint::solid(token)
    }
}
