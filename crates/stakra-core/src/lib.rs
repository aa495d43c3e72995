//! # stakra-core - Design Tokens and Theme
//!
//! Foundation crate for the Stakra design system. Provides the color
//! palette, the type scale, the composed theme, the display classifiers and
//! the decoration builders.
//!
//! This crate has **zero internal dependencies** and performs no I/O. Every
//! table is closed and known at compile time, so composition and
//! classification cannot fail.
//!
//! ## Public API
//!
//! ### Tokens (`palette`, `typography`, `color`)
//! - [`ColorToken`], [`GradientToken`] - Closed sets of named colors and gradients
//! - [`Palette`] - Token -> [`Rgba`] table, plus gradients
//! - [`TypeScale`], [`TypeStyle`], [`TypeStyleName`] - Named text styles
//! - [`Paint`] - A token at some opacity
//!
//! ### Theme (`theme`)
//! - [`build_theme()`] - Compose the Stakra theme
//! - [`ThemeConfig`] - Immutable component defaults (buttons, inputs, cards, chips, dividers)
//!
//! ### Classifiers (`classify`)
//! - [`classify_label()`] - Issue label -> color, `primary` when unknown
//! - [`classify_status()`] - Workflow status -> color + text, raw text when unknown
//! - [`classify_change()`] - Signed change -> `success` or `danger`
//!
//! ### Decorations (`decoration`)
//! - [`glass_decoration()`], [`gradient_border_decoration()`] - Surface descriptors
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use stakra_core::prelude::*;
//! ```

pub mod classify;
pub mod color;
pub mod decoration;
pub mod error;
pub mod logging;
pub mod palette;
pub mod prelude;
pub mod theme;
pub mod typography;

// Re-export commonly used types at crate root for convenience
pub use classify::{
    classify_change, classify_label, classify_status, ClassificationResult, IssueLabel,
    WorkflowStatus,
};
pub use color::{Paint, Rgba};
pub use decoration::{
    glass_decoration, gradient_border_decoration, Background, DecorationSpec, Offset, Shadow,
    DEFAULT_DECORATION_RADIUS,
};
pub use error::{Error, Result, ResultExt};
pub use palette::{Alignment, ColorToken, Gradient, GradientToken, Palette};
pub use theme::{
    build_theme, BorderSide, ButtonStyle, ButtonTheme, ButtonVariant, CardTheme, ChipTheme,
    DividerTheme, EdgeInsets, InputState, InputTheme, ThemeColors, ThemeConfig,
};
pub use typography::{FontWeight, TypeScale, TypeStyle, TypeStyleName};
