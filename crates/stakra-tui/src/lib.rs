//! stakra-tui - Terminal rendering of the Stakra design system
//!
//! Converts design tokens and the composed theme into ratatui colors,
//! styles and blocks, and provides the pre-styled widgets built on them.
//! Colors are emitted as 24-bit RGB; translucent paints are flattened onto
//! the surface beneath them.

pub mod preview;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use preview::{render_to_string, run_interactive};
pub use theme::palette::{paint_color, to_color, token_color};
pub use theme::styles::{decoration_block, text_style};
pub use widgets::{
    GlassCard, GradientButton, IssueCard, KpiCard, LabelChip, Showcase, StatusBadge, Surface,
};
