//! Terminal rendering of the Stakra theme.
//!
//! This module provides:
//! - `palette` - Token and paint conversion to ratatui colors
//! - `styles` - Semantic style and block builders

pub mod palette;
pub mod styles;
