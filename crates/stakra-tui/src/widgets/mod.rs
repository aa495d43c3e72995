//! Pre-styled widgets

mod badge;
mod glass_card;
mod gradient_button;
mod issue_card;
mod kpi_card;
mod showcase;
pub mod surface;
pub mod text;

pub use badge::{LabelChip, StatusBadge};
pub use glass_card::GlassCard;
pub use gradient_button::GradientButton;
pub use issue_card::IssueCard;
pub use kpi_card::KpiCard;
pub use showcase::{Showcase, MIN_HEIGHT as SHOWCASE_MIN_HEIGHT, MIN_WIDTH as SHOWCASE_MIN_WIDTH};
pub use surface::Surface;
