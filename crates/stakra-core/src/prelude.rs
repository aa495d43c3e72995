//! Prelude for common imports used throughout all Stakra crates

pub use crate::error::{Error, Result, ResultExt};
pub use crate::palette::ColorToken;
pub use crate::theme::ThemeConfig;
pub use tracing::{debug, error, info, instrument, trace, warn};
