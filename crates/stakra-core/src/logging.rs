//! Logging configuration using tracing
//!
//! Library code only emits events; installing a subscriber is left to the
//! binary, which calls [`init`] once at start-up.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "STAKRA_LOG";

const DEFAULT_FILTER: &str = "stakra=warn";
const VERBOSE_FILTER: &str = "stakra=debug,warn";

/// Initialize the logging subsystem
///
/// Logs go to stderr so that command output on stdout stays machine-readable.
/// Log level is controlled by the `STAKRA_LOG` environment variable; without
/// it, `verbose` picks between warnings only and debug output.
///
/// # Examples
/// ```bash
/// STAKRA_LOG=debug stakra theme
/// STAKRA_LOG=stakra_core=trace stakra classify status archived
/// ```
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::logging(e.to_string()))?;

    tracing::debug!("logging initialized");

    Ok(())
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}
