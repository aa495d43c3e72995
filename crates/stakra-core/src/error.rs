//! Error types for token lookup and theme serialization

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the token system.
///
/// Classification and theme composition never fail. Only looking a token up
/// by a free-form name, parsing a hex literal, or serializing a theme can.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Token Lookup Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown color token: {name}")]
    UnknownToken { name: String },

    #[error("Unknown gradient: {name}")]
    UnknownGradient { name: String },

    #[error("Unknown text style: {name}")]
    UnknownTypeStyle { name: String },

    #[error("Invalid hex color: {value}")]
    InvalidHex { value: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn unknown_token(name: impl Into<String>) -> Self {
        Self::UnknownToken { name: name.into() }
    }

    pub fn unknown_gradient(name: impl Into<String>) -> Self {
        Self::UnknownGradient { name: name.into() }
    }

    pub fn unknown_type_style(name: impl Into<String>) -> Self {
        Self::UnknownTypeStyle { name: name.into() }
    }

    pub fn invalid_hex(value: impl Into<String>) -> Self {
        Self::InvalidHex {
            value: value.into(),
        }
    }

    /// True for errors caused by a name or literal the caller typed
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            Error::UnknownToken { .. }
                | Error::UnknownGradient { .. }
                | Error::UnknownTypeStyle { .. }
                | Error::InvalidHex { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unknown_token("neonPink");
        assert_eq!(err.to_string(), "Unknown color token: neonPink");

        let err = Error::invalid_hex("#12");
        assert!(err.to_string().contains("#12"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_lookup_errors_are_classified() {
        assert!(Error::unknown_token("x").is_lookup());
        assert!(Error::unknown_gradient("x").is_lookup());
        assert!(Error::unknown_type_style("x").is_lookup());
        assert!(Error::invalid_hex("x").is_lookup());
        assert!(!Error::logging("already set").is_lookup());
        assert!(!Error::terminal("not a tty").is_lookup());
    }

    #[test]
    fn test_context_passes_error_through() {
        let result: std::result::Result<(), Error> = Err(Error::unknown_gradient("rainbow"));
        let err = result.context("looking up gradient").unwrap_err();
        assert!(matches!(err, Error::UnknownGradient { ref name } if name == "rainbow"));
    }
}
