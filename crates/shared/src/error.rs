//! Shared error types.

use thiserror::Error;

/// Result type alias using `SharedError`.
pub type SharedResult<T> = Result<T, SharedError>;

/// Errors raised by the ambient layers (configuration, tracing).
#[derive(Debug, Error)]
pub enum SharedError {
    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A configured value is syntactically valid but unusable.
    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidSetting {
        /// Dotted configuration key.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The tracing filter directive could not be parsed.
    #[error("Invalid tracing filter: {0}")]
    Telemetry(String),
}

impl SharedError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidSetting { .. } => "INVALID_SETTING",
            Self::Telemetry(_) => "TELEMETRY_ERROR",
        }
    }
}
