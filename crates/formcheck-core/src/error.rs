//! Error types for feedback configuration.

use thiserror::Error;

/// Errors raised while loading feedback configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Preset name did not match a known preset.
    #[error("unknown feedback preset")]
    UnknownPreset {
        /// Name supplied by the caller.
        value: String,
    },
    /// Configuration document was not valid JSON for the expected shape.
    #[error("invalid feedback configuration")]
    InvalidJson {
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
