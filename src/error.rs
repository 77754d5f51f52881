//! Error types for Lumen.

use thiserror::Error;

/// The error type for all fallible Lumen operations.
#[derive(Error, Debug)]
pub enum LumenError {
    /// A caller-supplied argument was missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// User configuration text could not be turned into a configuration.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LumenError>;

impl LumenError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LumenError::InvalidArgument(msg.into())
    }

    pub fn config_parse<S: Into<String>>(msg: S) -> Self {
        LumenError::ConfigParse(msg.into())
    }
}
