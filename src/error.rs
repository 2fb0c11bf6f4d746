//! Error types
//!
//! Tasks never surface these to the store; they are logged and folded into
//! the regular action flow.

use thiserror::Error;

/// Failure of a backend request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Invalid configuration value
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: '{value}' is not an http(s) URL")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a number of milliseconds")]
    InvalidDelay { var: &'static str, value: String },
}
