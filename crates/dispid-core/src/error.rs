//! Error types for dispid
//!
//! Display queries never surface these across the public query operations;
//! those follow the sentinel contract (empty string or `None`). `Error` is
//! what configuration loading and outer tooling deal in.

use thiserror::Error;

/// Result type alias for dispid operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for dispid
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The display topology could not be retrieved right now
    #[error("Display topology unavailable")]
    TopologyUnavailable,

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
