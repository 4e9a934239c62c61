//! Core error types for Crowdin synchronization.
//!
//! Transport-specific errors (reqwest, multipart encoding, ...) are converted
//! to these types by the client crate so the workflow stays transport-agnostic.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the synchronization workflow.
#[derive(Error, Debug)]
pub enum Error {
    /// The remote call could not be completed (connection, timeout, body read).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// A request was built without a parameter the call needs.
    #[error("Invalid request parameters: {0}")]
    InvalidParameters(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create an invalid parameters error
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters(message.into())
    }
}
