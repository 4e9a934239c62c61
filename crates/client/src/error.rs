//! Error types for the client crate.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading an upload or writing a download failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid request (missing required parameter, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an I/O error for a local path
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}

impl From<ClientError> for crowdin_sync_core::Error {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => crowdin_sync_core::Error::transport(e.to_string()),
            ClientError::Io { path, source } => crowdin_sync_core::Error::Io(std::io::Error::new(
                source.kind(),
                format!("{}: {}", path, source),
            )),
            ClientError::InvalidRequest(message) => {
                crowdin_sync_core::Error::invalid_parameters(message)
            }
        }
    }
}
