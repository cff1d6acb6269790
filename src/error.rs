//! Error types for the chip library

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, ChipError>;

/// Main error type for gateway operations
///
/// Transport-level failures ([`Transport`](ChipError::Transport),
/// [`Status`](ChipError::Status), [`InvalidJson`](ChipError::InvalidJson))
/// and shape-level failures ([`Mapping`](ChipError::Mapping)) stay
/// distinct variants so callers can tell a gateway problem from a
/// response the library could not understand.
#[derive(Error, Debug)]
pub enum ChipError {
    /// Network or connection failure while talking to the gateway
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered with a non-success HTTP status
    #[error("gateway returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// A success response carried a body that is not valid JSON
    #[error("response body is not valid JSON: {source}")]
    InvalidJson {
        /// Underlying parse error
        source: serde_json::Error,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// Decoded JSON did not fit the expected typed shape
    #[error("response mapping failed: {0}")]
    Mapping(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },
}

impl ChipError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status code of the response, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
