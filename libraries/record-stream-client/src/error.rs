//! Error types for the signed-URL client.

use thiserror::Error;

/// Errors that can occur when requesting a signed URL.
#[derive(Error, Debug)]
pub enum StreamClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The signing endpoint returned an error response
    #[error("signing endpoint error ({status}): {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Error message from the endpoint payload
        message: String,
    },

    /// Failed to parse the endpoint response
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The configured endpoint or the returned URL is invalid
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The endpoint is offline or unreachable
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Result type for signed-URL operations.
pub type Result<T> = std::result::Result<T, StreamClientError>;
