//! Error types for the reviews client.

use thiserror::Error;

/// Result type for reviews client operations.
pub type Result<T> = std::result::Result<T, ReviewsError>;

/// Reviews client errors.
#[derive(Debug, Error)]
pub enum ReviewsError {
    /// Network error (connection failed, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("parse error: {0}")]
    Parse(String),
}
