//! Search API error types

use thiserror::Error;

/// Errors that can occur while talking to the explorer backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the response could not be read
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not a search result
    #[error("Failed to decode search result: {0}")]
    Decode(#[from] serde_json::Error),

    /// Backend answered with an error status and no usable body
    #[error("Backend returned HTTP {0}")]
    Status(u16),

    /// Configured endpoint is not a valid URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Result type for search API operations
pub type Result<T> = std::result::Result<T, ApiError>;
