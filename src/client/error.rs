//! Error types for search API calls

use thiserror::Error;

/// Errors that can occur while talking to the search API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("search API returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for the error message
        body: String,
    },

    /// Invalid client configuration (e.g. malformed base URL)
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),

    /// The query cannot be expressed as a search request
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
}
