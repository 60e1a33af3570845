//! Error types for saved search storage

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing saved searches
#[derive(Debug, Error)]
pub enum CacheError {
    /// Saved search not found
    #[error("Saved search '{0}' not found")]
    NotFound(String),

    /// Invalid identifier
    #[error("Invalid identifier '{0}': {1}")]
    InvalidIdentifier(String, String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage location cannot be determined
    #[error("Configuration error: {0}")]
    Config(String),
}
