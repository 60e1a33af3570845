//! stacwiz - an interactive wizard for STAC item search
//!
//! This library walks a user through building a STAC search query with
//! sequential prompts, runs the search against a catalog API, renders the
//! results as a table and offers follow-up actions (change columns, save the
//! search for reuse, export the items as JSON).

use thiserror::Error;

pub mod cache;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod query;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum WizardError {
    /// The user left a required prompt empty; ends the running command
    #[error("{0}")]
    Aborted(String),
    /// Saved search storage error
    #[error("Cache error: {0}")]
    CacheError(#[from] cache::CacheError),
    /// Search API error
    #[error("Search error: {0}")]
    ClientError(#[from] client::ClientError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Prompt failure
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WizardError {
    /// Whether this error is a user cancellation rather than a failure
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted(_))
    }
}

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, WizardError>;

/// Require a non-empty selection from a multi-select prompt
///
/// # Errors
///
/// Returns `WizardError::Aborted` with `message` if the prompt was cancelled
/// or nothing was selected.
pub fn require_selection<T>(selection: Option<Vec<T>>, message: &str) -> Result<Vec<T>> {
    match selection {
        Some(selected) if !selected.is_empty() => Ok(selected),
        _ => Err(WizardError::Aborted(message.to_string())),
    }
}

/// Require an answer from a single-value prompt
///
/// # Errors
///
/// Returns `WizardError::Aborted` with `message` if the prompt was cancelled.
pub fn require_answer<T>(answer: Option<T>, message: &str) -> Result<T> {
    answer.ok_or_else(|| WizardError::Aborted(message.to_string()))
}
