//! Saved search storage
//!
//! Named searches are kept as two JSON files in the user's local data
//! directory: the item ids a search returned and the query that produced
//! them. `search from-saved` re-fetches the items by id; the
//! `my-search-results` and `my-search-queries` commands list and delete
//! entries.
//!
//! # Storage
//!
//! `~/.local/share/stacwiz/my-search-results.json` and
//! `~/.local/share/stacwiz/my-search-queries.json` on Linux.

pub mod error;
pub mod store;

pub use error::CacheError;
pub use store::{SavedQueries, SavedResults, SearchCache};

use std::path::PathBuf;

/// Get the default cache directory
///
/// # Errors
///
/// Returns `CacheError` if the local data directory cannot be determined
pub fn default_cache_dir() -> Result<PathBuf, CacheError> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| CacheError::Config("Could not determine data directory".to_string()))?;

    Ok(data_dir.join("stacwiz"))
}
