//! JSON file storage for saved search results and queries

use super::error::CacheError;
use crate::query::SearchQuery;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Saved item ids by identifier
pub type SavedResults = IndexMap<String, Vec<String>>;

/// Saved queries by identifier
pub type SavedQueries = IndexMap<String, SearchQuery>;

const RESULTS_FILE: &str = "my-search-results.json";
const QUERIES_FILE: &str = "my-search-queries.json";

/// Store for named searches
///
/// Keeps two JSON objects in the cache directory: identifier → item ids
/// (`my-search-results.json`) and identifier → query
/// (`my-search-queries.json`). Saving under an existing identifier replaces
/// the previous entry.
///
/// # Examples
///
/// ```no_run
/// use stacwiz::cache::SearchCache;
/// use std::path::PathBuf;
///
/// let cache = SearchCache::new(PathBuf::from("/tmp/stacwiz"));
/// cache.update_my_search_results("sf-spotlight", vec!["item-1".into()]).unwrap();
/// let saved = cache.load_my_search_results().unwrap();
/// assert_eq!(saved["sf-spotlight"], vec!["item-1"]);
/// ```
#[derive(Debug, Clone)]
pub struct SearchCache {
    dir: PathBuf,
    auto_backup: bool,
}

impl SearchCache {
    /// Create a store in `dir`
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            auto_backup: true,
        }
    }

    /// Create a store with auto-backup disabled
    #[must_use]
    pub const fn without_backup(dir: PathBuf) -> Self {
        Self {
            dir,
            auto_backup: false,
        }
    }

    fn results_path(&self) -> PathBuf {
        self.dir.join(RESULTS_FILE)
    }

    fn queries_path(&self) -> PathBuf {
        self.dir.join(QUERIES_FILE)
    }

    /// Load an identifier map, empty if the file doesn't exist
    fn load<T: DeserializeOwned>(path: &Path) -> Result<IndexMap<String, T>, CacheError> {
        if !path.exists() {
            return Ok(IndexMap::new());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(IndexMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write an identifier map, backing up the previous file if enabled
    fn save<T: Serialize>(&self, path: &Path, entries: &IndexMap<String, T>) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;

        if self.auto_backup && path.exists() {
            let backup_path = path.with_extension("json.backup");
            fs::copy(path, backup_path)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(path, json)?;
        debug!("wrote {} entries to {}", entries.len(), path.display());

        Ok(())
    }

    /// Save the item ids of a search under `identifier`
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the identifier is empty or the store cannot
    /// be read or written.
    pub fn update_my_search_results(&self, identifier: &str, ids: Vec<String>) -> Result<(), CacheError> {
        validate_identifier(identifier)?;
        let path = self.results_path();
        let mut results: SavedResults = Self::load(&path)?;
        results.insert(identifier.to_string(), ids);
        self.save(&path, &results)
    }

    /// Save the query of a search under `identifier`
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the identifier is empty or the store cannot
    /// be read or written.
    pub fn update_my_search_queries(&self, identifier: &str, query: &SearchQuery) -> Result<(), CacheError> {
        validate_identifier(identifier)?;
        let path = self.queries_path();
        let mut queries: SavedQueries = Self::load(&path)?;
        queries.insert(identifier.to_string(), query.clone());
        self.save(&path, &queries)
    }

    /// All saved search results
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the store cannot be read.
    pub fn load_my_search_results(&self) -> Result<SavedResults, CacheError> {
        Self::load(&self.results_path())
    }

    /// All saved search queries
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the store cannot be read.
    pub fn load_my_search_queries(&self) -> Result<SavedQueries, CacheError> {
        Self::load(&self.queries_path())
    }

    /// Item ids saved under `identifier`
    ///
    /// # Errors
    ///
    /// Returns `CacheError::NotFound` if nothing is saved under `identifier`.
    pub fn get_my_search_result(&self, identifier: &str) -> Result<Vec<String>, CacheError> {
        self.load_my_search_results()?
            .swap_remove(identifier)
            .ok_or_else(|| CacheError::NotFound(identifier.to_string()))
    }

    /// Delete saved search results, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the store cannot be read or written.
    pub fn delete_my_search_results(&self, identifiers: &[String]) -> Result<usize, CacheError> {
        let path = self.results_path();
        let mut results: SavedResults = Self::load(&path)?;
        let removed = remove_all(&mut results, identifiers);
        if removed > 0 {
            self.save(&path, &results)?;
        }
        Ok(removed)
    }

    /// Delete saved search queries, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns `CacheError` if the store cannot be read or written.
    pub fn delete_my_search_queries(&self, identifiers: &[String]) -> Result<usize, CacheError> {
        let path = self.queries_path();
        let mut queries: SavedQueries = Self::load(&path)?;
        let removed = remove_all(&mut queries, identifiers);
        if removed > 0 {
            self.save(&path, &queries)?;
        }
        Ok(removed)
    }
}

fn remove_all<T>(entries: &mut IndexMap<String, T>, identifiers: &[String]) -> usize {
    identifiers
        .iter()
        .filter(|id| entries.shift_remove(id.as_str()).is_some())
        .count()
}

fn validate_identifier(identifier: &str) -> Result<(), CacheError> {
    if identifier.trim().is_empty() {
        return Err(CacheError::InvalidIdentifier(
            identifier.to_string(),
            "identifier cannot be empty".to_string(),
        ));
    }
    Ok(())
}
