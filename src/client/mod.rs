//! STAC search API client
//!
//! The wizard only needs one capability from the catalog API: run a search
//! and hand back the matching items. `SearchClient` is that seam;
//! `StacClient` implements it over HTTP.

mod error;
mod stac;

pub use error::ClientError;
pub use stac::{StacClient, build_ids_body, build_search_body, stac_property};

use crate::query::SearchQuery;
use serde_json::{Map, Value};

/// A STAC item as returned by the API, kept verbatim
pub type StacItem = Map<String, Value>;

/// Something that can execute item searches
pub trait SearchClient {
    /// Search items matching the filters of `query`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the request fails or the response is not a
    /// feature collection.
    fn search(&self, query: &SearchQuery) -> Result<Vec<StacItem>, ClientError>;

    /// Fetch items by their ids
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the request fails or the response is not a
    /// feature collection.
    fn search_ids(&self, ids: &[String]) -> Result<Vec<StacItem>, ClientError>;
}

/// The `id` of an item, if present and a string
#[must_use]
pub fn item_id(item: &StacItem) -> Option<&str> {
    item.get("id").and_then(Value::as_str)
}

/// The ids of all items that have one, in order
#[must_use]
pub fn item_ids(items: &[StacItem]) -> Vec<String> {
    items
        .iter()
        .filter_map(item_id)
        .map(ToString::to_string)
        .collect()
}
