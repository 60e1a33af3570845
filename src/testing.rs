//! Testing utilities for stacwiz
//!
//! Provides `StaticClient`, a `SearchClient` that answers every search with
//! a fixed item list and records what it was asked, plus fixture STAC items.
//!
//! Only available when compiled with `cfg(test)`.

use crate::client::{ClientError, SearchClient, StacItem};
use crate::query::SearchQuery;
use serde_json::{Value, json};
use std::sync::Mutex;

/// Search client double returning canned items
#[derive(Debug, Default)]
pub struct StaticClient {
    items: Vec<StacItem>,
    queries: Mutex<Vec<SearchQuery>>,
    id_requests: Mutex<Vec<Vec<String>>>,
}

impl StaticClient {
    pub fn new(items: Vec<StacItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Queries passed to `search`
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }

    /// Id lists passed to `search_ids`
    pub fn id_requests(&self) -> Vec<Vec<String>> {
        self.id_requests.lock().unwrap().clone()
    }

    /// Total number of searches of either kind
    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len() + self.id_requests.lock().unwrap().len()
    }
}

impl SearchClient for StaticClient {
    fn search(&self, query: &SearchQuery) -> Result<Vec<StacItem>, ClientError> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.items.clone())
    }

    fn search_ids(&self, ids: &[String]) -> Result<Vec<StacItem>, ClientError> {
        self.id_requests.lock().unwrap().push(ids.to_vec());
        Ok(self
            .items
            .iter()
            .filter(|item| {
                item.get("id")
                    .and_then(Value::as_str)
                    .is_some_and(|id| ids.iter().any(|wanted| wanted == id))
            })
            .cloned()
            .collect())
    }
}

fn item(value: Value) -> StacItem {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture item must be an object, got {other}"),
    }
}

/// Two Capella-like STAC items
pub fn fixture_items() -> Vec<StacItem> {
    vec![
        item(json!({
            "type": "Feature",
            "stac_version": "1.0.0",
            "id": "CAPELLA_C13_SP_GEO_HH_20240101",
            "collection": "capella-geo",
            "geometry": null,
            "properties": {
                "datetime": "2024-01-01T10:00:00Z",
                "sar:instrument_mode": "spotlight",
                "sar:product_type": "GEO",
                "sar:polarizations": ["HH"],
                "view:incidence_angle": 35.2,
                "capella:orbital_plane": 45
            },
            "assets": {}
        })),
        item(json!({
            "type": "Feature",
            "stac_version": "1.0.0",
            "id": "CAPELLA_C14_SM_SLC_VV_20240102",
            "collection": "capella-slc",
            "geometry": null,
            "properties": {
                "datetime": "2024-01-02T11:30:00Z",
                "sar:instrument_mode": "stripmap",
                "sar:product_type": "SLC",
                "sar:polarizations": ["VV"],
                "view:incidence_angle": 41.0,
                "capella:orbital_plane": 53
            },
            "assets": {}
        })),
    ]
}
