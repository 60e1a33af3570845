//! Blocking HTTP implementation of `SearchClient`
//!
//! Requests go to `<base_url>/catalog/search` as a STAC item search POST.
//! Core STAC parameters are top-level body fields; every other filter is
//! expressed through the query extension keyed by the prefixed item property.

use super::{ClientError, SearchClient, StacItem};
use crate::config::ApiConfig;
use crate::query::{QueryValue, SearchQuery, split_descriptor};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

/// Search parameters that are not item properties
const CORE_PARAMETERS: &[&str] = &["bbox", "collections", "ids", "intersects", "limit", "sortby"];

const OPEN_END: &str = "..";

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<StacItem>,
}

/// STAC search client over HTTP
pub struct StacClient {
    http: Client,
    search_url: String,
    token: Option<String>,
}

impl StacClient {
    /// Create a client for the configured API
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the base URL is empty or the HTTP client
    /// cannot be built.
    pub fn new(api: &ApiConfig) -> Result<Self, ClientError> {
        let base = api.base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(ClientError::InvalidConfig("api.base_url is empty".to_string()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            search_url: format!("{base}/catalog/search"),
            token: api.token.clone(),
        })
    }

    /// The full search endpoint URL
    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    fn post(&self, body: &Value) -> Result<Vec<StacItem>, ClientError> {
        debug!("POST {} {body}", self.search_url);

        let mut request = self.http.post(&self.search_url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let collection: FeatureCollection = response.json()?;
        debug!("search returned {} items", collection.features.len());
        Ok(collection.features)
    }
}

impl SearchClient for StacClient {
    fn search(&self, query: &SearchQuery) -> Result<Vec<StacItem>, ClientError> {
        self.post(&build_search_body(query)?)
    }

    fn search_ids(&self, ids: &[String]) -> Result<Vec<StacItem>, ClientError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.post(&build_ids_body(ids))
    }
}

/// Item property name the API filters on for a wizard field
#[must_use]
pub fn stac_property(field: &str) -> &str {
    match field {
        "billable_area" => "capella:billable_area",
        "center_frequency" => "sar:center_frequency",
        "collect_id" => "capella:collect_id",
        "frequency_band" => "sar:frequency_band",
        "incidence_angle" => "view:incidence_angle",
        "instrument_mode" => "sar:instrument_mode",
        "look_angle" => "view:look_angle",
        "looks_azimuth" => "sar:looks_azimuth",
        "looks_equivalent_number" => "sar:looks_equivalent_number",
        "looks_range" => "sar:looks_range",
        "observation_direction" => "sar:observation_direction",
        "orbit_state" => "sat:orbit_state",
        "orbital_plane" => "capella:orbital_plane",
        "pixel_spacing_azimuth" => "sar:pixel_spacing_azimuth",
        "pixel_spacing_range" => "sar:pixel_spacing_range",
        "polarizations" => "sar:polarizations",
        "product_category" => "sar:product_category",
        "product_type" => "sar:product_type",
        "resolution_azimuth" => "sar:resolution_azimuth",
        "resolution_ground_range" => "sar:resolution_ground_range",
        "resolution_range" => "sar:resolution_range",
        "squint_angle" => "capella:squint_angle",
        other => other,
    }
}

fn to_json(value: &QueryValue) -> Value {
    match value {
        QueryValue::Integer(v) => Value::from(*v),
        QueryValue::Float(v) => Value::from(*v),
        QueryValue::Text(v) => Value::from(v.as_str()),
        QueryValue::List(values) => Value::Array(values.iter().map(to_json).collect()),
    }
}

#[derive(Debug, Default)]
struct DatetimeRange {
    exact: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

impl DatetimeRange {
    fn add(&mut self, op: Option<&str>, value: &QueryValue) -> Result<(), ClientError> {
        match (op, value) {
            (Some("gt" | "gte"), _) => Self::fill(&mut self.start, "start", value),
            (Some("lt" | "lte"), _) => Self::fill(&mut self.end, "end", value),
            (Some("in"), QueryValue::List(bounds)) => match bounds.as_slice() {
                [start, end] => {
                    Self::fill(&mut self.start, "start", start)?;
                    Self::fill(&mut self.end, "end", end)
                }
                _ => Err(ClientError::InvalidQuery(format!(
                    "datetime 'in' needs a start and an end, got {} values",
                    bounds.len()
                ))),
            },
            (_, QueryValue::List(values)) => match values.as_slice() {
                [exact] => Self::fill(&mut self.exact, "exact value", exact),
                _ => Err(ClientError::InvalidQuery(format!(
                    "datetime needs a single value, got {}",
                    values.len()
                ))),
            },
            _ => Self::fill(&mut self.exact, "exact value", value),
        }
    }

    fn fill(slot: &mut Option<String>, name: &str, value: &QueryValue) -> Result<(), ClientError> {
        if slot.is_some() {
            return Err(ClientError::InvalidQuery(format!("datetime {name} given twice")));
        }
        *slot = Some(value.to_string());
        Ok(())
    }

    fn into_parameter(self) -> Result<Option<String>, ClientError> {
        match (self.exact, self.start, self.end) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(ClientError::InvalidQuery(
                "datetime cannot combine an exact value with bounds".to_string(),
            )),
            (exact, None, None) => Ok(exact),
            (None, start, end) => {
                let start = start.unwrap_or_else(|| OPEN_END.to_string());
                let end = end.unwrap_or_else(|| OPEN_END.to_string());
                Ok(Some(format!("{start}/{end}")))
            }
        }
    }
}

/// Translate a wizard query into a STAC item search request body
///
/// Bare and enum fields compare with `eq`, or `in` for list values.
/// `datetime` bounds collapse into a single interval (`start/..`,
/// `../end`, `start/end`).
///
/// # Errors
///
/// Returns `ClientError::InvalidQuery` for `datetime` filters that do not
/// form one value or one interval: an `in` without exactly two bounds, the
/// same bound given twice, or an exact value mixed with bounds.
pub fn build_search_body(query: &SearchQuery) -> Result<Value, ClientError> {
    let mut body = Map::new();
    let mut filters: Map<String, Value> = Map::new();
    let mut datetime = DatetimeRange::default();

    for (descriptor, value) in query.iter() {
        let (field, op) = split_descriptor(descriptor);

        if field == "datetime" {
            datetime.add(op, value)?;
            continue;
        }

        if CORE_PARAMETERS.contains(&field) {
            body.insert(field.to_string(), to_json(value));
            continue;
        }

        let op = op.unwrap_or(match value {
            QueryValue::List(_) => "in",
            _ => "eq",
        });
        let entry = filters
            .entry(stac_property(field).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(comparisons) = entry {
            comparisons.insert(op.to_string(), to_json(value));
        }
    }

    if let Some(interval) = datetime.into_parameter()? {
        body.insert("datetime".to_string(), Value::from(interval));
    }
    if !filters.is_empty() {
        body.insert("query".to_string(), Value::Object(filters));
    }

    Ok(Value::Object(body))
}

/// Request body fetching items by id
#[must_use]
pub fn build_ids_body(ids: &[String]) -> Value {
    let mut body = Map::new();
    body.insert("ids".to_string(), Value::from(ids.to_vec()));
    body.insert("limit".to_string(), Value::from(ids.len()));
    Value::Object(body)
}
