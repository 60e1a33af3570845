//! Per-field validation and type coercion of typed filter values
//!
//! Every field has a validator used by the text prompt (invalid input is
//! asked again) and optionally a caster turning the accepted text into a
//! typed `QueryValue`.

use super::types::QueryValue;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Text validator; `Err` carries the message shown under the prompt
pub type Validator = fn(&str) -> Result<(), String>;

/// Converts validated text into a typed value
pub type Caster = fn(&str) -> Option<QueryValue>;

const FLOAT_FIELDS: &[&str] = &[
    "billable_area",
    "center_frequency",
    "incidence_angle",
    "look_angle",
    "looks_azimuth",
    "looks_equivalent_number",
    "looks_range",
    "pixel_spacing_azimuth",
    "pixel_spacing_range",
    "resolution_azimuth",
    "resolution_ground_range",
    "resolution_range",
    "squint_angle",
];

const INTEGER_FIELDS: &[&str] = &["orbital_plane"];

const LIST_FIELDS: &[&str] = &["collections", "ids", "polarizations"];

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID pattern is valid")
});

/// Validator for a filter field
#[must_use]
pub fn validator_for(field: &str) -> Validator {
    match field {
        "limit" => validate_limit as Validator,
        "datetime" => validate_datetime as Validator,
        "collect_id" => validate_uuid as Validator,
        "bbox" => validate_bbox as Validator,
        f if FLOAT_FIELDS.contains(&f) => validate_float as Validator,
        f if INTEGER_FIELDS.contains(&f) => validate_integer as Validator,
        f if LIST_FIELDS.contains(&f) => validate_list as Validator,
        _ => validate_not_empty as Validator,
    }
}

/// Caster for a filter field, `None` when the text is kept as is
#[must_use]
pub fn caster_for(field: &str) -> Option<Caster> {
    match field {
        "limit" => Some(cast_integer as Caster),
        "datetime" => Some(cast_datetime as Caster),
        "bbox" => Some(cast_bbox as Caster),
        f if FLOAT_FIELDS.contains(&f) => Some(cast_float as Caster),
        f if INTEGER_FIELDS.contains(&f) => Some(cast_integer as Caster),
        f if LIST_FIELDS.contains(&f) => Some(cast_list as Caster),
        _ => None,
    }
}

/// Validate and cast `text` for `field` in one step
///
/// Falls back to a text value when the field has no caster or the cast fails.
#[must_use]
pub fn cast_value(field: &str, text: &str) -> QueryValue {
    caster_for(field)
        .and_then(|cast| cast(text))
        .unwrap_or_else(|| QueryValue::Text(text.trim().to_string()))
}

/// Split comma separated input into trimmed, non-empty parts
pub fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|part| !part.is_empty())
}

fn validate_not_empty(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        Err("Please provide a value".to_string())
    } else {
        Ok(())
    }
}

fn validate_float(text: &str) -> Result<(), String> {
    text.trim()
        .parse::<f64>()
        .map(|_| ())
        .map_err(|_| format!("'{text}' is not a number"))
}

fn validate_integer(text: &str) -> Result<(), String> {
    text.trim()
        .parse::<i64>()
        .map(|_| ())
        .map_err(|_| format!("'{text}' is not a whole number"))
}

fn validate_limit(text: &str) -> Result<(), String> {
    match text.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => Ok(()),
        _ => Err("Limit must be a positive whole number".to_string()),
    }
}

fn validate_uuid(text: &str) -> Result<(), String> {
    if UUID_RE.is_match(text.trim()) {
        Ok(())
    } else {
        Err(format!("'{text}' is not a valid UUID"))
    }
}

fn validate_list(text: &str) -> Result<(), String> {
    if split_list(text).next().is_some() {
        Ok(())
    } else {
        Err("Please provide at least one comma separated value".to_string())
    }
}

fn validate_bbox(text: &str) -> Result<(), String> {
    let parts: Vec<&str> = split_list(text).collect();
    if parts.len() != 4 || parts.iter().any(|p| p.parse::<f64>().is_err()) {
        return Err("Expected four numbers: min_lon,min_lat,max_lon,max_lat".to_string());
    }
    Ok(())
}

fn validate_datetime(text: &str) -> Result<(), String> {
    parse_datetime(text)
        .map(|_| ())
        .ok_or_else(|| format!("'{text}' is not a date (YYYY-MM-DD) or RFC 3339 datetime"))
}

fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn cast_float(text: &str) -> Option<QueryValue> {
    text.trim().parse::<f64>().ok().map(QueryValue::Float)
}

fn cast_integer(text: &str) -> Option<QueryValue> {
    text.trim().parse::<i64>().ok().map(QueryValue::Integer)
}

fn cast_datetime(text: &str) -> Option<QueryValue> {
    parse_datetime(text).map(|dt| QueryValue::Text(dt.to_rfc3339_opts(SecondsFormat::Secs, true)))
}

fn cast_list(text: &str) -> Option<QueryValue> {
    Some(QueryValue::text_list(split_list(text)))
}

fn cast_bbox(text: &str) -> Option<QueryValue> {
    split_list(text)
        .map(|part| part.parse::<f64>().ok().map(QueryValue::Float))
        .collect::<Option<Vec<_>>>()
        .map(QueryValue::List)
}
