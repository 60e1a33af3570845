//! Tabulated display of STAC search results

use crate::client::{StacItem, stac_property};
use crate::ui::OutputWriter;
use serde_json::Value;
use tabular::{Row, Table};

/// Columns shown when the configuration doesn't set any
pub const DEFAULT_HEADERS: &[&str] = &[
    "id",
    "instrument_mode",
    "product_type",
    "polarizations",
    "incidence_angle",
    "datetime",
];

/// Columns offered when adjusting the result table
pub const AVAILABLE_HEADERS: &[&str] = &[
    "id",
    "collection",
    "datetime",
    "collect_id",
    "instrument_mode",
    "product_type",
    "product_category",
    "polarizations",
    "incidence_angle",
    "look_angle",
    "squint_angle",
    "observation_direction",
    "orbit_state",
    "orbital_plane",
    "resolution_range",
    "resolution_azimuth",
    "resolution_ground_range",
    "pixel_spacing_range",
    "pixel_spacing_azimuth",
    "frequency_band",
    "billable_area",
];

/// Text shown in the table for one header of an item
///
/// `id` and `collection` are top-level item members; every other header is
/// looked up in `properties`, first under its prefixed STAC name, then
/// verbatim.
#[must_use]
pub fn cell_value(item: &StacItem, header: &str) -> String {
    let value = match header {
        "id" | "collection" => item.get(header),
        _ => item.get("properties").and_then(|properties| {
            properties
                .get(stac_property(header))
                .or_else(|| properties.get(header))
        }),
    };
    value.map(format_value).unwrap_or_default()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(values) => values.iter().map(format_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Render items as an aligned table with a header row
#[must_use]
pub fn render_table(items: &[StacItem], headers: &[String]) -> String {
    let spec = vec!["{:<}"; headers.len()].join("  ");
    let mut table = Table::new(&spec);

    table.add_row(
        headers
            .iter()
            .fold(Row::new(), |row, header| row.with_cell(header)),
    );
    for item in items {
        table.add_row(
            headers
                .iter()
                .fold(Row::new(), |row, header| row.with_cell(cell_value(item, header))),
        );
    }

    table.to_string()
}

/// Print search results as a table
pub fn show_tabulated(output: &dyn OutputWriter, items: &[StacItem], headers: &[String]) {
    if headers.is_empty() {
        output.warning("No result headers configured");
        return;
    }
    output.write(render_table(items, headers).trim_end());
}
