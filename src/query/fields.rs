//! Filter field catalog
//!
//! Which fields the wizard offers, which of them prompt for comparison
//! operators, and which are restricted to a closed set of values.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Categorical fields whose values are picked from a fixed list
///
/// Enum selection takes precedence over operator prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EnumField {
    InstrumentMode,
    ObservationDirection,
    OrbitalPlane,
    OrbitState,
    ProductCategory,
    ProductType,
}

impl EnumField {
    /// Resolve a filter field name to an enum field
    #[must_use]
    pub fn from_field(field: &str) -> Option<Self> {
        field.parse().ok()
    }

    /// Field name as used in queries
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The closed set of valid values
    #[must_use]
    pub const fn values(self) -> &'static [&'static str] {
        match self {
            Self::InstrumentMode => &["spotlight", "stripmap", "sliding_spotlight"],
            Self::ObservationDirection => &["left", "right"],
            Self::OrbitalPlane => &["45", "53", "97"],
            Self::OrbitState => &["ascending", "descending"],
            Self::ProductCategory => &["standard", "extended", "custom"],
            Self::ProductType => &["SLC", "GEO", "GEC", "SICD", "SIDD", "CPHD"],
        }
    }

    /// Names of every enum field
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::iter().map(Self::name).collect()
    }
}

/// Supported search filters and their operator capability
///
/// Loaded from the `[search_filters]` table of the configuration file; the
/// defaults cover the catalog fields the search API understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCatalog {
    /// Fields offered in the "What are you looking for today?" prompt
    #[serde(default = "default_supported_filters")]
    pub supported: Vec<String>,

    /// Subset of fields that prompt for comparison operators
    #[serde(default = "default_operator_fields")]
    pub operator_fields: Vec<String>,
}

impl Default for FilterCatalog {
    fn default() -> Self {
        Self {
            supported: default_supported_filters(),
            operator_fields: default_operator_fields(),
        }
    }
}

impl FilterCatalog {
    /// Whether `field` prompts for operators
    #[must_use]
    pub fn supports_operators(&self, field: &str) -> bool {
        self.operator_fields.iter().any(|f| f == field)
    }

    /// Whether `field` is offered at all
    #[must_use]
    pub fn is_supported(&self, field: &str) -> bool {
        self.supported.iter().any(|f| f == field)
    }
}

fn to_strings(fields: &[&str]) -> Vec<String> {
    fields.iter().map(ToString::to_string).collect()
}

fn default_supported_filters() -> Vec<String> {
    to_strings(&[
        "billable_area",
        "bbox",
        "center_frequency",
        "collect_id",
        "collections",
        "constellation",
        "datetime",
        "frequency_band",
        "ids",
        "incidence_angle",
        "instrument_mode",
        "limit",
        "look_angle",
        "looks_azimuth",
        "looks_equivalent_number",
        "looks_range",
        "observation_direction",
        "orbit_state",
        "orbital_plane",
        "pixel_spacing_azimuth",
        "pixel_spacing_range",
        "platform",
        "polarizations",
        "product_category",
        "product_type",
        "resolution_azimuth",
        "resolution_ground_range",
        "resolution_range",
        "squint_angle",
    ])
}

fn default_operator_fields() -> Vec<String> {
    to_strings(&[
        "billable_area",
        "center_frequency",
        "datetime",
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
    ])
}
