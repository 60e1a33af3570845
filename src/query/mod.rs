//! Search query model and interactive query building
//!
//! # Descriptors
//!
//! A query maps filter descriptors to values. A descriptor is either a bare
//! field name (`collect_id`) or a field joined with an operator token by a
//! double underscore (`incidence_angle__gte`). Enum fields always use the bare
//! name and store the list of picked values.
//!
//! # Examples
//!
//! ```
//! use stacwiz::query::{Operator, QueryValue, SearchQuery};
//!
//! let mut query = SearchQuery::new();
//! query.insert("instrument_mode", QueryValue::text_list(["spotlight"]));
//! query.insert(Operator::Gte.descriptor("look_angle"), 25.0);
//! query.ensure_limit(100);
//!
//! assert_eq!(
//!     query.to_string(),
//!     "instrument_modespotlight-look_angle__gte25.0-limit100"
//! );
//! ```

pub mod builder;
pub mod fields;
pub mod operators;
pub mod types;
pub mod validate;

pub use builder::{FILTER_PROMPT, QueryBuilder};
pub use fields::{EnumField, FilterCatalog};
pub use operators::Operator;
pub use types::{LIMIT_KEY, OPERATOR_SEPARATOR, QueryValue, SearchQuery, split_descriptor};
pub use validate::{Caster, Validator, caster_for, validator_for};
