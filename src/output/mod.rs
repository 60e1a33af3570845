//! Output formatting for CLI display
//!
//! Search results and saved searches are rendered as plain aligned tables
//! with `tabular`; colors are applied by the `OutputWriter`, not here, so
//! column widths stay exact.

pub mod saved;
pub mod table;

pub use saved::{render_saved_queries, render_saved_results};
pub use table::{AVAILABLE_HEADERS, DEFAULT_HEADERS, cell_value, render_table, show_tabulated};
