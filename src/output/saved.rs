//! Listings of saved searches

use crate::cache::{SavedQueries, SavedResults};
use tabular::{Row, Table};

/// Number of item ids shown before eliding
const ID_PREVIEW: usize = 3;

fn preview_ids(ids: &[String]) -> String {
    let shown = ids.iter().take(ID_PREVIEW).cloned().collect::<Vec<_>>().join(", ");
    if ids.len() > ID_PREVIEW {
        format!("{shown}, ...")
    } else {
        shown
    }
}

/// Saved results as `identifier  count  ids` rows
#[must_use]
pub fn render_saved_results(results: &SavedResults) -> String {
    let mut table = Table::new("{:<}  {:>}  {:<}");
    table.add_row(Row::new().with_cell("identifier").with_cell("items").with_cell("ids"));
    for (identifier, ids) in results {
        table.add_row(
            Row::new()
                .with_cell(identifier)
                .with_cell(ids.len())
                .with_cell(preview_ids(ids)),
        );
    }
    table.to_string()
}

/// Saved queries as `identifier  query` rows
#[must_use]
pub fn render_saved_queries(queries: &SavedQueries) -> String {
    let mut table = Table::new("{:<}  {:<}");
    table.add_row(Row::new().with_cell("identifier").with_cell("query"));
    for (identifier, query) in queries {
        table.add_row(Row::new().with_cell(identifier).with_cell(query));
    }
    table.to_string()
}
