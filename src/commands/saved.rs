//! Saved search management commands
//!
//! `my-search-results` and `my-search-queries` list or delete the entries
//! written by the post-search save action.

use super::Session;
use crate::cli::SavedCommands;
use crate::output::{render_saved_queries, render_saved_results};
use crate::{Result, require_selection};

pub const DELETE_PROMPT: &str = "Which saved searches would you like to delete?";

/// Execute a `my-search-results` command
///
/// # Errors
///
/// Returns `WizardError` if the store cannot be read or written, or the
/// delete selection is empty.
pub fn execute_results(command: &SavedCommands, session: &mut Session<'_>) -> Result<()> {
    let results = session.cache.load_my_search_results()?;
    match command {
        SavedCommands::List => {
            if results.is_empty() {
                session.output.info("No saved search results.");
                return Ok(());
            }
            session.output.write(render_saved_results(&results).trim_end());
            Ok(())
        }
        SavedCommands::Delete => {
            let identifiers: Vec<String> = results.keys().cloned().collect();
            let Some(selected) = select_for_deletion(session, &identifiers)? else {
                session.output.info("No saved search results.");
                return Ok(());
            };
            let removed = session.cache.delete_my_search_results(&selected)?;
            session
                .output
                .success(&format!("Deleted {removed} saved search result(s)"));
            Ok(())
        }
    }
}

/// Execute a `my-search-queries` command
///
/// # Errors
///
/// Returns `WizardError` if the store cannot be read or written, or the
/// delete selection is empty.
pub fn execute_queries(command: &SavedCommands, session: &mut Session<'_>) -> Result<()> {
    let queries = session.cache.load_my_search_queries()?;
    match command {
        SavedCommands::List => {
            if queries.is_empty() {
                session.output.info("No saved search queries.");
                return Ok(());
            }
            session.output.write(render_saved_queries(&queries).trim_end());
            Ok(())
        }
        SavedCommands::Delete => {
            let identifiers: Vec<String> = queries.keys().cloned().collect();
            let Some(selected) = select_for_deletion(session, &identifiers)? else {
                session.output.info("No saved search queries.");
                return Ok(());
            };
            let removed = session.cache.delete_my_search_queries(&selected)?;
            session
                .output
                .success(&format!("Deleted {removed} saved search quer(y/ies)"));
            Ok(())
        }
    }
}

/// Multi-select over `identifiers`; `None` when there is nothing to pick
fn select_for_deletion(session: &Session<'_>, identifiers: &[String]) -> Result<Option<Vec<String>>> {
    if identifiers.is_empty() {
        return Ok(None);
    }

    let picked = require_selection(
        session.input.prompt_multi_select(DELETE_PROMPT, identifiers, &[])?,
        "Please select at least one saved search",
    )?;

    Ok(Some(
        picked
            .into_iter()
            .filter_map(|index| identifiers.get(index).cloned())
            .collect(),
    ))
}
