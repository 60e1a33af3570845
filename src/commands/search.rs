//! Search commands
//!
//! `search interactive` builds a query through prompts; `search from-saved`
//! re-fetches the items of a saved search by id. Both show the result table
//! and hand over to the post-search menu.

use super::Session;
use super::actions::PostSearchMenu;
use crate::cli::SearchCommands;
use crate::output::show_tabulated;
use crate::query::QueryBuilder;
use crate::{Result, WizardError, require_answer};
use log::debug;

pub const SAVED_SEARCH_PROMPT: &str = "Which saved search would you like to use?";

/// Execute a search command
///
/// # Errors
///
/// Returns `WizardError` if a prompt is cancelled, the search fails, or a
/// post-search action fails.
pub fn execute(command: &SearchCommands, session: &mut Session<'_>) -> Result<()> {
    match command {
        SearchCommands::Interactive => interactive(session),
        SearchCommands::FromSaved => from_saved(session),
    }
}

/// Interactive search with prompts
///
/// # Errors
///
/// Returns `WizardError::Aborted` if a required selection is left empty;
/// the client is not called in that case.
pub fn interactive(session: &mut Session<'_>) -> Result<()> {
    let query = QueryBuilder::new(
        session.input,
        &session.config.search_filters,
        session.config.limit,
    )
    .prompt()?;

    let items = session.client.search(&query)?;
    debug!("query {query} returned {} items", items.len());
    if items.is_empty() {
        session.output.warning("No STAC items matched your search");
        return Ok(());
    }

    show_tabulated(session.output, &items, &session.config.search_headers);
    PostSearchMenu::new(session, &items, query.to_string())
        .offering_save(&query)
        .run()
}

/// Select a saved search and show its items
///
/// # Errors
///
/// Returns `WizardError::Aborted` if nothing is saved or the selection is
/// cancelled.
pub fn from_saved(session: &mut Session<'_>) -> Result<()> {
    let saved = session.cache.load_my_search_results()?;
    if saved.is_empty() {
        return Err(WizardError::Aborted(
            "No saved searches yet. Save one from `stacwiz search interactive` first".to_string(),
        ));
    }

    let identifiers: Vec<String> = saved.keys().cloned().collect();
    let index = require_answer(
        session.input.prompt_select(SAVED_SEARCH_PROMPT, &identifiers, None)?,
        "Please select a saved search",
    )?;
    let identifier = identifiers
        .get(index)
        .ok_or_else(|| WizardError::InvalidInput(format!("no saved search at position {index}")))?;
    let ids = session.cache.get_my_search_result(identifier)?;

    let items = session.client.search_ids(&ids)?;
    if items.is_empty() {
        session
            .output
            .warning(&format!("None of the items saved as '{identifier}' were found"));
        return Ok(());
    }

    show_tabulated(session.output, &items, &session.config.search_headers);
    PostSearchMenu::new(session, &items, identifier.clone()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SearchCache;
    use crate::commands::actions::ACTION_PROMPT;
    use crate::config::WizardConfig;
    use crate::query::{FILTER_PROMPT, QueryValue, SearchQuery};
    use crate::testing::{StaticClient, fixture_items};
    use crate::ui::BufferedWriter;
    use crate::ui::mock::{Answer, ScriptedInput};
    use tempfile::TempDir;

    const SAVE: &str = "save search query and result for reuse";

    struct Fixture {
        dir: TempDir,
        cache: SearchCache,
        client: StaticClient,
        output: BufferedWriter,
    }

    impl Fixture {
        fn with_items(items: Vec<crate::client::StacItem>) -> Self {
            let dir = TempDir::new().unwrap();
            let cache = SearchCache::without_backup(dir.path().join("cache"));
            Self {
                dir,
                cache,
                client: StaticClient::new(items),
                output: BufferedWriter::new(),
            }
        }

        fn session<'a>(&'a self, input: &'a ScriptedInput) -> Session<'a> {
            let config = WizardConfig {
                limit: 25,
                out_path: self.dir.path().to_path_buf(),
                ..WizardConfig::default()
            };
            Session::new(
                config,
                self.dir.path().join("config.toml"),
                input,
                &self.output,
                &self.client,
                &self.cache,
            )
        }
    }

    #[test]
    fn test_interactive_enum_search_then_quit() {
        let fixture = Fixture::with_items(fixture_items());
        let input = ScriptedInput::new(vec![
            Answer::check(&["instrument_mode"]),
            Answer::check(&["spotlight"]),
            Answer::select("quit"),
        ]);

        interactive(&mut fixture.session(&input)).unwrap();

        let mut expected = SearchQuery::new();
        expected.insert("instrument_mode", QueryValue::text_list(["spotlight"]));
        expected.insert("limit", 25_i64);
        assert_eq!(fixture.client.queries(), vec![expected]);
        assert!(fixture.output.contents().contains("CAPELLA_C13_SP_GEO_HH_20240101"));

        let menu = input
            .shown()
            .into_iter()
            .find(|shown| shown.prompt == ACTION_PROMPT)
            .unwrap();
        assert!(menu.items.contains(&SAVE.to_string()));
    }

    #[test]
    fn test_interactive_zero_selection_skips_client() {
        let fixture = Fixture::with_items(fixture_items());
        let input = ScriptedInput::new(vec![Answer::check(&[])]);

        let err = interactive(&mut fixture.session(&input)).unwrap_err();
        assert!(err.is_aborted());
        assert_eq!(fixture.client.calls(), 0);
        assert_eq!(input.shown()[0].prompt, FILTER_PROMPT);
    }

    #[test]
    fn test_interactive_empty_result_warns_without_menu() {
        let fixture = Fixture::with_items(Vec::new());
        let input = ScriptedInput::new(vec![
            Answer::check(&["product_type"]),
            Answer::check(&["GEO"]),
        ]);

        interactive(&mut fixture.session(&input)).unwrap();
        assert!(fixture.output.contents().contains("No STAC items matched"));
        assert!(input.shown().iter().all(|shown| shown.prompt != ACTION_PROMPT));
    }

    #[test]
    fn test_from_saved_never_offers_save() {
        let fixture = Fixture::with_items(fixture_items());
        fixture
            .cache
            .update_my_search_results("geo", vec!["CAPELLA_C13_SP_GEO_HH_20240101".to_string()])
            .unwrap();
        let input = ScriptedInput::new(vec![Answer::select("geo"), Answer::select("quit")]);

        from_saved(&mut fixture.session(&input)).unwrap();

        assert_eq!(
            fixture.client.id_requests(),
            vec![vec!["CAPELLA_C13_SP_GEO_HH_20240101".to_string()]]
        );
        let menu = input
            .shown()
            .into_iter()
            .find(|shown| shown.prompt == ACTION_PROMPT)
            .unwrap();
        assert!(!menu.items.contains(&SAVE.to_string()));
        assert!(!fixture.output.contents().contains("CAPELLA_C14_SM_SLC_VV_20240102"));
    }

    #[test]
    fn test_from_saved_exports_under_identifier() {
        let fixture = Fixture::with_items(fixture_items());
        fixture
            .cache
            .update_my_search_results("geo", vec!["CAPELLA_C13_SP_GEO_HH_20240101".to_string()])
            .unwrap();
        let input = ScriptedInput::new(vec![
            Answer::select("geo"),
            Answer::select("export search result as .json"),
            Answer::text(""),
            Answer::Confirm(Some(false)),
            Answer::select("quit"),
        ]);

        from_saved(&mut fixture.session(&input)).unwrap();
        assert!(fixture.dir.path().join("geo.json").exists());
    }

    #[test]
    fn test_from_saved_with_empty_store_aborts() {
        let fixture = Fixture::with_items(fixture_items());
        let input = ScriptedInput::default();

        let err = from_saved(&mut fixture.session(&input)).unwrap_err();
        assert!(err.is_aborted());
        assert_eq!(fixture.client.calls(), 0);
    }

    #[test]
    fn test_from_saved_cancelled_selection_aborts() {
        let fixture = Fixture::with_items(fixture_items());
        fixture
            .cache
            .update_my_search_results("geo", vec!["x".to_string()])
            .unwrap();
        let input = ScriptedInput::new(vec![Answer::Select(None)]);

        let err = from_saved(&mut fixture.session(&input)).unwrap_err();
        assert!(err.is_aborted());
        assert_eq!(fixture.client.calls(), 0);
    }
}
