//! Post-search action menu
//!
//! After a search shows its table the user stays in a menu loop over the
//! same result set until they quit: change the table columns, save the
//! search for reuse (once per session), or export the items as JSON.

use super::Session;
use super::settings::prompt_result_headers;
use crate::client::{StacItem, item_ids};
use crate::output::show_tabulated;
use crate::query::SearchQuery;
use crate::ui::TextValidator;
use crate::{Result, WizardError, require_answer};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

pub const ACTION_PROMPT: &str = "Anything you'd like to do now?";
pub const IDENTIFIER_PROMPT: &str = "Please provide an identifier for your search";
pub const EXPORT_PROMPT: &str =
    "Please provide path and filename where you want to save the stac items .json";
pub const OPEN_PROMPT: &str = "Would you like to open it?";

/// Follow-up actions offered on a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum PostSearchAction {
    #[strum(serialize = "change result table headers")]
    AdjustHeaders,
    #[strum(serialize = "save search query and result for reuse")]
    SaveCurrentSearch,
    #[strum(serialize = "export search result as .json")]
    ExportJson,
    #[strum(serialize = "quit")]
    Quit,
}

impl PostSearchAction {
    /// Menu label
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Actions to offer, in menu order
#[must_use]
pub fn available_actions(save_enabled: bool) -> Vec<PostSearchAction> {
    PostSearchAction::iter()
        .filter(|action| save_enabled || *action != PostSearchAction::SaveCurrentSearch)
        .collect()
}

/// Check that `path` can be written as an export file
///
/// # Errors
///
/// Returns a message if the path is empty, names a directory, or its parent
/// directory does not exist.
pub fn validate_out_path(path: &str) -> std::result::Result<(), String> {
    if path.trim().is_empty() {
        return Err("Please provide a path".to_string());
    }

    let path = Path::new(path);
    if path.is_dir() {
        return Err(format!("{} is a directory", path.display()));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(format!("{} does not exist", parent.display()))
        }
        _ => Ok(()),
    }
}

fn validate_identifier(identifier: &str) -> std::result::Result<(), String> {
    if identifier.trim().is_empty() {
        Err("Identifier cannot be empty".to_string())
    } else {
        Ok(())
    }
}

/// Write items as a JSON array
///
/// # Errors
///
/// Returns `WizardError` if the file cannot be created or written.
pub fn write_items(path: &Path, items: &[StacItem]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, items)?;
    writer.flush()?;
    Ok(())
}

/// Menu loop over one result set
pub struct PostSearchMenu<'m, 'a> {
    session: &'m mut Session<'a>,
    items: &'m [StacItem],
    export_name: String,
    pending_save: Option<&'m SearchQuery>,
}

impl<'m, 'a> PostSearchMenu<'m, 'a> {
    /// Menu without the save action
    ///
    /// `export_name` is the default export file stem.
    pub fn new(session: &'m mut Session<'a>, items: &'m [StacItem], export_name: impl Into<String>) -> Self {
        Self {
            session,
            items,
            export_name: export_name.into(),
            pending_save: None,
        }
    }

    /// Offer saving `query` together with the item ids
    #[must_use]
    pub fn offering_save(mut self, query: &'m SearchQuery) -> Self {
        self.pending_save = Some(query);
        self
    }

    /// Run until the user quits
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Aborted` when a prompt is cancelled, or any
    /// storage or I/O error raised by an action.
    pub fn run(mut self) -> Result<()> {
        loop {
            let actions = available_actions(self.pending_save.is_some());
            let labels: Vec<String> = actions.iter().map(|action| action.label().to_string()).collect();

            let index = require_answer(
                self.session.input.prompt_select(ACTION_PROMPT, &labels, Some(0))?,
                "No action selected",
            )?;
            let action = actions
                .get(index)
                .copied()
                .ok_or_else(|| WizardError::InvalidInput(format!("no action at position {index}")))?;
            debug!("post-search action: {action:?}");

            match action {
                PostSearchAction::AdjustHeaders => self.adjust_headers()?,
                PostSearchAction::SaveCurrentSearch => self.save_current_search()?,
                PostSearchAction::ExportJson => self.export_json()?,
                PostSearchAction::Quit => return Ok(()),
            }
        }
    }

    fn adjust_headers(&mut self) -> Result<()> {
        let headers = prompt_result_headers(self.session.input, &self.session.config.search_headers)?;
        self.session.config.set_search_headers(headers)?;
        show_tabulated(self.session.output, self.items, &self.session.config.search_headers);
        Ok(())
    }

    fn save_current_search(&mut self) -> Result<()> {
        let Some(query) = self.pending_save else {
            return Ok(());
        };

        let default = query.to_string();
        let check: TextValidator<'_> = &validate_identifier;
        let identifier = require_answer(
            self.session.input.prompt_text(IDENTIFIER_PROMPT, Some(default.as_str()), Some(check))?,
            "Please provide an identifier",
        )?;

        let cache = self.session.cache;
        cache.update_my_search_results(&identifier, item_ids(self.items))?;
        cache.update_my_search_queries(&identifier, query)?;
        self.pending_save = None;

        self.session.output.success(&format!(
            "Added '{identifier}' to my-search-results and my-search-queries"
        ));
        self.session.output.info(
            "Issue `stacwiz my-search-results list` or `stacwiz my-search-queries list` \
             in order to list your saved search results or queries.",
        );
        Ok(())
    }

    fn export_json(&mut self) -> Result<()> {
        let default = self.session.config.default_export_path(&self.export_name);
        let default = default.to_string_lossy();
        let check: TextValidator<'_> = &validate_out_path;
        let path = require_answer(
            self.session.input.prompt_text(EXPORT_PROMPT, Some(&*default), Some(check))?,
            "Please provide a path",
        )?;
        let path = PathBuf::from(path);

        write_items(&path, self.items)?;
        self.session.output.success(&format!(
            "Saved {} STAC items to {}",
            self.items.len(),
            path.display()
        ));

        if self.session.input.prompt_confirm(OPEN_PROMPT, true)? == Some(true) {
            self.session.input.open_path(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SearchCache;
    use crate::config::WizardConfig;
    use crate::query::QueryValue;
    use crate::testing::{StaticClient, fixture_items};
    use crate::ui::BufferedWriter;
    use crate::ui::mock::{Answer, ScriptedInput};
    use tempfile::TempDir;

    const QUIT: &str = "quit";
    const SAVE: &str = "save search query and result for reuse";
    const EXPORT: &str = "export search result as .json";
    const HEADERS: &str = "change result table headers";

    struct Fixture {
        dir: TempDir,
        cache: SearchCache,
        client: StaticClient,
        output: BufferedWriter,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let cache = SearchCache::without_backup(dir.path().join("cache"));
            Self {
                dir,
                cache,
                client: StaticClient::new(fixture_items()),
                output: BufferedWriter::new(),
            }
        }

        fn session<'a>(&'a self, input: &'a ScriptedInput) -> Session<'a> {
            let config = WizardConfig {
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

    fn query() -> SearchQuery {
        let mut query = SearchQuery::new();
        query.insert("instrument_mode", QueryValue::text_list(["spotlight"]));
        query.insert("limit", 10_i64);
        query
    }

    fn menu_labels(input: &ScriptedInput) -> Vec<Vec<String>> {
        input
            .shown()
            .into_iter()
            .filter(|shown| shown.prompt == ACTION_PROMPT)
            .map(|shown| shown.items)
            .collect()
    }

    #[test]
    fn test_available_actions() {
        assert_eq!(available_actions(true).len(), 4);
        assert_eq!(
            available_actions(false),
            vec![
                PostSearchAction::AdjustHeaders,
                PostSearchAction::ExportJson,
                PostSearchAction::Quit
            ]
        );
        assert_eq!(PostSearchAction::Quit.label(), QUIT);
    }

    #[test]
    fn test_quit_ends_loop() {
        let fixture = Fixture::new();
        let input = ScriptedInput::new(vec![Answer::select(QUIT)]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, "name").run().unwrap();
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_cancelled_menu_aborts() {
        let fixture = Fixture::new();
        let input = ScriptedInput::new(vec![Answer::Select(None)]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        let err = PostSearchMenu::new(&mut session, &items, "name").run().unwrap_err();
        assert!(err.is_aborted());
    }

    #[test]
    fn test_save_offered_only_once() {
        let fixture = Fixture::new();
        let query = query();
        let input = ScriptedInput::new(vec![
            Answer::select(SAVE),
            Answer::text("my-spotlights"),
            Answer::select(QUIT),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, query.to_string())
            .offering_save(&query)
            .run()
            .unwrap();

        let menus = menu_labels(&input);
        assert_eq!(menus.len(), 2);
        assert!(menus[0].contains(&SAVE.to_string()));
        assert!(!menus[1].contains(&SAVE.to_string()));

        let results = fixture.cache.load_my_search_results().unwrap();
        assert_eq!(
            results["my-spotlights"],
            vec!["CAPELLA_C13_SP_GEO_HH_20240101", "CAPELLA_C14_SM_SLC_VV_20240102"]
        );
        let queries = fixture.cache.load_my_search_queries().unwrap();
        assert_eq!(queries["my-spotlights"], query);
        assert!(fixture.output.contents().contains("stacwiz my-search-results list"));
    }

    #[test]
    fn test_save_identifier_defaults_to_query_string() {
        let fixture = Fixture::new();
        let query = query();
        let input = ScriptedInput::new(vec![
            Answer::select(SAVE),
            Answer::text(""),
            Answer::select(QUIT),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, query.to_string())
            .offering_save(&query)
            .run()
            .unwrap();

        let identifier_prompt = input
            .shown()
            .into_iter()
            .find(|shown| shown.prompt == IDENTIFIER_PROMPT)
            .unwrap();
        assert_eq!(
            identifier_prompt.default.as_deref(),
            Some("instrument_modespotlight-limit10")
        );
        assert!(
            fixture
                .cache
                .load_my_search_results()
                .unwrap()
                .contains_key("instrument_modespotlight-limit10")
        );
    }

    #[test]
    fn test_export_writes_json_array() {
        let fixture = Fixture::new();
        let target = fixture.dir.path().join("export.json");
        let input = ScriptedInput::new(vec![
            Answer::select(EXPORT),
            Answer::text(target.to_str().unwrap()),
            Answer::Confirm(Some(false)),
            Answer::select(QUIT),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, "name").run().unwrap();

        let written: Vec<StacItem> =
            serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(written, items);
        assert!(
            fixture
                .output
                .contents()
                .contains(&format!("Saved 2 STAC items to {}", target.display()))
        );
    }

    #[test]
    fn test_export_confirmed_open_hands_file_over() {
        let fixture = Fixture::new();
        let target = fixture.dir.path().join("open-me.json");
        let input = ScriptedInput::new(vec![
            Answer::select(EXPORT),
            Answer::text(target.to_str().unwrap()),
            Answer::Confirm(Some(true)),
            Answer::select(QUIT),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, "name").run().unwrap();

        assert!(target.exists());
        assert_eq!(input.opened(), vec![target]);
    }

    #[test]
    fn test_export_declined_open_leaves_file_closed() {
        let fixture = Fixture::new();
        let input = ScriptedInput::new(vec![
            Answer::select(EXPORT),
            Answer::text(""),
            Answer::Confirm(Some(false)),
            Answer::select(QUIT),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, "name").run().unwrap();
        assert!(input.opened().is_empty());
    }

    #[test]
    fn test_export_write_failure_is_io_error() {
        let fixture = Fixture::new();
        // passes path validation, but the file name cannot be created
        let target = fixture.dir.path().join("bad\0name.json");
        let input = ScriptedInput::new(vec![
            Answer::select(EXPORT),
            Answer::text(target.to_str().unwrap()),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        let err = PostSearchMenu::new(&mut session, &items, "name").run().unwrap_err();
        assert!(matches!(err, WizardError::IoError(_)));
        assert!(input.opened().is_empty());
        assert!(!fixture.output.contents().contains("Saved 2 STAC items"));
    }

    #[test]
    fn test_write_items_under_a_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = write_items(&blocker.join("out.json"), &fixture_items()).unwrap_err();
        assert!(matches!(err, WizardError::IoError(_)));
    }

    #[test]
    fn test_export_default_path_uses_export_name() {
        let fixture = Fixture::new();
        let input = ScriptedInput::new(vec![
            Answer::select(EXPORT),
            Answer::text(""),
            Answer::Confirm(None),
            Answer::select(QUIT),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, "saved-search").run().unwrap();
        assert!(fixture.dir.path().join("saved-search.json").exists());
    }

    #[test]
    fn test_export_reprompts_on_missing_directory() {
        let fixture = Fixture::new();
        let missing = fixture.dir.path().join("missing").join("out.json");
        let target = fixture.dir.path().join("out.json");
        let input = ScriptedInput::new(vec![
            Answer::select(EXPORT),
            Answer::text(missing.to_str().unwrap()),
            Answer::text(target.to_str().unwrap()),
            Answer::Confirm(Some(false)),
            Answer::select(QUIT),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, "name").run().unwrap();
        assert!(!missing.exists());
        assert!(target.exists());
    }

    #[test]
    fn test_export_without_path_aborts() {
        let fixture = Fixture::new();
        let input = ScriptedInput::new(vec![Answer::select(EXPORT), Answer::Text(None)]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        let err = PostSearchMenu::new(&mut session, &items, "name").run().unwrap_err();
        assert!(err.is_aborted());
    }

    #[test]
    fn test_adjust_headers_updates_session_and_rerenders() {
        let fixture = Fixture::new();
        let input = ScriptedInput::new(vec![
            Answer::select(HEADERS),
            Answer::check(&["id", "collection"]),
            Answer::select(QUIT),
        ]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        PostSearchMenu::new(&mut session, &items, "name").run().unwrap();

        assert_eq!(session.config.search_headers, vec!["id", "collection"]);
        assert!(fixture.output.contents().contains("capella-slc"));
        assert!(!session.config_path.exists());
    }

    #[test]
    fn test_adjust_headers_requires_selection() {
        let fixture = Fixture::new();
        let input = ScriptedInput::new(vec![Answer::select(HEADERS), Answer::check(&[])]);
        let mut session = fixture.session(&input);
        let items = fixture_items();

        let err = PostSearchMenu::new(&mut session, &items, "name").run().unwrap_err();
        assert!(err.is_aborted());
    }

    #[test]
    fn test_validate_out_path() {
        let dir = TempDir::new().unwrap();
        assert!(validate_out_path(dir.path().join("a.json").to_str().unwrap()).is_ok());
        assert!(validate_out_path(dir.path().to_str().unwrap()).is_err());
        assert!(validate_out_path(dir.path().join("nope/a.json").to_str().unwrap()).is_err());
        assert!(validate_out_path("").is_err());
        assert!(validate_out_path("relative.json").is_ok());
    }
}
