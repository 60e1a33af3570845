//! Settings commands
//!
//! Show the current configuration or change the default result limit, the
//! export directory and the result table headers. Changes are written back
//! to the config file.

use super::Session;
use crate::cli::SettingsCommands;
use crate::config::WizardConfig;
use crate::output::AVAILABLE_HEADERS;
use crate::query::{LIMIT_KEY, validator_for};
use crate::ui::{TextValidator, UserInput};
use crate::{Result, WizardError, require_answer, require_selection};
use config::ConfigError;
use log::debug;
use std::path::{Path, PathBuf};

pub const HEADERS_PROMPT: &str = "Select the columns of the search result table";
pub const LIMIT_PROMPT: &str = "Default maximum number of search results:";
pub const OUTPUT_PROMPT: &str = "Default directory for exported search results:";

/// Execute a settings command
///
/// # Errors
///
/// Returns `WizardError` if a prompt is cancelled, a value is invalid or the
/// config file cannot be written.
pub fn execute(command: &SettingsCommands, session: &mut Session<'_>) -> Result<()> {
    match command {
        SettingsCommands::Show => {
            show(session);
            Ok(())
        }
        SettingsCommands::Limit { value } => set_limit(session, *value),
        SettingsCommands::Output { path } => set_output(session, path.as_deref()),
        SettingsCommands::ResultHeaders => set_result_headers(session),
    }
}

/// Multi-select of result table headers with the current ones checked
///
/// Headers in `current` that are not among the known columns stay
/// selectable.
///
/// # Errors
///
/// Returns `WizardError::Aborted` if nothing is selected.
pub fn prompt_result_headers(input: &dyn UserInput, current: &[String]) -> Result<Vec<String>> {
    let mut items: Vec<String> = AVAILABLE_HEADERS.iter().map(ToString::to_string).collect();
    for header in current {
        if !items.contains(header) {
            items.push(header.clone());
        }
    }

    let checked: Vec<usize> = current
        .iter()
        .filter_map(|header| items.iter().position(|item| item == header))
        .collect();

    let picked = require_selection(
        input.prompt_multi_select(HEADERS_PROMPT, &items, &checked)?,
        "Please select at least one result header",
    )?;

    Ok(picked
        .into_iter()
        .filter_map(|index| items.get(index).cloned())
        .collect())
}

fn show(session: &Session<'_>) {
    let config = &session.config;
    let output = session.output;

    output.info(&format!("config file: {}", session.config_path.display()));
    output.write(&format!("limit: {}", config.limit));
    output.write(&format!("out_path: {}", config.out_path.display()));
    output.write(&format!("search_headers: {}", config.search_headers.join(", ")));
    output.write(&format!("api.base_url: {}", config.api.base_url));
    output.write(&format!(
        "api.token: {}",
        if config.api.token.is_some() { "set" } else { "not set" }
    ));
    output.write(&format!("api.timeout_secs: {}", config.api.timeout_secs));
}

/// Apply `change` to the session and to the stored config file
///
/// The file is re-read without environment overrides so that values given
/// only through `STACWIZ_*` variables are not written to disk.
fn persist<F>(session: &mut Session<'_>, what: &str, change: F) -> Result<()>
where
    F: Fn(&mut WizardConfig) -> std::result::Result<(), ConfigError>,
{
    change(&mut session.config)?;
    WizardConfig::update_file(&session.config_path, change)?;
    debug!("saved {what} to {}", session.config_path.display());
    session.output.success(&format!("Updated {what}"));
    Ok(())
}

fn set_limit(session: &mut Session<'_>, value: Option<u32>) -> Result<()> {
    let limit = if let Some(limit) = value {
        limit
    } else {
        let current = session.config.limit.to_string();
        let validate = validator_for(LIMIT_KEY);
        let check: TextValidator<'_> = &validate;
        let text = require_answer(
            session.input.prompt_text(LIMIT_PROMPT, Some(current.as_str()), Some(check))?,
            "Please provide a limit",
        )?;
        text.trim()
            .parse()
            .map_err(|_| WizardError::InvalidInput(format!("'{text}' is not a valid limit")))?
    };

    persist(session, "limit", |config| config.set_limit(limit))
}

fn validate_directory(path: &str) -> std::result::Result<(), String> {
    if Path::new(path).is_dir() {
        Ok(())
    } else {
        Err(format!("{path} is not a directory"))
    }
}

fn set_output(session: &mut Session<'_>, path: Option<&Path>) -> Result<()> {
    let path = if let Some(path) = path {
        validate_directory(&path.to_string_lossy()).map_err(WizardError::InvalidInput)?;
        path.to_path_buf()
    } else {
        let current = session.config.out_path.to_string_lossy().into_owned();
        let check: TextValidator<'_> = &validate_directory;
        let text = require_answer(
            session.input.prompt_text(OUTPUT_PROMPT, Some(current.as_str()), Some(check))?,
            "Please provide a directory",
        )?;
        PathBuf::from(text)
    };

    persist(session, "out_path", |config| {
        config.out_path.clone_from(&path);
        Ok(())
    })
}

fn set_result_headers(session: &mut Session<'_>) -> Result<()> {
    let headers = prompt_result_headers(session.input, &session.config.search_headers)?;
    persist(session, "search_headers", |config| {
        config.set_search_headers(headers.clone())
    })
}
