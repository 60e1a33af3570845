//! Command implementations
//!
//! Each command group is a module with an `execute` function that takes the
//! parsed CLI subcommand and a `Session` carrying everything the command
//! touches: configuration, prompts, output, the search client and the saved
//! search store.

pub mod actions;
pub mod saved;
pub mod search;
pub mod settings;

use crate::cache::SearchCache;
use crate::cli::Commands;
use crate::client::SearchClient;
use crate::config::WizardConfig;
use crate::ui::{OutputWriter, UserInput};
use crate::Result;
use std::path::PathBuf;

/// State shared by the commands of one run
pub struct Session<'a> {
    /// Configuration for this run; `settings` commands persist it to `config_path`
    pub config: WizardConfig,
    pub config_path: PathBuf,
    pub input: &'a dyn UserInput,
    pub output: &'a dyn OutputWriter,
    pub client: &'a dyn SearchClient,
    pub cache: &'a SearchCache,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(
        config: WizardConfig,
        config_path: PathBuf,
        input: &'a dyn UserInput,
        output: &'a dyn OutputWriter,
        client: &'a dyn SearchClient,
        cache: &'a SearchCache,
    ) -> Self {
        Self {
            config,
            config_path,
            input,
            output,
            client,
            cache,
        }
    }
}

/// Route a parsed command to its implementation
///
/// # Errors
///
/// Returns `WizardError::Aborted` when the user leaves a required prompt
/// empty, or any error raised by the command.
pub fn execute(command: &Commands, session: &mut Session<'_>) -> Result<()> {
    match command {
        Commands::Search { command } => search::execute(command, session),
        Commands::MySearchResults { command } => saved::execute_results(command, session),
        Commands::MySearchQueries { command } => saved::execute_queries(command, session),
        Commands::Settings { command } => settings::execute(command, session),
    }
}
