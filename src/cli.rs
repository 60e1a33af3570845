//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for stacwiz using the `clap` crate.
//!
//! # Commands
//!
//! - **search interactive**: build a query through prompts (default)
//! - **search from-saved**: show the items of a saved search
//! - **my-search-results** / **my-search-queries**: list or delete saved searches
//! - **settings**: show or change the default limit, export directory and
//!   result table headers
//!
//! A global `--verbose` flag turns on debug logging.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use stacwiz::cli::{Cli, Commands, SearchCommands};
//!
//! let cli = Cli::parse_from(["stacwiz", "search", "from-saved"]);
//! assert!(matches!(
//!     cli.get_command(),
//!     Commands::Search { command: SearchCommands::FromSaved }
//! ));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "stacwiz")]
#[command(about = "Interactive STAC search wizard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Search STAC items (default: interactive)
    #[command(visible_alias = "s")]
    Search {
        #[command(subcommand)]
        command: SearchCommands,
    },

    /// Manage saved search results
    #[command(name = "my-search-results")]
    MySearchResults {
        #[command(subcommand)]
        command: SavedCommands,
    },

    /// Manage saved search queries
    #[command(name = "my-search-queries")]
    MySearchQueries {
        #[command(subcommand)]
        command: SavedCommands,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

/// Search subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCommands {
    /// Interactive search with prompts
    #[command(visible_alias = "i")]
    Interactive,

    /// Select and show STAC items of a saved search
    FromSaved,
}

/// Subcommands shared by the saved search stores
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedCommands {
    /// List saved entries
    #[command(visible_alias = "ls")]
    List,

    /// Select saved entries to delete
    #[command(visible_alias = "rm")]
    Delete,
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Set the default maximum number of search results
    Limit {
        /// New limit (prompted when omitted)
        #[arg(value_name = "LIMIT", value_parser = clap::value_parser!(u32).range(1..))]
        value: Option<u32>,
    },

    /// Set the default directory for exported search results
    Output {
        /// Existing directory (prompted when omitted)
        #[arg(value_name = "DIR")]
        path: Option<PathBuf>,
    },

    /// Select the columns of the search result table
    ResultHeaders,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to `search interactive` if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Search {
            command: SearchCommands::Interactive,
        })
    }
}
