//! stacwiz CLI application entry point
//!
//! Interactive front-end for STAC item search: build a query through
//! prompts, look at the results as a table, then change columns, save the
//! search for reuse or export the items as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Build a search interactively (default command)
//! stacwiz
//! stacwiz search interactive
//!
//! # Re-run a saved search
//! stacwiz search from-saved
//!
//! # Inspect or delete saved searches
//! stacwiz my-search-results list
//! stacwiz my-search-queries delete
//!
//! # Change defaults
//! stacwiz settings limit 100
//! stacwiz settings result-headers
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/stacwiz/config.toml` on Linux) and created with defaults on
//! first run. `STACWIZ_*` environment variables override them, e.g.
//! `STACWIZ_API__TOKEN`.

use colored::Colorize;
use log::debug;
use stacwiz::{
    Result, WizardError,
    cache::{SearchCache, default_cache_dir},
    cli::Cli,
    client::StacClient,
    commands::{self, Session},
    config::WizardConfig,
    logging,
    ui::{DialoguerInput, StdoutWriter},
};

fn run(cli: &Cli) -> Result<()> {
    let config_path = WizardConfig::config_path()?;
    let config = WizardConfig::load_from(&config_path)?;
    debug!("loaded config from {}", config_path.display());

    let client = StacClient::new(&config.api)?;
    let cache = SearchCache::new(default_cache_dir()?);
    let input = DialoguerInput::new();
    let output = StdoutWriter::new();

    let mut session = Session::new(config, config_path, &input, &output, &client, &cache);
    commands::execute(&cli.get_command(), &mut session)
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init_logger(cli.verbose);

    match run(&cli) {
        Err(WizardError::Aborted(message)) => {
            eprintln!("{}", message.yellow());
            eprintln!("bye");
            Ok(())
        }
        other => other,
    }
}
