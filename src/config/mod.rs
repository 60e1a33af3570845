//! Configuration module for stacwiz
//!
//! Manages the session settings (default result limit, export directory,
//! result table headers), the search API endpoint and the filter catalog.
//! Configuration is stored in the user's config directory and can be
//! overridden per run with `STACWIZ_*` environment variables, using `__` to
//! reach nested keys (`STACWIZ_API__TOKEN`).

use crate::output::table::DEFAULT_HEADERS;
use crate::query::FilterCatalog;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Search API connection settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the catalog API; searches go to `<base_url>/catalog/search`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Page size used when the query does not set `limit`
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Directory proposed for JSON exports
    #[serde(default = "default_out_path")]
    pub out_path: PathBuf,

    /// Columns of the result table
    #[serde(default = "default_search_headers")]
    pub search_headers: Vec<String>,

    /// Search API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Filters offered by the interactive search
    #[serde(default)]
    pub search_filters: FilterCatalog,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            out_path: default_out_path(),
            search_headers: default_search_headers(),
            api: ApiConfig::default(),
            search_filters: FilterCatalog::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.capellaspace.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_limit() -> u32 {
    1000
}

fn default_out_path() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_search_headers() -> Vec<String> {
    DEFAULT_HEADERS.iter().map(ToString::to_string).collect()
}

impl WizardConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("stacwiz").join("config.toml"))
    }

    /// Load configuration from `path`, creating a default file if it doesn't exist
    ///
    /// Environment variables prefixed with `STACWIZ_` override file values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }

        Self::builder(path)
            .add_source(
                Environment::with_prefix("STACWIZ")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load only what is stored in the file at `path`, without environment overrides
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::builder(path).build()?.try_deserialize()
    }

    /// Apply `change` to the stored file contents at `path` and write them back
    ///
    /// Values that only come from `STACWIZ_*` variables never reach the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or written, or if
    /// `change` rejects the update.
    pub fn update_file<F>(path: &Path, change: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Self) -> Result<(), ConfigError>,
    {
        let mut stored = Self::load_file(path)?;
        change(&mut stored)?;
        stored.save_to(path)
    }

    fn builder(path: &Path) -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from(path).format(FileFormat::Toml))
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the default result limit
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the limit is zero.
    pub fn set_limit(&mut self, limit: u32) -> Result<(), ConfigError> {
        if limit == 0 {
            return Err(ConfigError::Message("limit must be greater than zero".to_string()));
        }
        self.limit = limit;
        Ok(())
    }

    /// Set the result table headers
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no header is given.
    pub fn set_search_headers(&mut self, headers: Vec<String>) -> Result<(), ConfigError> {
        if headers.is_empty() {
            return Err(ConfigError::Message("at least one result header is required".to_string()));
        }
        self.search_headers = headers;
        Ok(())
    }

    /// Default export path for a result set named `name`
    ///
    /// `<out_path>/<name>.json`
    #[must_use]
    pub fn default_export_path(&self, name: &str) -> PathBuf {
        self.out_path.join(format!("{name}.json"))
    }
}
