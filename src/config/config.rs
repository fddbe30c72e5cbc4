use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::comparator::{parse_sort_spec, SortDirection};
use crate::data::search_filter::SearchMode;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub list: ListConfig,
    pub source: SourceConfig,
    pub logging: LoggingConfig,

    /// Per-screen overrides keyed by screen name ("prescriptions", "users", ...)
    pub screens: HashMap<String, ScreenConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows per page when a screen has no override
    pub default_page_size: usize,

    /// "substring" or "fuzzy"
    pub search_mode: SearchMode,

    /// Idle time before typed search text is applied
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the REST backend
    pub base_url: String,

    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridden by RUST_LOG
    pub level: String,

    /// Number of log lines kept in memory
    pub buffer_size: usize,

    /// Also write log lines to stderr
    pub stderr: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// "key" or "key:asc|desc"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            search_mode: SearchMode::Substring,
            debounce_ms: 300,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            auth_token: None,
            timeout_secs: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            buffer_size: 1000,
            stderr: false,
        }
    }
}

impl Config {
    /// Load config from the default location, writing defaults if it is missing
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        tracing::debug!(target: "config", "loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("hms-listview").join("config.toml"))
    }

    /// Page size for a screen, falling back to the list default
    pub fn page_size_for(&self, screen: &str) -> usize {
        self.screens
            .get(screen)
            .and_then(|s| s.page_size)
            .unwrap_or(self.list.default_page_size)
    }

    /// Parsed default-sort override for a screen, if one is configured
    pub fn default_sort_for(
        &self,
        screen: &str,
    ) -> Result<Option<(String, SortDirection)>, ConfigError> {
        self.screens
            .get(screen)
            .and_then(|s| s.default_sort.as_deref())
            .map(parse_sort_spec)
            .transpose()
    }

    /// Default config file contents with comments
    pub fn create_default_with_comments() -> String {
        r#"# hms-listview configuration
# Location: ~/.config/hms-listview/config.toml (Linux)
#           ~/Library/Application Support/hms-listview/config.toml (macOS)
#           %APPDATA%\hms-listview\config.toml (Windows)

[list]
# Rows per page for screens without their own page_size
default_page_size = 10

# "substring" (case-insensitive) or "fuzzy"
search_mode = "substring"

# Milliseconds of typing inactivity before a search is applied
debounce_ms = 300

[source]
base_url = "http://localhost:8080/api"
# auth_token = "..."
timeout_secs = 30

[logging]
# tracing filter, e.g. "info" or "hms_listview=debug"; RUST_LOG takes precedence
level = "info"
buffer_size = 1000
stderr = false

# Per-screen overrides
[screens.prescriptions]
page_size = 5

[screens.appointments]
page_size = 8
default_sort = "date:desc"

[screens.users]
default_sort = "name:asc"
"#
        .to_string()
    }
}
