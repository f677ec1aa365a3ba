//! User configuration loaded from `config.toml`

use crate::api::{resolve_base_url, ApiError, DEFAULT_HISTORY_LIMIT};
use crate::theme::ThemeName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

const APP_DIR: &str = "daily-quote";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "daily-quote.log";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Unable to determine config directory")]
    NoConfigDir,
}

/// Client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the client treats as its own origin when picking the API base URL
    pub origin: String,

    /// Explicit API base URL, bypasses origin-based resolution
    pub api_base: Option<String>,

    /// Number of quotes shown in the history view
    pub history_limit: u32,

    /// Timeout for a single API request
    pub request_timeout_secs: u64,

    pub theme: ThemeName,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: "file:///".to_string(),
            api_base: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            request_timeout_secs: 10,
            theme: ThemeName::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Ok(path) => path,
                Err(_) => {
                    tracing::warn!("No config directory available, using default settings");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from_file(&path)
    }

    /// Load from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Directory holding the config and log files
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_file_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(LOG_FILE))
    }

    /// Apply command line overrides on top of the file settings
    pub fn with_overrides(mut self, api_base: Option<String>, origin: Option<String>) -> Self {
        if let Some(api_base) = api_base {
            self.api_base = Some(api_base);
        }
        if let Some(origin) = origin {
            self.origin = origin;
        }
        self
    }

    /// API base URL: the explicit `api_base`, else resolved from `origin`
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        if let Some(api_base) = &self.api_base {
            return parse_url(api_base);
        }

        let origin = parse_url(&self.origin)?;
        Ok(resolve_base_url(&origin)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Render as TOML for the `config` command
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
