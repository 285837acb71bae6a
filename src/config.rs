//! Application configuration.
//!
//! Configuration is stored in `config.yaml` inside the platform config
//! directory (for example `~/.config/issuedesk/config.yaml` on Linux) and
//! includes:
//! - The API base URL
//! - Request and connect timeouts
//! - Whether screens are cleared on navigation
//!
//! `ISSUEDESK_API_URL` and `ISSUEDESK_TIMEOUT` override the file.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{IssueDeskError, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://swe.mldljyh.tech/api";

const API_URL_ENV: &str = "ISSUEDESK_API_URL";
const TIMEOUT_ENV: &str = "ISSUEDESK_TIMEOUT";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL every API path is appended to
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Total request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Clear the terminal when moving between screens (default: true)
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_clear_screen() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("tech", "mldljyh", "issuedesk")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from the default location, then apply environment
    /// overrides.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };
        config.with_env_overrides()
    }

    /// Load configuration from file, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            IssueDeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ISSUEDESK_API_URL` and `ISSUEDESK_TIMEOUT` when set.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            self.api_base_url = url;
        }

        if let Ok(timeout) = env::var(TIMEOUT_ENV)
            && !timeout.is_empty()
        {
            self.request_timeout = timeout.trim().parse().map_err(|_| {
                IssueDeskError::Config(format!(
                    "{TIMEOUT_ENV} must be a whole number of seconds, got '{timeout}'"
                ))
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api_base_url).map_err(|e| {
            IssueDeskError::Config(format!(
                "api_base_url '{}' is not a valid URL: {}",
                self.api_base_url, e
            ))
        })?;
        if self.request_timeout == 0 {
            return Err(IssueDeskError::Config(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the total request timeout duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Get the connect timeout duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }
}
