use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "FAVREEL_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/favreel/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("favreel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicitly named `path`.
    ///
    /// The file must exist; it is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies the base URL overrides, highest precedence last:
    /// the `FAVREEL_API_URL` environment variable, then `flag`.
    ///
    /// Validates the result.
    pub fn with_overrides(
        mut self,
        env_url: Option<String>,
        flag: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = env_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(url) = flag {
            self.api.base_url = url;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reads `FAVREEL_API_URL` once.
    pub fn env_api_url() -> Option<String> {
        std::env::var(API_URL_ENV).ok()
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an http(s) URL
    /// - The page size is greater than zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Base URL '{}' must start with http:// or https://",
                    self.api.base_url
                ),
            });
        }

        if self.api.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "page_size must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
