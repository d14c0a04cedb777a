use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the entries backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without the `/entries` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Entries requested per page (default: 20).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Load the next page when the selection nears the end of the table.
    #[serde(default = "default_autoload")]
    pub autoload: bool,
    /// How many rows before the end autoload kicks in (default: 3).
    #[serde(default = "default_autoload_margin")]
    pub autoload_margin: usize,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    crate::api::DEFAULT_PAGE_SIZE
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_autoload() -> bool {
    true
}

fn default_autoload_margin() -> usize {
    3
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            autoload: default_autoload(),
            autoload_margin: default_autoload_margin(),
        }
    }
}
