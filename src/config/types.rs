use serde::{Deserialize, Serialize};

use crate::api::Mode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub form: FormDefaults,
}

/// Where the summarization endpoint lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the server (scheme + host + port); `/summarize` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Total request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

/// Initial values of the form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// Mode selected at startup (default: abstractive).
    #[serde(default)]
    pub mode: Mode,
    /// Initial content of the length field (default: 3).
    #[serde(default = "default_length")]
    pub length: u32,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_length() -> u32 {
    3
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            length: default_length(),
        }
    }
}
