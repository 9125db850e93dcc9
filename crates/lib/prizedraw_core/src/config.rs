//! Client configuration.

use std::path::PathBuf;

/// Configuration for the webapp client.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the raffle backend (e.g. "http://127.0.0.1:3100").
    pub api_base_url: String,
    /// Directory for persistent client state (the stored token pair).
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create a config with an explicit base URL and data directory.
    pub fn new(api_base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.into()),
            data_dir: data_dir.into(),
        }
    }

    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable             | Default                            |
    /// |----------------------|------------------------------------|
    /// | `PRIZEDRAW_API_URL`  | `http://127.0.0.1:3100`            |
    /// | `PRIZEDRAW_DATA_DIR` | platform data dir + `/prizedraw`   |
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("PRIZEDRAW_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3100".into());
        let data_dir = std::env::var("PRIZEDRAW_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());
        Self::new(api_base_url, data_dir)
    }
}

/// Trim trailing slashes so endpoint paths can be appended uniformly.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Default directory for stored tokens.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prizedraw")
}
