//! The Odds API client configuration.

use serde::Deserialize;

/// The Odds API connection settings.
///
/// The API key is never read from the config file; it is loaded from the
/// `API_KEY` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key, populated from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Comma-separated bookmaker regions to quote (e.g. `uk,us`).
    #[serde(default = "default_regions")]
    pub regions: String,
    /// Comma-separated markets to request.
    #[serde(default = "default_markets")]
    pub markets: String,
    /// HTTP client settings.
    #[serde(default)]
    pub http: OddsApiHttpConfig,
}

fn default_api_url() -> String {
    "https://api.the-odds-api.com".into()
}

fn default_regions() -> String {
    "uk,us".into()
}

fn default_markets() -> String {
    "h2h".into()
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            regions: default_regions(),
            markets: default_markets(),
            http: OddsApiHttpConfig::default(),
        }
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum number of attempts for transient failures (1 = no retry).
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    20_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    5000
}

const fn default_http_retry_max_attempts() -> u32 {
    1
}

const fn default_http_retry_backoff_ms() -> u64 {
    500
}

impl Default for OddsApiHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}
