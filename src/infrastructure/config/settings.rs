//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is read from an optional TOML file, then overridden by the
//! environment (`API_KEY`, `THREAD_COUNT`) and finally by CLI flags.
//!
//! # Example
//!
//! ```no_run
//! use oddsarb::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::load_or_default("oddsarb.toml")?;
//!     config.apply_env(|name| std::env::var(name).ok())?;
//!     config.validate()?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::adapter::outbound::odds_api::settings::OddsApiConfig;
use crate::application::detector::DetectorConfig;
use crate::error::{ConfigError, Result};

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "API_KEY";
/// Environment variable overriding the worker count.
pub const THREAD_COUNT_VAR: &str = "THREAD_COUNT";

/// Worker pool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Number of concurrent sport workers. Defaults to available parallelism.
    #[serde(default)]
    pub worker_count: Option<usize>,
    /// Upper bound on a single odds fetch, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

const fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            worker_count: None,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// Where opportunity logs are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

fn default_output_directory() -> String {
    "arbitrage-opportunities".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

/// Main application configuration.
///
/// Every section is optional in the TOML file. The API key is only ever
/// taken from the environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Odds provider connection settings.
    #[serde(default)]
    pub odds_api: OddsApiConfig,

    /// Worker pool settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Detection threshold.
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Output directory.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// No environment overrides and no validation are applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `API_KEY` and `THREAD_COUNT` using `lookup` to read variables.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `THREAD_COUNT` is not a positive integer.
    #[allow(clippy::result_large_err)]
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = present(API_KEY_VAR) {
            self.odds_api.api_key = Some(key.trim().to_string());
        }

        if let Some(raw) = present(THREAD_COUNT_VAR) {
            let count = raw
                .trim()
                .parse::<usize>()
                .map_err(|err| ConfigError::InvalidValue {
                    field: THREAD_COUNT_VAR,
                    reason: err.to_string(),
                })?;
            if count == 0 {
                return Err(ConfigError::InvalidValue {
                    field: THREAD_COUNT_VAR,
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
            self.scheduler.worker_count = Some(count);
        }

        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that the API key is present and values are within acceptable
    /// ranges.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or missing field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        self.validate_settings()?;
        if self
            .odds_api
            .api_key
            .as_deref()
            .map_or(true, |key| key.trim().is_empty())
        {
            return Err(ConfigError::MissingField { field: API_KEY_VAR }.into());
        }
        Ok(())
    }

    /// Validate everything except the API key.
    ///
    /// Used by commands that never talk to the provider.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    #[allow(clippy::result_large_err)]
    pub fn validate_settings(&self) -> Result<()> {
        if self.scheduler.worker_count == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "scheduler.worker_count",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.scheduler.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scheduler.fetch_timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !self.detector.threshold_percent.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "detector.threshold_percent",
                reason: "must be a finite number".to_string(),
            }
            .into());
        }
        if self.output.directory.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "output.directory",
            }
            .into());
        }
        if let Err(err) = Url::parse(&self.odds_api.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "odds_api.api_url",
                reason: err.to_string(),
            }
            .into());
        }
        if self.odds_api.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "odds_api.http.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Number of sport workers: configured value or available parallelism.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.scheduler
            .worker_count
            .unwrap_or_else(num_cpus::get)
            .max(1)
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.scheduler.fetch_timeout_secs)
    }

    /// Initialize the global tracing subscriber.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
