use std::fs;

use oddsarb::error::{ConfigError, Error};
use oddsarb::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_temp_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("oddsarb.toml");
    fs::write(&path, contents).expect("write temp config");
    (dir, path)
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.output.directory, "arbitrage-opportunities");
    assert_eq!(config.odds_api.markets, "h2h");
}

#[test]
fn file_values_are_loaded() {
    let (_dir, path) = write_temp_config(
        r#"
[odds_api]
api_url = "http://localhost:8080"
regions = "eu"

[odds_api.http]
retry_max_attempts = 3

[scheduler]
worker_count = 2

[detector]
threshold_percent = 0.5
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.odds_api.api_url, "http://localhost:8080");
    assert_eq!(config.odds_api.regions, "eu");
    assert_eq!(config.odds_api.http.retry_max_attempts, 3);
    assert_eq!(config.workers(), 2);
    assert_eq!(config.detector.threshold_percent, 0.5);
}

#[test]
fn config_without_api_key_is_fatal() {
    let (_dir, path) = write_temp_config("[scheduler]\nworker_count = 2\n");

    let mut config = Config::load(&path).unwrap();
    config.apply_env(no_env).unwrap();

    match config.validate() {
        Err(Error::Config(ConfigError::MissingField { field: "API_KEY" })) => {}
        Err(err) => panic!("Expected missing API_KEY, got {err}"),
        Ok(()) => panic!("Expected missing API_KEY to be rejected"),
    }
}

#[test]
fn environment_overrides_file_worker_count() {
    let (_dir, path) = write_temp_config("[scheduler]\nworker_count = 2\n");

    let mut config = Config::load(&path).unwrap();
    config
        .apply_env(|name| match name {
            "API_KEY" => Some("key".into()),
            "THREAD_COUNT" => Some("6".into()),
            _ => None,
        })
        .unwrap();

    config.validate().unwrap();
    assert_eq!(config.workers(), 6);
}

#[test]
fn zero_worker_count_in_file_is_rejected() {
    let (_dir, path) = write_temp_config("[scheduler]\nworker_count = 0\n");
    let config = Config::load(&path).unwrap();

    assert!(matches!(
        config.validate_settings(),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "scheduler.worker_count",
            ..
        }))
    ));
}

#[test]
fn unreadable_path_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        Config::load(dir.path()),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn invalid_api_url_is_rejected() {
    let (_dir, path) = write_temp_config("[odds_api]\napi_url = \"::nope\"\n");
    let config = Config::load(&path).unwrap();

    assert!(matches!(
        config.validate_settings(),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "odds_api.api_url",
            ..
        }))
    ));
}
