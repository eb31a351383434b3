use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn oddsarb(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("oddsarb").expect("binary built");
    cmd.current_dir(dir.path())
        .env_remove("API_KEY")
        .env_remove("THREAD_COUNT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn run_without_api_key_fails_before_any_request() {
    let dir = TempDir::new().unwrap();
    // Unroutable provider: a network attempt would surface as a different error.
    fs::write(
        dir.path().join("oddsarb.toml"),
        "[odds_api]\napi_url = \"http://127.0.0.1:9\"\n",
    )
    .unwrap();

    oddsarb(&dir)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("API_KEY"));

    assert!(!dir.path().join("arbitrage-opportunities").exists());
}

#[test]
fn run_with_unreachable_provider_degrades_and_reports_timing() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("oddsarb.toml"),
        "[odds_api]\napi_url = \"http://127.0.0.1:9\"\n",
    )
    .unwrap();

    oddsarb(&dir)
        .env("API_KEY", "key")
        .arg("run")
        .arg("--workers")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Elapsed"))
        .stdout(predicate::str::contains("No arbitrage opportunities found"));
}

#[test]
fn run_with_invalid_thread_count_fails() {
    let dir = TempDir::new().unwrap();

    oddsarb(&dir)
        .env("API_KEY", "key")
        .env("THREAD_COUNT", "many")
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("THREAD_COUNT"));
}

#[test]
fn report_on_empty_directory_succeeds() {
    let dir = TempDir::new().unwrap();

    oddsarb(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recorded opportunities"));
}

#[test]
fn report_prints_stakes_for_recorded_opportunity() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("arbitrage-opportunities");
    fs::create_dir_all(&out).unwrap();
    fs::write(
        out.join("soccer_epl.json"),
        r#"{
    "arbitrage_opportunities": [
        {
            "match": "Arsenal vs Chelsea",
            "profit_percentage": 2.44,
            "commence_time": "2024-12-07T15:00:00Z",
            "odds": [
                {"bookmaker": "one", "outcome": "Arsenal", "odds": 2.1, "optimal_bank_allocation": 0.487805},
                {"bookmaker": "two", "outcome": "Chelsea", "odds": 2.0, "optimal_bank_allocation": 0.512195}
            ]
        }
    ]
}"#,
    )
    .unwrap();

    oddsarb(&dir)
        .args(["report", "--bank", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arsenal vs Chelsea"))
        .stdout(predicate::str::contains("48.78"))
        .stdout(predicate::str::contains("51.22"));
}

#[test]
fn report_json_output_is_machine_readable() {
    let dir = TempDir::new().unwrap();

    let output = oddsarb(&dir)
        .args(["--json", "report"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["command"], "report");
    assert_eq!(value["opportunities"].as_array().map(Vec::len), Some(0));
}
