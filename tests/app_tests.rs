mod support;

use std::fs;
use std::sync::Arc;

use oddsarb::adapter::outbound::fs::sink::DirectorySink;
use oddsarb::domain::id::SportKey;
use oddsarb::infrastructure::app::App;
use oddsarb::infrastructure::config::settings::Config;
use oddsarb::testkit::domain::two_way_payload;
use oddsarb::testkit::source::StaticOddsSource;
use support::fixtures::TempOutput;

fn config() -> Config {
    let mut config = Config::default();
    config.scheduler.worker_count = Some(2);
    config
}

#[tokio::test]
async fn run_clears_previous_results_but_keeps_gitkeep() {
    let output = TempOutput::new();
    fs::create_dir_all(output.root()).unwrap();
    fs::write(output.root().join(".gitkeep"), "").unwrap();
    fs::write(output.file("stale_sport"), "{\"arbitrage_opportunities\": []}").unwrap();

    let source = StaticOddsSource::new().with_payload("fresh", two_way_payload("A", "B", 2.1, 2.0));

    let summary = App::run_with(&config(), Arc::new(source), output.sink.clone())
        .await;

    assert_eq!(summary.opportunities, 1);
    assert!(output.root().join(".gitkeep").exists());
    assert!(!output.file("stale_sport").exists());
    assert_eq!(output.sports(), vec!["fresh"]);
}

#[tokio::test]
async fn failed_sport_listing_is_an_empty_run() {
    let output = TempOutput::new();
    let source = StaticOddsSource::new()
        .with_payload("never", two_way_payload("A", "B", 2.1, 2.0))
        .with_list_failure();
    let source = Arc::new(source);

    let summary = App::run_with(&config(), source.clone(), output.sink.clone())
        .await;

    assert_eq!(summary.sports, 0);
    assert_eq!(source.fetches(), 0);
    assert!(output.sports().is_empty());
}

#[tokio::test]
async fn unclearable_output_still_scans_every_sport() {
    let output = TempOutput::new();
    let blocker = output.base().join("not-a-directory");
    fs::write(&blocker, "").unwrap();
    let sink = Arc::new(DirectorySink::new(blocker.clone()));
    let source = Arc::new(
        StaticOddsSource::new()
            .with_payload("tennis", two_way_payload("A", "B", 2.1, 2.0))
            .with_payload("golf", two_way_payload("C", "D", 1.5, 1.5)),
    );

    let summary = App::run_with(&config(), source.clone(), sink).await;

    assert_eq!(source.fetches(), 2);
    assert_eq!(summary.processed, 2);
    // Clear, both resets and the tennis append.
    assert_eq!(summary.store_failures, 4);
    assert_eq!(summary.opportunities, 0);
}

#[tokio::test]
async fn listed_sport_without_odds_is_skipped() {
    let output = TempOutput::new();
    let source = StaticOddsSource::new()
        .with_payload("tennis", two_way_payload("A", "B", 2.1, 2.0))
        .with_sports(vec![SportKey::from("tennis"), SportKey::from("curling")]);

    let summary = App::run_with(&config(), Arc::new(source), output.sink.clone()).await;

    assert_eq!(summary.sports, 2);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(output.sports(), vec!["tennis"]);
}

#[tokio::test]
async fn repeated_runs_do_not_accumulate() {
    let output = TempOutput::new();

    for _ in 0..2 {
        let source =
            StaticOddsSource::new().with_payload("tennis", two_way_payload("A", "B", 2.1, 2.0));
        App::run_with(&config(), Arc::new(source), output.sink.clone()).await;
    }

    assert_eq!(output.log("tennis").len(), 1);
}

#[tokio::test]
async fn run_without_api_key_fails_before_fetching() {
    let output = TempOutput::new();
    let mut config = config();
    config.output.directory = output.root().to_string_lossy().into_owned();
    config.odds_api.api_url = "http://127.0.0.1:9".into();

    let result = App::run(&config).await;

    assert!(result.is_err());
    assert!(!output.root().exists());
}
