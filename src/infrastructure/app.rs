//! Composition root for a single detection run.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use super::config::settings::Config;
use crate::adapter::outbound::fs::sink::DirectorySink;
use crate::adapter::outbound::odds_api::client::OddsApiClient;
use crate::application::detector::ArbitrageDetector;
use crate::application::scheduler::{FetchScheduler, RunSummary};
use crate::application::store::OpportunityStore;
use crate::error::Result;
use crate::port::outbound::odds::OddsSource;
use crate::port::outbound::sink::OutputSink;

/// Main application entry point.
pub struct App;

impl App {
    /// Run one detection pass against the configured provider and output
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider client cannot be built (missing API
    /// key, bad base URL).
    pub async fn run(config: &Config) -> Result<RunSummary> {
        let source: Arc<dyn OddsSource> = Arc::new(OddsApiClient::from_config(&config.odds_api)?);
        let sink: Arc<dyn OutputSink> = Arc::new(DirectorySink::new(&config.output.directory));
        Ok(Self::run_with(config, source, sink).await)
    }

    /// Run one detection pass with explicit collaborators.
    ///
    /// A failed sports listing is logged and treated as an empty list. A
    /// failure to clear prior logs is logged and counted as a store failure;
    /// every fetched sport still resets its own log.
    pub async fn run_with(
        config: &Config,
        source: Arc<dyn OddsSource>,
        sink: Arc<dyn OutputSink>,
    ) -> RunSummary {
        let started = Instant::now();

        let store = Arc::new(OpportunityStore::new(sink));
        let clear_failures = match store.reset_all() {
            Ok(_) => 0,
            Err(err) => {
                error!(error = %err, "Failed to clear previous opportunity logs");
                1
            }
        };

        let sports = match source.list_sports().await {
            Ok(sports) => sports,
            Err(err) => {
                warn!(
                    provider = source.provider_name(),
                    error = %err,
                    "Failed to list sports, nothing to do"
                );
                Vec::new()
            }
        };

        let scheduler = FetchScheduler::new(
            source,
            store,
            ArbitrageDetector::new(config.detector.clone()),
        )
        .with_workers(config.workers())
        .with_fetch_timeout(config.fetch_timeout());

        let mut summary = scheduler.run(sports).await;
        summary.store_failures += clear_failures;
        summary.elapsed = started.elapsed();

        info!(
            elapsed_ms = summary.elapsed.as_millis() as u64,
            sports = summary.sports,
            processed = summary.processed,
            skipped = summary.skipped,
            matches = summary.matches,
            opportunities = summary.opportunities,
            store_failures = summary.store_failures,
            "Detection run complete"
        );

        summary
    }
}
