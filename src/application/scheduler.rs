//! Fan-out of one fetch → index → detect → store task per sport.
//!
//! A fixed number of workers drain a shared queue of sports. Each sport is
//! processed in its own task so a panic or failure stays confined to that
//! sport. [`FetchScheduler::run`] returns once every sport has been handled.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use super::detector::ArbitrageDetector;
use super::indexer::OddsIndexer;
use super::store::OpportunityStore;
use crate::domain::{id::SportKey, payload::OddsPayload};
use crate::error::TransportError;
use crate::port::outbound::odds::OddsSource;

/// Default upper bound on a single odds fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Counters describing one scheduler run.
///
/// Only used for reporting; all results are persisted through the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Sports submitted to the run.
    pub sports: usize,
    /// Sports whose odds were fetched and analysed.
    pub processed: usize,
    /// Sports skipped because their fetch failed.
    pub skipped: usize,
    /// Matches indexed across all processed sports.
    pub matches: usize,
    /// Opportunities persisted.
    pub opportunities: usize,
    /// Store writes that failed.
    pub store_failures: usize,
    /// Wall-clock time of the whole run, set by the caller.
    pub elapsed: Duration,
}

impl RunSummary {
    fn merge(&mut self, other: &Self) {
        self.processed += other.processed;
        self.skipped += other.skipped;
        self.matches += other.matches;
        self.opportunities += other.opportunities;
        self.store_failures += other.store_failures;
    }

    fn skipped_one() -> Self {
        Self {
            skipped: 1,
            ..Self::default()
        }
    }
}

/// Per-sport processing shared by all workers.
struct SportPipeline {
    source: Arc<dyn OddsSource>,
    store: Arc<OpportunityStore>,
    indexer: OddsIndexer,
    detector: ArbitrageDetector,
    fetch_timeout: Duration,
}

impl SportPipeline {
    async fn fetch(&self, sport: &SportKey) -> Result<OddsPayload, TransportError> {
        match timeout(self.fetch_timeout, self.source.fetch_odds(sport)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout {
                secs: self.fetch_timeout.as_secs(),
            }),
        }
    }

    async fn process(&self, sport: &SportKey) -> RunSummary {
        let payload = match self.fetch(sport).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(sport = %sport, error = %err, "Failed to fetch odds, skipping sport");
                return RunSummary::skipped_one();
            }
        };

        let mut summary = RunSummary {
            processed: 1,
            ..RunSummary::default()
        };

        if let Err(err) = self.store.reset(sport) {
            error!(sport = %sport, error = %err, "Failed to reset opportunity log");
            summary.store_failures += 1;
        }

        let book = self.indexer.index(&payload);
        summary.matches = book.len();
        debug!(sport = %sport, events = payload.len(), matches = book.len(), "Indexed odds");

        for (fixture, odds) in &book {
            if odds.is_empty() {
                continue;
            }
            let Some(opportunity) = self.detector.detect(fixture, odds) else {
                continue;
            };

            info!(
                sport = %sport,
                fixture = %fixture,
                profit = opportunity.profit_percentage,
                legs = opportunity.legs.len(),
                "Arbitrage opportunity detected"
            );

            match self.store.append(sport, opportunity) {
                Ok(_) => summary.opportunities += 1,
                Err(err) => {
                    error!(
                        sport = %sport,
                        fixture = %fixture,
                        error = %err,
                        "Failed to persist opportunity"
                    );
                    summary.store_failures += 1;
                }
            }
        }

        summary
    }
}

/// Runs the per-sport pipeline across a fixed-size worker pool.
pub struct FetchScheduler {
    source: Arc<dyn OddsSource>,
    store: Arc<OpportunityStore>,
    detector: ArbitrageDetector,
    worker_count: usize,
    fetch_timeout: Duration,
}

impl FetchScheduler {
    pub fn new(
        source: Arc<dyn OddsSource>,
        store: Arc<OpportunityStore>,
        detector: ArbitrageDetector,
    ) -> Self {
        Self {
            source,
            store,
            detector,
            worker_count: num_cpus::get(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Set the number of workers. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count.max(1);
        self
    }

    /// Set the upper bound on each odds fetch.
    #[must_use]
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Process every sport and wait for all of them to finish.
    pub async fn run(&self, sports: Vec<SportKey>) -> RunSummary {
        let mut summary = RunSummary {
            sports: sports.len(),
            ..RunSummary::default()
        };
        if sports.is_empty() {
            return summary;
        }

        let workers = self.worker_count.min(sports.len());
        let queue = Arc::new(Mutex::new(VecDeque::from(sports)));
        let pipeline = Arc::new(SportPipeline {
            source: Arc::clone(&self.source),
            store: Arc::clone(&self.store),
            indexer: OddsIndexer::new(),
            detector: self.detector.clone(),
            fetch_timeout: self.fetch_timeout,
        });
        info!(
            sports = summary.sports,
            workers,
            threshold = self.detector.threshold_percent(),
            provider = self.source.provider_name(),
            "Starting odds scan"
        );

        let mut pool = JoinSet::new();
        for worker in 0..workers {
            let queue = Arc::clone(&queue);
            pool.spawn(drain(worker, queue, Arc::clone(&pipeline)));
        }

        while let Some(joined) = pool.join_next().await {
            match joined {
                Ok(partial) => summary.merge(&partial),
                Err(err) => error!(error = %err, "Worker task failed"),
            }
        }

        summary
    }
}

/// Worker loop: pop sports until the queue is empty.
async fn drain(
    worker: usize,
    queue: Arc<Mutex<VecDeque<SportKey>>>,
    pipeline: Arc<SportPipeline>,
) -> RunSummary {
    let mut summary = RunSummary::default();

    loop {
        let next = queue.lock().pop_front();
        let Some(sport) = next else {
            break;
        };
        debug!(worker, sport = %sport, "Worker picked sport");

        let task_pipeline = Arc::clone(&pipeline);
        let task_sport = sport.clone();
        let handle = tokio::spawn(async move { task_pipeline.process(&task_sport).await });

        match handle.await {
            Ok(partial) => summary.merge(&partial),
            Err(err) => {
                error!(worker, sport = %sport, error = %err, "Sport task failed");
                summary.merge(&RunSummary::skipped_one());
            }
        }
    }

    summary
}
