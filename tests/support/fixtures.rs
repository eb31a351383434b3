use std::path::{Path, PathBuf};
use std::sync::Arc;

use oddsarb::adapter::outbound::fs::sink::DirectorySink;
use oddsarb::application::store::OpportunityStore;
use oddsarb::domain::id::SportKey;
use oddsarb::domain::opportunity::SportOpportunityLog;
use oddsarb::port::outbound::sink::OutputSink;
use tempfile::TempDir;

/// A temporary output directory with a store writing into it.
pub struct TempOutput {
    dir: TempDir,
    pub sink: Arc<DirectorySink>,
    pub store: Arc<OpportunityStore>,
}

impl TempOutput {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let sink = Arc::new(DirectorySink::new(dir.path().join("arbitrage-opportunities")));
        let store = Arc::new(OpportunityStore::new(sink.clone()));
        Self { dir, sink, store }
    }

    pub fn root(&self) -> &Path {
        self.sink.root()
    }

    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, sport: &str) -> PathBuf {
        self.root().join(format!("{sport}.json"))
    }

    /// Parse the document written for `sport`.
    pub fn log(&self, sport: &str) -> SportOpportunityLog {
        let raw = std::fs::read_to_string(self.file(sport))
            .unwrap_or_else(|e| panic!("read log for {sport}: {e}"));
        serde_json::from_str(&raw).unwrap_or_else(|e| panic!("parse log for {sport}: {e}"))
    }

    /// Sports with a document on disk, sorted.
    pub fn sports(&self) -> Vec<String> {
        self.sink
            .sports()
            .expect("list sports")
            .iter()
            .map(SportKey::to_string)
            .collect()
    }
}
