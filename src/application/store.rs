//! Per-sport opportunity persistence on top of an [`OutputSink`].
//!
//! Each sport owns one document holding every opportunity detected for it
//! during the current run. Appends are read-modify-write of that whole
//! document, so they are serialized per sport.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::domain::{
    id::SportKey,
    opportunity::{ArbitrageOpportunity, SportOpportunityLog},
};
use crate::error::Result;
use crate::port::outbound::sink::OutputSink;

/// Serialize a log with 4-space indentation.
pub fn render_log(log: &SportOpportunityLog) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    log.serialize(&mut serializer)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Opportunity logs keyed by sport.
pub struct OpportunityStore {
    sink: Arc<dyn OutputSink>,
    locks: DashMap<SportKey, Arc<Mutex<()>>>,
}

impl OpportunityStore {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            sink,
            locks: DashMap::new(),
        }
    }

    fn lock_for(&self, sport: &SportKey) -> Arc<Mutex<()>> {
        self.locks.entry(sport.clone()).or_default().value().clone()
    }

    fn read_log(&self, sport: &SportKey) -> Result<Option<SportOpportunityLog>> {
        match self.sink.read(sport)? {
            Some(document) => Ok(Some(serde_json::from_str(&document)?)),
            None => Ok(None),
        }
    }

    fn write_log(&self, sport: &SportKey, log: &SportOpportunityLog) -> Result<()> {
        self.sink.write(sport, &render_log(log)?)
    }

    /// Remove every document left over from a previous run.
    pub fn reset_all(&self) -> Result<usize> {
        let removed = self.sink.clear()?;
        debug!(removed, "Cleared previous opportunity logs");
        Ok(removed)
    }

    /// Truncate a sport's log to an empty document.
    pub fn reset(&self, sport: &SportKey) -> Result<()> {
        let lock = self.lock_for(sport);
        let _guard = lock.lock();
        self.write_log(sport, &SportOpportunityLog::default())
    }

    /// Append one opportunity to a sport's log. Returns the new log length.
    ///
    /// An existing document that fails to parse is left untouched and the
    /// append fails.
    pub fn append(&self, sport: &SportKey, opportunity: ArbitrageOpportunity) -> Result<usize> {
        let lock = self.lock_for(sport);
        let _guard = lock.lock();

        let mut log = self.read_log(sport)?.unwrap_or_default();
        log.push(opportunity);
        self.write_log(sport, &log)?;
        Ok(log.len())
    }

    /// Load a sport's log, or `None` if it was never written.
    pub fn load(&self, sport: &SportKey) -> Result<Option<SportOpportunityLog>> {
        let lock = self.lock_for(sport);
        let _guard = lock.lock();
        self.read_log(sport)
    }

    /// Load every log in the sink, ordered by sport key.
    pub fn load_all(&self) -> Result<Vec<(SportKey, SportOpportunityLog)>> {
        let mut sports = self.sink.sports()?;
        sports.sort();

        let mut logs = Vec::with_capacity(sports.len());
        for sport in sports {
            if let Some(log) = self.load(&sport)? {
                logs.push((sport, log));
            }
        }
        Ok(logs)
    }
}
