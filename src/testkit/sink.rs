//! In-memory [`OutputSink`] for tests.

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::Mutex;

use crate::domain::id::SportKey;
use crate::error::{Error, Result};
use crate::port::outbound::sink::OutputSink;

/// Keeps documents in a map. Writes for selected sports can be made to fail.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<BTreeMap<SportKey, String>>,
    failing: BTreeSet<SportKey>,
    writes: Mutex<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write for `sport` fail with an IO error.
    #[must_use]
    pub fn with_write_failure(mut self, sport: impl Into<SportKey>) -> Self {
        self.failing.insert(sport.into());
        self
    }

    /// Raw document stored for a sport.
    pub fn document(&self, sport: &SportKey) -> Option<String> {
        self.documents.lock().get(sport).cloned()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().is_empty()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }
}

impl OutputSink for MemorySink {
    fn read(&self, sport: &SportKey) -> Result<Option<String>> {
        Ok(self.document(sport))
    }

    fn write(&self, sport: &SportKey, document: &str) -> Result<()> {
        if self.failing.contains(sport) {
            return Err(Error::Io(std::io::Error::other(format!(
                "write refused for {sport}"
            ))));
        }
        self.documents
            .lock()
            .insert(sport.clone(), document.to_string());
        *self.writes.lock() += 1;
        Ok(())
    }

    fn clear(&self) -> Result<usize> {
        let mut documents = self.documents.lock();
        let removed = documents.len();
        documents.clear();
        Ok(removed)
    }

    fn sports(&self) -> Result<Vec<SportKey>> {
        Ok(self.documents.lock().keys().cloned().collect())
    }
}
