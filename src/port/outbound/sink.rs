//! Output sink port: the location opportunity documents are written to.
//!
//! A sink stores one opaque document per sport. It knows nothing about the
//! document's shape; the opportunity store owns serialization and the
//! read-modify-write cycle.

use crate::domain::id::SportKey;
use crate::error::Result;

/// Storage for per-sport opportunity documents.
pub trait OutputSink: Send + Sync {
    /// Read the document for a sport, or `None` if it has never been written.
    fn read(&self, sport: &SportKey) -> Result<Option<String>>;

    /// Replace the document for a sport.
    fn write(&self, sport: &SportKey, document: &str) -> Result<()>;

    /// Remove every sport document. Returns the number removed.
    fn clear(&self) -> Result<usize>;

    /// List the sports that currently have a document.
    fn sports(&self) -> Result<Vec<SportKey>>;
}
