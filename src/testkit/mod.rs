//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - Scripted odds source: `StaticOddsSource`.
//! - [`sink`] - In-memory output sink: `MemorySink`.
//! - [`domain`] - Builders for payloads and opportunities.

pub mod domain;
pub mod sink;
pub mod source;
