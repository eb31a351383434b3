//! oddsarb - sports-betting arbitrage detection.
//!
//! Fetches bookmaker odds for every sport a provider offers, keeps the best
//! price per outcome of each match, and records the matches whose implied
//! probability sums to less than 100%.
//!
//! # Architecture
//!
//! - [`domain`] - Payloads, best-odds maps, opportunities and stake plans
//! - [`port`] - Traits for the odds provider and the output location
//! - [`application`] - Indexer, detector, store, scheduler and report
//! - [`adapter`] - The Odds API client, output directory and CLI
//! - [`infrastructure`] - Configuration, logging and the composition root
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use oddsarb::application::detector::{ArbitrageDetector, DetectorConfig};
//! use oddsarb::application::indexer::OddsIndexer;
//! use oddsarb::domain::payload::OddsPayload;
//!
//! let payload: OddsPayload = serde_json::from_str("[]").unwrap();
//! let best = OddsIndexer::new().index(&payload);
//! let detector = ArbitrageDetector::new(DetectorConfig::default());
//! assert!(best.iter().all(|(key, odds)| detector.detect(key, odds).is_none()));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
