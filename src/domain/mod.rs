//! Provider-agnostic domain types.
//!
//! - [`id`] - Sport and match identifiers
//! - [`payload`] - Raw odds payload records
//! - [`book`] - Best-price quote book per match and outcome
//! - [`opportunity`] - Detected arbitrage opportunities and their per-sport log
//! - [`stake`] - Stake plans for a given bank size

pub mod book;
pub mod id;
pub mod opportunity;
pub mod payload;
pub mod stake;
