//! Outbound adapters (driven side).

pub mod fs;
pub mod odds_api;
