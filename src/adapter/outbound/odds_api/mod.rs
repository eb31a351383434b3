//! The Odds API adapter.

pub mod client;
pub mod settings;
