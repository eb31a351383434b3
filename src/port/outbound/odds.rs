//! Odds provider port.
//!
//! The scheduler only ever sees these two calls. Failures are returned as
//! [`TransportError`] values so the caller decides to skip a sport rather
//! than abort the run.

use async_trait::async_trait;

use crate::domain::{id::SportKey, payload::OddsPayload};
use crate::error::TransportError;

/// Source of sports and per-sport odds payloads.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// List the sports tracked by the provider.
    ///
    /// A failure here means "nothing to process this run", not a fatal error.
    async fn list_sports(&self) -> Result<Vec<SportKey>, TransportError>;

    /// Fetch the raw odds payload for one sport.
    async fn fetch_odds(&self, sport: &SportKey) -> Result<OddsPayload, TransportError>;

    /// Get the provider name for logging.
    fn provider_name(&self) -> &'static str;
}
