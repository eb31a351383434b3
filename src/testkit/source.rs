//! Scripted [`OddsSource`] for tests.
//!
//! Each sport is scripted to return a payload, fail, or panic. Sports that
//! were never scripted fail with a 404 status.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{id::SportKey, payload::OddsPayload};
use crate::error::TransportError;
use crate::port::outbound::odds::OddsSource;

#[derive(Debug, Clone)]
enum Script {
    Payload(OddsPayload),
    Fail,
    Panic,
}

/// In-memory odds source driven by per-sport scripts.
#[derive(Debug, Default)]
pub struct StaticOddsSource {
    scripts: BTreeMap<SportKey, Script>,
    sports: Option<Vec<SportKey>>,
    list_fails: bool,
    delay: Option<Duration>,
    fetches: AtomicUsize,
}

impl StaticOddsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `payload` when `sport` is fetched.
    #[must_use]
    pub fn with_payload(mut self, sport: impl Into<SportKey>, payload: OddsPayload) -> Self {
        self.scripts.insert(sport.into(), Script::Payload(payload));
        self
    }

    /// Fail with a 500 status when `sport` is fetched.
    #[must_use]
    pub fn with_failure(mut self, sport: impl Into<SportKey>) -> Self {
        self.scripts.insert(sport.into(), Script::Fail);
        self
    }

    /// Panic when `sport` is fetched.
    #[must_use]
    pub fn with_panic(mut self, sport: impl Into<SportKey>) -> Self {
        self.scripts.insert(sport.into(), Script::Panic);
        self
    }

    /// Override the sports list. Defaults to every scripted sport.
    #[must_use]
    pub fn with_sports(mut self, sports: Vec<SportKey>) -> Self {
        self.sports = Some(sports);
        self
    }

    /// Make `list_sports` fail.
    #[must_use]
    pub fn with_list_failure(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// Sleep before answering every fetch.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `fetch_odds` calls received.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OddsSource for StaticOddsSource {
    async fn list_sports(&self) -> Result<Vec<SportKey>, TransportError> {
        if self.list_fails {
            return Err(TransportError::Status {
                status: 401,
                url: "static://sports".into(),
            });
        }
        Ok(self
            .sports
            .clone()
            .unwrap_or_else(|| self.scripts.keys().cloned().collect()))
    }

    async fn fetch_odds(&self, sport: &SportKey) -> Result<OddsPayload, TransportError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let url = format!("static://sports/{sport}/odds");
        match self.scripts.get(sport) {
            Some(Script::Payload(payload)) => Ok(payload.clone()),
            Some(Script::Fail) => Err(TransportError::Status { status: 500, url }),
            Some(Script::Panic) => panic!("scripted panic for {sport}"),
            None => Err(TransportError::Status { status: 404, url }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }
}
