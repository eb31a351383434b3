//! The Odds API REST client.
//!
//! Two endpoints are used:
//! - `GET /v4/sports/` lists every sport currently offered
//! - `GET /v4/sports/{sport}/odds/` returns fixtures with bookmaker quotes
//!
//! The API key travels as a query parameter, so URLs are never logged in
//! full. Errors carry the request path only.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::settings::OddsApiConfig;
use crate::domain::{id::SportKey, payload::OddsPayload};
use crate::error::{ConfigError, Result, TransportError};
use crate::port::outbound::odds::OddsSource;

/// Entry of the sports listing. Only the key is used.
#[derive(Debug, Deserialize)]
struct SportRecord {
    #[serde(default)]
    key: Option<String>,
}

/// HTTP client for The Odds API.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: Url,
    api_key: String,
    regions: String,
    markets: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl OddsApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error when the API key is missing or the base URL
    /// does not parse.
    pub fn from_config(config: &OddsApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingField { field: "API_KEY" })?;

        let mut raw = config.api_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).map_err(|err| ConfigError::InvalidValue {
            field: "odds_api.api_url",
            reason: err.to_string(),
        })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url,
            api_key,
            regions: config.regions.clone(),
            markets: config.markets.clone(),
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        })
    }

    /// `GET /v4/sports/` with the API key attached.
    pub fn sports_url(&self) -> std::result::Result<Url, TransportError> {
        let mut url = self.base_url.join("v4/sports/")?;
        url.query_pairs_mut().append_pair("apiKey", &self.api_key);
        Ok(url)
    }

    /// `GET /v4/sports/{sport}/odds/` with key, regions and markets attached.
    pub fn odds_url(&self, sport: &SportKey) -> std::result::Result<Url, TransportError> {
        let mut url = self.base_url.join("v4/sports/")?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(sport.as_str())
            .push("odds")
            .push("");
        url.query_pairs_mut()
            .append_pair("apiKey", &self.api_key)
            .append_pair("regions", &self.regions)
            .append_pair("markets", &self.markets);
        Ok(url)
    }

    async fn get_with_retry<T>(&self, url: Url) -> std::result::Result<T, TransportError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    let err = err.without_url();
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status {
                    status: status.as_u16(),
                    url: url.path().to_string(),
                });
            }

            match response.bytes().await {
                Ok(body) => return Ok(serde_json::from_slice(&body)?),
                Err(err) => {
                    let err = err.without_url();
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn list_sports(&self) -> std::result::Result<Vec<SportKey>, TransportError> {
        let url = self.sports_url()?;
        info!(path = %url.path(), "Fetching sports list");

        let records: Vec<SportRecord> = self.get_with_retry(url).await?;
        let sports: Vec<SportKey> = records
            .into_iter()
            .filter_map(|record| record.key)
            .filter(|key| !key.is_empty())
            .map(SportKey::from)
            .collect();

        debug!(count = sports.len(), "Fetched sports");
        Ok(sports)
    }

    async fn fetch_odds(&self, sport: &SportKey) -> std::result::Result<OddsPayload, TransportError> {
        let url = self.odds_url(sport)?;
        debug!(sport = %sport, path = %url.path(), "Fetching odds");

        let payload: OddsPayload = self.get_with_retry(url).await?;
        debug!(sport = %sport, events = payload.len(), "Fetched odds");
        Ok(payload)
    }

    fn provider_name(&self) -> &'static str {
        "the-odds-api"
    }
}
