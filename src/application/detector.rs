//! Arbitrage detection over a match's best quotes.
//!
//! A match is an arbitrage when the implied probability of its best quotes,
//! `p = Σ 1/odds`, is below 1. Staking `(1/odds)/p` of the bank on every
//! outcome then pays `bank / p` whichever outcome wins.
//!
//! The implied probability only covers the outcomes that were quoted. A
//! match where one side has no quote at all looks like a large arbitrage;
//! no coverage check is made here.

use serde::Deserialize;

use crate::domain::{
    book::MatchOdds,
    id::MatchKey,
    opportunity::{ArbitrageOpportunity, OpportunityLeg},
};

/// Configuration for the arbitrage detector.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectorConfig {
    /// Minimum margin, in percent, an opportunity must strictly exceed.
    /// `0.0` reports every arbitrage.
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: f64,
}

fn default_threshold_percent() -> f64 {
    0.0
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold_percent: default_threshold_percent(),
        }
    }
}

/// Round half away from zero to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Sum of reciprocal odds across every quoted outcome.
#[must_use]
pub fn implied_probability(odds: &MatchOdds) -> f64 {
    odds.values().map(|quote| 1.0 / quote.odds).sum()
}

/// Margin in percent for an implied probability: `(1 - p) * 100`.
#[must_use]
pub fn margin_percent(implied_probability: f64) -> f64 {
    (1.0 - implied_probability) * 100.0
}

/// Decides whether a match's best quotes form an arbitrage and sizes the stakes.
#[derive(Debug, Clone, Default)]
pub struct ArbitrageDetector {
    config: DetectorConfig,
}

impl ArbitrageDetector {
    #[must_use]
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn threshold_percent(&self) -> f64 {
        self.config.threshold_percent
    }

    /// Detect an opportunity for one match.
    ///
    /// Returns `None` for an empty quote set or when the margin does not
    /// exceed the configured threshold.
    ///
    /// The reported `profit_percentage` is the return on a 100-unit bank
    /// staked through the first outcome (by name), `100/p - 100`, rounded to
    /// 2 places. It is larger than the threshold margin `(1 - p) * 100`.
    /// `commence_time` comes from the last outcome by name.
    #[must_use]
    pub fn detect(&self, match_key: &MatchKey, odds: &MatchOdds) -> Option<ArbitrageOpportunity> {
        let anchor = odds.values().next()?;

        let implied = implied_probability(odds);
        let margin = margin_percent(implied);
        if !(margin > self.config.threshold_percent) {
            return None;
        }

        let bet = 1.0 / anchor.odds / implied * 100.0;
        let revenue = bet * anchor.odds;
        let profit_percentage = round_to(revenue - 100.0, 2);

        let legs = odds
            .values()
            .map(|quote| OpportunityLeg {
                bookmaker: quote.bookmaker.clone(),
                outcome: quote.outcome.clone(),
                odds: quote.odds,
                stake_fraction: round_to((1.0 / quote.odds) / implied, 6),
            })
            .collect();

        let commence_time = odds
            .values()
            .next_back()
            .map(|quote| quote.commence_time.clone())
            .unwrap_or_default();

        Some(ArbitrageOpportunity {
            match_name: match_key.to_string(),
            profit_percentage,
            commence_time,
            legs,
        })
    }
}
