//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for payloads, quotes and
//! opportunities so tests focus on assertions rather than construction
//! boilerplate.

use crate::domain::opportunity::{ArbitrageOpportunity, OpportunityLeg};
use crate::domain::payload::{BookmakerOdds, MarketOdds, OddsEvent, OddsPayload, OutcomePrice};

/// Commence time used by every generated fixture.
pub const COMMENCE_TIME: &str = "2024-12-07T15:00:00Z";

/// Create an h2h market from `(outcome, price)` pairs.
pub fn h2h(prices: &[(&str, f64)]) -> MarketOdds {
    market("h2h", prices)
}

/// Create a market with an arbitrary key from `(outcome, price)` pairs.
pub fn market(key: &str, prices: &[(&str, f64)]) -> MarketOdds {
    MarketOdds {
        key: key.to_string(),
        outcomes: prices
            .iter()
            .map(|(name, price)| OutcomePrice {
                name: (*name).to_string(),
                price: *price,
            })
            .collect(),
    }
}

/// Create a bookmaker quoting the given markets.
pub fn bookmaker(key: &str, markets: Vec<MarketOdds>) -> BookmakerOdds {
    BookmakerOdds {
        key: key.to_string(),
        markets,
    }
}

/// Create a fixture between `home` and `away`.
pub fn event(home: &str, away: &str, bookmakers: Vec<BookmakerOdds>) -> OddsEvent {
    OddsEvent {
        home_team: home.to_string(),
        away_team: away.to_string(),
        commence_time: COMMENCE_TIME.to_string(),
        bookmakers,
    }
}

/// Single-fixture payload where bookmaker `one` has the best price on `home`
/// and bookmaker `two` has the best price on `away`.
///
/// The losing prices are 0.05 below the best ones.
pub fn two_way_payload(home: &str, away: &str, home_best: f64, away_best: f64) -> OddsPayload {
    OddsPayload::new(vec![event(
        home,
        away,
        vec![
            bookmaker("one", vec![h2h(&[(home, home_best), (away, away_best - 0.05)])]),
            bookmaker("two", vec![h2h(&[(home, home_best - 0.05), (away, away_best)])]),
        ],
    )])
}

/// A one-leg opportunity with the given profit.
pub fn opportunity(match_name: &str, profit_percentage: f64) -> ArbitrageOpportunity {
    ArbitrageOpportunity {
        match_name: match_name.to_string(),
        profit_percentage,
        commence_time: COMMENCE_TIME.to_string(),
        legs: vec![OpportunityLeg {
            bookmaker: "one".to_string(),
            outcome: "A".to_string(),
            odds: 2.0,
            stake_fraction: 1.0,
        }],
    }
}
