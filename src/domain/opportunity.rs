//! Detected arbitrage opportunities and their persisted per-sport log.
//!
//! Field names mirror the on-disk document consumed by downstream tooling:
//!
//! ```json
//! {
//!     "arbitrage_opportunities": [{
//!         "match": "Arsenal vs Chelsea",
//!         "profit_percentage": 2.38,
//!         "commence_time": "2024-12-07T15:00:00Z",
//!         "odds": [{
//!             "bookmaker": "bet365",
//!             "outcome": "Arsenal",
//!             "odds": 2.1,
//!             "optimal_bank_allocation": 0.487805
//!         }]
//!     }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One outcome of an opportunity: where to bet and what share of the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityLeg {
    pub bookmaker: String,
    pub outcome: String,
    pub odds: f64,
    /// Fraction of the total stake for this outcome, rounded to 6 places.
    #[serde(rename = "optimal_bank_allocation")]
    pub stake_fraction: f64,
}

/// A detected arbitrage across bookmakers for a single match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageOpportunity {
    #[serde(rename = "match")]
    pub match_name: String,
    /// Guaranteed return on a 100-unit bank, in percent, rounded to 2 places.
    pub profit_percentage: f64,
    #[serde(default)]
    pub commence_time: String,
    #[serde(rename = "odds", default)]
    pub legs: Vec<OpportunityLeg>,
}

impl ArbitrageOpportunity {
    /// Sum of the stake fractions across all legs.
    #[must_use]
    pub fn total_stake_fraction(&self) -> f64 {
        self.legs.iter().map(|leg| leg.stake_fraction).sum()
    }
}

/// All opportunities persisted for one sport during one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SportOpportunityLog {
    #[serde(default)]
    pub arbitrage_opportunities: Vec<ArbitrageOpportunity>,
}

impl SportOpportunityLog {
    pub fn push(&mut self, opportunity: ArbitrageOpportunity) {
        self.arbitrage_opportunities.push(opportunity);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.arbitrage_opportunities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arbitrage_opportunities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_document_field_names() {
        let mut log = SportOpportunityLog::default();
        log.push(ArbitrageOpportunity {
            match_name: "A vs B".into(),
            profit_percentage: 2.38,
            commence_time: "2024-12-07T15:00:00Z".into(),
            legs: vec![OpportunityLeg {
                bookmaker: "bet365".into(),
                outcome: "A".into(),
                odds: 2.1,
                stake_fraction: 0.487805,
            }],
        });

        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(
            value,
            json!({
                "arbitrage_opportunities": [{
                    "match": "A vs B",
                    "profit_percentage": 2.38,
                    "commence_time": "2024-12-07T15:00:00Z",
                    "odds": [{
                        "bookmaker": "bet365",
                        "outcome": "A",
                        "odds": 2.1,
                        "optimal_bank_allocation": 0.487805
                    }]
                }]
            })
        );
    }

    #[test]
    fn empty_document_parses_to_empty_log() {
        let log: SportOpportunityLog = serde_json::from_str("{}").unwrap();
        assert!(log.is_empty());
    }
}
