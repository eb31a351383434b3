//! Stake plans: turning allocation fractions into concrete bets for a bank.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::opportunity::ArbitrageOpportunity;

fn money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// What to bet on one outcome and what it returns if that outcome wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeLeg {
    pub outcome: String,
    pub bookmaker: String,
    pub odds: Decimal,
    pub stake: Decimal,
    /// Total return (stake included) if this outcome wins.
    pub payout: Decimal,
    /// Payout minus the whole bank.
    pub net: Decimal,
}

/// Concrete stakes for every leg of an opportunity given a bank size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakePlan {
    pub bank: Decimal,
    pub legs: Vec<StakeLeg>,
}

impl StakePlan {
    /// Split `bank` across the opportunity's legs by their allocation fraction.
    ///
    /// Stakes, odds and payouts are rounded to cents, so nets can differ by a
    /// cent or two between legs.
    #[must_use]
    pub fn for_opportunity(opportunity: &ArbitrageOpportunity, bank: Decimal) -> Self {
        let legs = opportunity
            .legs
            .iter()
            .map(|leg| {
                let stake = money(to_decimal(leg.stake_fraction) * bank);
                let odds = money(to_decimal(leg.odds));
                let payout = money(stake * odds);
                StakeLeg {
                    outcome: leg.outcome.clone(),
                    bookmaker: leg.bookmaker.clone(),
                    odds,
                    stake,
                    payout,
                    net: payout - bank,
                }
            })
            .collect();

        Self { bank, legs }
    }

    /// Sum of all stakes; equals the bank up to rounding.
    #[must_use]
    pub fn total_staked(&self) -> Decimal {
        self.legs.iter().map(|leg| leg.stake).sum()
    }

    /// Smallest net across legs: the guaranteed profit.
    #[must_use]
    pub fn guaranteed_net(&self) -> Option<Decimal> {
        self.legs.iter().map(|leg| leg.net).min()
    }
}
