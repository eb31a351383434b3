//! Read persisted opportunities back and size them for a bank.

use rust_decimal::Decimal;

use super::store::OpportunityStore;
use crate::domain::{id::SportKey, opportunity::ArbitrageOpportunity, stake::StakePlan};
use crate::error::Result;

/// One persisted opportunity with its stake plan.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub sport: SportKey,
    pub opportunity: ArbitrageOpportunity,
    pub plan: StakePlan,
}

/// Every opportunity in the store, most profitable first.
#[derive(Debug, Clone)]
pub struct OpportunityReport {
    pub bank: Decimal,
    pub entries: Vec<ReportEntry>,
}

impl OpportunityReport {
    /// Build a report from every sport log in `store`.
    ///
    /// Entries are sorted by profit percentage, highest first; ties keep
    /// sport order.
    pub fn build(store: &OpportunityStore, bank: Decimal) -> Result<Self> {
        let mut entries: Vec<ReportEntry> = store
            .load_all()?
            .into_iter()
            .flat_map(|(sport, log)| {
                log.arbitrage_opportunities
                    .into_iter()
                    .map(move |opportunity| (sport.clone(), opportunity))
            })
            .map(|(sport, opportunity)| ReportEntry {
                plan: StakePlan::for_opportunity(&opportunity, bank),
                sport,
                opportunity,
            })
            .collect();

        entries.sort_by(|a, b| {
            b.opportunity
                .profit_percentage
                .total_cmp(&a.opportunity.profit_percentage)
        });

        Ok(Self { bank, entries })
    }

    /// Keep only the `limit` most profitable entries.
    pub fn truncate(&mut self, limit: usize) {
        self.entries.truncate(limit);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
