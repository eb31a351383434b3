//! Odds indexing: reduce a raw payload to the best quote per outcome.

use crate::domain::{
    book::{BestOddsMap, OddsQuote},
    id::MatchKey,
    payload::OddsPayload,
};

/// Market key for head-to-head win markets. All other markets are ignored.
pub const H2H_MARKET: &str = "h2h";

/// Builds a [`BestOddsMap`] from a provider payload.
///
/// Every fixture gets an entry keyed by `"{home} vs {away}"`, even when no
/// bookmaker quotes its h2h market. For each (match, outcome) only the
/// strictly highest price is kept; ties keep the bookmaker seen first.
#[derive(Debug, Clone, Copy, Default)]
pub struct OddsIndexer;

impl OddsIndexer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn index(&self, payload: &OddsPayload) -> BestOddsMap {
        let mut book = BestOddsMap::new();

        for event in &payload.events {
            let key = MatchKey::from_teams(&event.home_team, &event.away_team);
            book.ensure_match(key.clone());

            let h2h_markets = event.bookmakers.iter().flat_map(|bookmaker| {
                bookmaker
                    .markets
                    .iter()
                    .filter(|market| market.key == H2H_MARKET)
                    .map(move |market| (bookmaker, market))
            });

            for (bookmaker, market) in h2h_markets {
                for outcome in &market.outcomes {
                    book.offer(
                        key.clone(),
                        OddsQuote::new(
                            bookmaker.key.as_str(),
                            outcome.name.as_str(),
                            event.commence_time.as_str(),
                            outcome.price,
                        ),
                    );
                }
            }
        }

        book
    }
}
