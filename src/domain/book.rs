//! Best-price book: the single highest quote per (match, outcome).

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::MatchKey;

/// One bookmaker's decimal price for one outcome of one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsQuote {
    pub bookmaker: String,
    pub outcome: String,
    pub commence_time: String,
    pub odds: f64,
}

impl OddsQuote {
    pub fn new(
        bookmaker: impl Into<String>,
        outcome: impl Into<String>,
        commence_time: impl Into<String>,
        odds: f64,
    ) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            outcome: outcome.into(),
            commence_time: commence_time.into(),
            odds,
        }
    }
}

/// Best quotes for one match, keyed by outcome name.
///
/// Iteration is ordered by outcome name, which fixes the anchor and
/// commence-time choices made during detection.
pub type MatchOdds = BTreeMap<String, OddsQuote>;

/// Best available quote per outcome for every match of one sport fetch.
///
/// Invariant: for each (match, outcome) the stored quote has odds greater
/// than or equal to every other quote offered for it. Ties keep the quote
/// offered first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestOddsMap {
    matches: BTreeMap<MatchKey, MatchOdds>,
}

impl BestOddsMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a match without any quotes yet.
    pub fn ensure_match(&mut self, key: MatchKey) -> &mut MatchOdds {
        self.matches.entry(key).or_default()
    }

    /// Offer a quote. Returns `true` if it became the best quote for its outcome.
    pub fn offer(&mut self, key: MatchKey, quote: OddsQuote) -> bool {
        let odds = self.ensure_match(key);
        match odds.entry(quote.outcome.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(quote);
                true
            }
            Entry::Occupied(mut slot) => {
                if slot.get().odds < quote.odds {
                    slot.insert(quote);
                    true
                } else {
                    false
                }
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &MatchKey) -> Option<&MatchOdds> {
        self.matches.get(key)
    }

    #[must_use]
    pub fn best(&self, key: &MatchKey, outcome: &str) -> Option<&OddsQuote> {
        self.matches.get(key).and_then(|odds| odds.get(outcome))
    }

    pub fn iter(&self) -> btree_map::Iter<'_, MatchKey, MatchOdds> {
        self.matches.iter()
    }

    /// Number of matches, including matches without any quote.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl<'a> IntoIterator for &'a BestOddsMap {
    type Item = (&'a MatchKey, &'a MatchOdds);
    type IntoIter = btree_map::Iter<'a, MatchKey, MatchOdds>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> MatchKey {
        MatchKey::from_teams("Home", "Away")
    }

    #[test]
    fn higher_odds_replace_stored_quote() {
        let mut book = BestOddsMap::new();
        book.offer(key(), OddsQuote::new("a", "Home", "t", 2.00));
        assert!(book.offer(key(), OddsQuote::new("b", "Home", "t", 2.10)));

        let best = book.best(&key(), "Home").unwrap();
        assert_eq!(best.bookmaker, "b");
        assert_eq!(best.odds, 2.10);
    }

    #[test]
    fn lower_odds_leave_stored_quote_unchanged() {
        let mut book = BestOddsMap::new();
        book.offer(key(), OddsQuote::new("a", "Home", "t", 2.10));
        assert!(!book.offer(key(), OddsQuote::new("b", "Home", "t", 2.05)));

        assert_eq!(book.best(&key(), "Home").unwrap().bookmaker, "a");
    }

    #[test]
    fn ties_keep_first_quote() {
        let mut book = BestOddsMap::new();
        book.offer(key(), OddsQuote::new("first", "Home", "t", 2.0));
        assert!(!book.offer(key(), OddsQuote::new("second", "Home", "t", 2.0)));

        assert_eq!(book.best(&key(), "Home").unwrap().bookmaker, "first");
    }

    #[test]
    fn outcomes_iterate_in_name_order() {
        let mut book = BestOddsMap::new();
        book.offer(key(), OddsQuote::new("a", "Draw", "t", 3.0));
        book.offer(key(), OddsQuote::new("a", "Away", "t", 4.0));
        book.offer(key(), OddsQuote::new("a", "Home", "t", 2.0));

        let names: Vec<_> = book.get(&key()).unwrap().keys().cloned().collect();
        assert_eq!(names, vec!["Away", "Draw", "Home"]);
    }

    #[test]
    fn ensure_match_registers_empty_entry() {
        let mut book = BestOddsMap::new();
        book.ensure_match(key());
        assert_eq!(book.len(), 1);
        assert!(book.get(&key()).unwrap().is_empty());
    }
}
