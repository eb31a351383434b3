//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sport identifier as used by the odds provider (e.g. `soccer_epl`).
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SportKey(String);

impl SportKey {
    /// Create a new `SportKey` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the sport key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SportKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SportKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Match identity derived from the fixture's teams: `"{home} vs {away}"`.
///
/// Two records with the same home/away pair in one payload map to the same
/// key and are merged by the indexer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchKey(String);

impl MatchKey {
    /// Build the key from home and away team names.
    pub fn from_teams(home: &str, away: &str) -> Self {
        Self(format!("{home} vs {away}"))
    }

    /// Get the match key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MatchKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_key_joins_teams() {
        let key = MatchKey::from_teams("Arsenal", "Chelsea");
        assert_eq!(key.as_str(), "Arsenal vs Chelsea");
    }

    #[test]
    fn match_key_with_missing_teams_still_builds() {
        let key = MatchKey::from_teams("", "");
        assert_eq!(key.as_str(), " vs ");
    }
}
