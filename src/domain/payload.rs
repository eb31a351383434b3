//! Raw odds payload as returned by the provider's odds endpoint.
//!
//! The provider sends a JSON array of fixtures, each carrying a nested
//! bookmaker → market → outcome tree:
//!
//! ```json
//! [{
//!   "home_team": "Arsenal",
//!   "away_team": "Chelsea",
//!   "commence_time": "2024-12-07T15:00:00Z",
//!   "bookmakers": [{
//!     "key": "bet365",
//!     "markets": [{
//!       "key": "h2h",
//!       "outcomes": [{"name": "Arsenal", "price": 2.1}]
//!     }]
//!   }]
//! }]
//! ```
//!
//! Every field is optional. Missing, `null` or wrongly typed values fall back
//! to an empty string, `0.0` or an empty list, and list entries that are not
//! records are dropped. A malformed record degrades into a non-competitive
//! entry instead of failing the whole payload. Only a body that is not a JSON
//! array at all is rejected.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(parse_items(items)),
        _ => Ok(Vec::new()),
    }
}

fn parse_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// All fixtures returned for one sport.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OddsPayload {
    pub events: Vec<OddsEvent>,
}

impl<'de> Deserialize<'de> for OddsPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Self::new(parse_items(items))),
            Value::Null => Ok(Self::default()),
            other => Err(D::Error::custom(format!(
                "expected an array of events, found {}",
                kind(&other)
            ))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl OddsPayload {
    #[must_use]
    pub fn new(events: Vec<OddsEvent>) -> Self {
        Self { events }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// A single fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OddsEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub home_team: String,
    #[serde(default, deserialize_with = "lenient")]
    pub away_team: String,
    #[serde(default, deserialize_with = "lenient")]
    pub commence_time: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub bookmakers: Vec<BookmakerOdds>,
}

/// One bookmaker's markets for a fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmakerOdds {
    #[serde(default, deserialize_with = "lenient")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub markets: Vec<MarketOdds>,
}

/// A market (`h2h`, `spreads`, `totals`, ...) offered by a bookmaker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOdds {
    #[serde(default, deserialize_with = "lenient")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub outcomes: Vec<OutcomePrice>,
}

/// A decimal price for one named outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutcomePrice {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub price: f64,
}
