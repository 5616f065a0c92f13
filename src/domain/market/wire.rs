//! Wire types for market list responses (REST).
//!
//! The three market endpoints disagree on layout. Accepted bodies:
//! - `["BTCUSDMARK", ...]`
//! - `[{"symbol": "BTCUSDMARK", "description": "..."}, ...]` (`name` or
//!   `ticker` also identify the symbol)
//! - any of the above under `symbols`, `markets` or `data`.

use crate::shared::serde_util;
use serde::Deserialize;

/// One element of a market list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MarketEntry {
    Id(String),
    Object(#[serde(with = "serde_util::json_object")] MarketObject),
}

/// Market object; the symbol comes from `symbol`, `name` or `ticker`, in
/// that order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketObject {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Object wrapping the list. The first populated field wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketListWrapper {
    #[serde(default)]
    pub symbols: Option<Vec<MarketEntry>>,
    #[serde(default)]
    pub markets: Option<Vec<MarketEntry>>,
    #[serde(default)]
    pub data: Option<Vec<MarketEntry>>,
}

/// Market list response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MarketListBody {
    List(Vec<MarketEntry>),
    Wrapped(#[serde(with = "serde_util::json_object")] MarketListWrapper),
}

impl MarketListBody {
    /// The entries, or `None` when a wrapper carries no list.
    pub fn into_entries(self) -> Option<Vec<MarketEntry>> {
        match self {
            MarketListBody::List(entries) => Some(entries),
            MarketListBody::Wrapped(w) => w.symbols.or(w.markets).or(w.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_list_of_ids() {
        let body: MarketListBody = serde_json::from_value(json!(["BTCUSDMARK"])).unwrap();
        assert_eq!(
            body.into_entries(),
            Some(vec![MarketEntry::Id("BTCUSDMARK".to_string())])
        );
    }

    #[test]
    fn test_deserialize_wrapped_objects() {
        let body: MarketListBody =
            serde_json::from_value(json!({"data": [{"ticker": "SOLUSDMARK"}]})).unwrap();
        assert_eq!(
            body.into_entries(),
            Some(vec![MarketEntry::Object(MarketObject {
                ticker: Some("SOLUSDMARK".to_string()),
                ..Default::default()
            })])
        );
    }

    #[test]
    fn test_wrapper_field_priority() {
        let body: MarketListBody =
            serde_json::from_value(json!({"data": ["A"], "symbols": ["B"]})).unwrap();
        assert_eq!(body.into_entries(), Some(vec![MarketEntry::Id("B".to_string())]));
    }

    #[test]
    fn test_wrapper_without_list() {
        let body: MarketListBody = serde_json::from_value(json!({"foo": []})).unwrap();
        assert_eq!(body.into_entries(), None);
    }

    #[test]
    fn test_scalar_entries_do_not_deserialize() {
        assert!(serde_json::from_value::<MarketListBody>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<MarketListBody>(json!("BTCUSDMARK")).is_err());
    }
}
