//! Conversion: market list wire body → `MarketSymbol`s.

use super::wire::{MarketEntry, MarketListBody};
use super::MarketSymbol;
use crate::domain::candle::wire::describe;
use crate::error::NormalizeError;
use crate::shared::Symbol;
use serde::Deserialize;
use serde_json::Value;

/// Decode a market list body into symbols, in upstream order.
///
/// Strict: one unusable entry fails the whole list.
pub fn decode_market_list(raw: &Value) -> Result<Vec<MarketSymbol>, NormalizeError> {
    let entries = MarketListBody::deserialize(raw)
        .ok()
        .and_then(MarketListBody::into_entries)
        .ok_or_else(|| NormalizeError::UnrecognizedShape(describe(raw)))?;

    entries.into_iter().map(MarketSymbol::try_from).collect()
}

impl TryFrom<MarketEntry> for MarketSymbol {
    type Error = NormalizeError;

    fn try_from(entry: MarketEntry) -> Result<Self, Self::Error> {
        let (symbol, label) = match entry {
            MarketEntry::Id(id) => (non_blank(Some(id)), None),
            MarketEntry::Object(obj) => (
                non_blank(obj.symbol)
                    .or_else(|| non_blank(obj.name))
                    .or_else(|| non_blank(obj.ticker)),
                non_blank(obj.description)
                    .or_else(|| non_blank(obj.full_name))
                    .or_else(|| non_blank(obj.display_name)),
            ),
        };
        let symbol = symbol.ok_or_else(|| {
            NormalizeError::UnrecognizedShape("market entry without a symbol".to_string())
        })?;
        let label = label.filter(|l| *l != symbol);

        Ok(MarketSymbol {
            symbol: Symbol::from(symbol),
            label,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(list: &[MarketSymbol]) -> Vec<&str> {
        list.iter().map(|m| m.symbol.as_str()).collect()
    }

    #[test]
    fn test_array_of_strings() {
        let list = decode_market_list(&json!(["BTCUSDMARK", " ETHUSDMARK "])).unwrap();
        assert_eq!(ids(&list), vec!["BTCUSDMARK", "ETHUSDMARK"]);
        assert!(list[0].label.is_none());
    }

    #[test]
    fn test_array_of_objects() {
        let raw = json!([
            {"symbol": "BTCUSDMARK", "description": "BTC/USD MARK"},
            {"ticker": "SOLUSDMARK"},
            {"symbol": "ETHUSDMARK", "full_name": "ETHUSDMARK"},
        ]);
        let list = decode_market_list(&raw).unwrap();
        assert_eq!(ids(&list), vec!["BTCUSDMARK", "SOLUSDMARK", "ETHUSDMARK"]);
        assert_eq!(list[0].label.as_deref(), Some("BTC/USD MARK"));
        assert_eq!(list[2].label, None);
    }

    #[test]
    fn test_wrapped_list() {
        let raw = json!({"markets": [{"name": "AVAXUSDMARK"}]});
        assert_eq!(ids(&decode_market_list(&raw).unwrap()), vec!["AVAXUSDMARK"]);
        let raw = json!({"symbols": ["BERAUSDMARK"]});
        assert_eq!(ids(&decode_market_list(&raw).unwrap()), vec!["BERAUSDMARK"]);
    }

    #[test]
    fn test_unrecognized_bodies() {
        assert!(decode_market_list(&json!({"foo": []})).is_err());
        assert!(decode_market_list(&json!("BTCUSDMARK")).is_err());
        assert!(decode_market_list(&json!([1, 2])).is_err());
        assert!(decode_market_list(&json!([{"id": 7}])).is_err());
        assert!(decode_market_list(&json!(["BTCUSDMARK", ""])).is_err());
    }
}
