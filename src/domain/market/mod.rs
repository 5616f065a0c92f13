//! Market domain: symbol discovery for the selector.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use crate::shared::{Symbol, DEFAULT_SYMBOLS};
use serde::{Deserialize, Serialize};

/// A tradable symbol as listed by a market endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSymbol {
    pub symbol: Symbol,
    /// Human-readable name, when upstream provides one distinct from the symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl MarketSymbol {
    /// Label if known, else the raw symbol.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.symbol.label())
    }

    /// The built-in symbol list.
    pub fn defaults() -> Vec<MarketSymbol> {
        DEFAULT_SYMBOLS
            .iter()
            .map(|(id, label)| MarketSymbol {
                symbol: Symbol::from(*id),
                label: Some(label.to_string()),
            })
            .collect()
    }
}
