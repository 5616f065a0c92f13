//! Network URL and path constants for the Reya price-history APIs.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mainnet REST API base URL.
pub const MAINNET_API_URL: &str = "https://api.reya.xyz";

/// Cronos REST API base URL.
pub const CRONOS_API_URL: &str = "https://api-cronos.reya.xyz";

/// Testnet candles API base URL.
pub const TESTNET_API_URL: &str = "https://api-candles.reya-cronos.network";

/// Path-parameterized candles endpoint: `{path}/{symbol}/{resolution}?from=&to=`.
pub const CANDLES_PATH: &str = "/api/trading/candles";

/// Query-parameterized TradingView history endpoint.
pub const HISTORY_PATH: &str = "/api/tradingview/history";

/// Path used by the testnet quick setup.
pub const TESTNET_CANDLES_PATH: &str = "/api/candles";

/// Market list endpoints, tried in order until one succeeds.
pub const MARKET_LIST_PATHS: [&str; 3] = [
    "/api/markets",
    "/api/tradingview/symbols",
    "/api/trading/markets",
];

/// Deployment environment exposing the same logical API at a distinct base URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Cronos,
    Testnet,
}

impl Network {
    /// Default base URL for this network.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_API_URL,
            Self::Cronos => CRONOS_API_URL,
            Self::Testnet => TESTNET_API_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Cronos => "cronos",
            Self::Testnet => "testnet",
        }
    }

    /// Human-readable name for selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Cronos => "Cronos",
            Self::Testnet => "Testnet",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "cronos" => Ok(Self::Cronos),
            "testnet" => Ok(Self::Testnet),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}
