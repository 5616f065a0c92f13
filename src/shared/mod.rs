//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the upstream APIs take, so they can be dropped straight into
//! request parameters without conversion.

pub mod serde_util;
pub mod time;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

const DAY_SECS: i64 = 86_400;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Default chart symbol.
pub const DEFAULT_SYMBOL: &str = "BERAUSDMARK";

/// Built-in symbol list used when no market endpoint answers.
pub const DEFAULT_SYMBOLS: [(&str, &str); 5] = [
    ("BERAUSDMARK", "BERA/USD MARK"),
    ("BTCUSDMARK", "BTC/USD MARK"),
    ("ETHUSDMARK", "ETH/USD MARK"),
    ("SOLUSDMARK", "SOL/USD MARK"),
    ("AVAXUSDMARK", "AVAX/USD MARK"),
];

/// Newtype for trading symbols (e.g. `"BTCUSDMARK"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label for a built-in symbol, falling back to the raw id.
    pub fn label(&self) -> &str {
        DEFAULT_SYMBOLS
            .iter()
            .find(|(id, _)| *id == self.0)
            .map(|(_, label)| *label)
            .unwrap_or(self.0.as_str())
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self(DEFAULT_SYMBOL.to_string())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

/// Timeframes offered by the selector: (wire value, label).
pub const KNOWN_RESOLUTIONS: [(&str, &str); 8] = [
    ("1", "1m"),
    ("5", "5m"),
    ("15", "15m"),
    ("30", "30m"),
    ("60", "1h"),
    ("240", "4h"),
    ("D", "1d"),
    ("W", "1w"),
];

/// Candle granularity as sent upstream.
///
/// Either a number of minutes (`"1"`, `"240"`) or a day/week code
/// (`"D"`, `"1D"`, `"W"`, `"1W"`). Unknown values are kept verbatim and
/// forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resolution(String);

impl Resolution {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Default lookback window in seconds, sized so the number of returned
    /// candles stays roughly bounded for every granularity.
    pub fn lookback_secs(&self) -> i64 {
        let days = match self.0.as_str() {
            "1" => 1,
            "5" => 5,
            "15" => 7,
            "30" => 14,
            "60" => 30,
            "240" => 60,
            "D" | "1D" => 180,
            "W" | "1W" => 365,
            _ => 30,
        };
        days * DAY_SECS
    }

    /// Selector label (`"4h"` for `"240"`), falling back to the raw value.
    pub fn label(&self) -> &str {
        let canonical = match self.0.as_str() {
            "1D" => "D",
            "1W" => "W",
            other => other,
        };
        KNOWN_RESOLUTIONS
            .iter()
            .find(|(value, _)| *value == canonical)
            .map(|(_, label)| *label)
            .unwrap_or(self.0.as_str())
    }

    /// Whether the selector offers this timeframe.
    pub fn is_known(&self) -> bool {
        matches!(
            self.0.as_str(),
            "1" | "5" | "15" | "30" | "60" | "240" | "D" | "1D" | "W" | "1W"
        )
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self("1".to_string())
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Resolution {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Resolution {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Resolution {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Resolution(s.to_string()))
    }
}

impl Serialize for Resolution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Resolution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Resolution(s))
    }
}
