//! Session configuration: endpoint and path overrides for the application session.
//!
//! The config is an explicit value: the request builder takes it by
//! reference, and `ChartClient` owns one for as long as the session lasts.
//! Nothing is persisted.

#[cfg(feature = "http")]
pub mod client;

use crate::error::SdkError;
use crate::network::{Network, CANDLES_PATH, HISTORY_PATH, TESTNET_CANDLES_PATH};
use serde::{Deserialize, Serialize};

/// Env var read by [`SessionConfig::from_env`] for the endpoint override.
pub const ENDPOINT_ENV: &str = "REYA_API_ENDPOINT";

/// Env var read by [`SessionConfig::from_env`] for the path override.
pub const PATH_ENV: &str = "REYA_API_PATH";

/// Which upstream request shape is in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    /// Query-parameterized request (`?symbol=&resolution=&from=&to=`).
    Default,
    /// Path-parameterized request (`/{symbol}/{resolution}?from=&to=`).
    #[default]
    Candles,
}

impl PathMode {
    /// Mode implied by an effective path.
    pub fn for_path(path: &str) -> Self {
        if path == CANDLES_PATH {
            PathMode::Candles
        } else {
            PathMode::Default
        }
    }

    /// Canonical path for this mode.
    pub fn path(&self) -> &'static str {
        match self {
            PathMode::Default => HISTORY_PATH,
            PathMode::Candles => CANDLES_PATH,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PathMode::Default => "Default API",
            PathMode::Candles => "Candles API",
        }
    }
}

/// Optional overrides applied to every request built during the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    endpoint_override: Option<String>,
    path_override: Option<String>,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from `REYA_API_ENDPOINT` / `REYA_API_PATH`. Blank
    /// values are ignored.
    pub fn from_env() -> Self {
        let read = |key: &str| {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            endpoint_override: read(ENDPOINT_ENV),
            path_override: read(PATH_ENV),
        }
    }

    // ── Endpoint override ────────────────────────────────────────────────

    pub fn endpoint_override(&self) -> Option<&str> {
        self.endpoint_override.as_deref()
    }

    /// Override the network base URL. Rejects blank input; nothing else is
    /// validated.
    pub fn set_endpoint_override(&mut self, endpoint: &str) -> Result<(), SdkError> {
        self.endpoint_override = Some(non_empty(endpoint, "endpoint")?);
        Ok(())
    }

    pub fn clear_endpoint_override(&mut self) {
        self.endpoint_override = None;
    }

    // ── Path override ────────────────────────────────────────────────────

    pub fn path_override(&self) -> Option<&str> {
        self.path_override.as_deref()
    }

    /// Override the API path. Rejects blank input; nothing else is validated.
    pub fn set_path_override(&mut self, path: &str) -> Result<(), SdkError> {
        self.path_override = Some(non_empty(path, "path")?);
        Ok(())
    }

    pub fn clear_path_override(&mut self) {
        self.path_override = None;
    }

    /// Select one of the two known request shapes.
    pub fn set_path_mode(&mut self, mode: PathMode) {
        self.path_override = Some(mode.path().to_string());
    }

    /// Testnet quick setup: `/api/candles` path, network default endpoint.
    pub fn testnet_candles_preset(&mut self) {
        self.path_override = Some(TESTNET_CANDLES_PATH.to_string());
        self.endpoint_override = None;
    }

    // ── Effective values ─────────────────────────────────────────────────

    /// Endpoint override if set, else the network default. No trailing `/`.
    pub fn effective_base_url(&self, network: Network) -> String {
        self.endpoint_override
            .as_deref()
            .unwrap_or_else(|| network.base_url())
            .trim_end_matches('/')
            .to_string()
    }

    /// Path override if set, else the candles path.
    pub fn effective_path(&self) -> &str {
        self.path_override.as_deref().unwrap_or(CANDLES_PATH)
    }

    pub fn path_mode(&self) -> PathMode {
        PathMode::for_path(self.effective_path())
    }
}

fn non_empty(value: &str, what: &str) -> Result<String, SdkError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SdkError::Validation(format!("{} override cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = SessionConfig::default();
        assert_eq!(session.effective_base_url(Network::Cronos), "https://api-cronos.reya.xyz");
        assert_eq!(session.effective_path(), "/api/trading/candles");
        assert_eq!(session.path_mode(), PathMode::Candles);
    }

    #[test]
    fn test_overrides_are_independent() {
        let mut session = SessionConfig::default();
        session.set_endpoint_override("  http://localhost:3000  ").unwrap();
        assert_eq!(session.effective_base_url(Network::Mainnet), "http://localhost:3000");
        assert_eq!(session.effective_path(), CANDLES_PATH);

        session.set_path_override("/api/tradingview/history").unwrap();
        assert_eq!(session.path_mode(), PathMode::Default);

        session.clear_endpoint_override();
        assert_eq!(session.effective_base_url(Network::Mainnet), "https://api.reya.xyz");
        assert_eq!(session.path_override(), Some("/api/tradingview/history"));

        session.clear_path_override();
        assert_eq!(session, SessionConfig::default());
    }

    #[test]
    fn test_blank_overrides_rejected() {
        let mut session = SessionConfig::default();
        assert!(matches!(
            session.set_endpoint_override("   "),
            Err(SdkError::Validation(_))
        ));
        assert!(session.set_path_override("").is_err());
        assert_eq!(session, SessionConfig::default());
    }

    #[test]
    fn test_unknown_path_is_default_mode() {
        let mut session = SessionConfig::default();
        session.set_path_override("/api/candles").unwrap();
        assert_eq!(session.path_mode(), PathMode::Default);
    }

    #[test]
    fn test_set_path_mode() {
        let mut session = SessionConfig::default();
        session.set_path_mode(PathMode::Default);
        assert_eq!(session.effective_path(), HISTORY_PATH);
        session.set_path_mode(PathMode::Candles);
        assert_eq!(session.path_mode(), PathMode::Candles);
    }

    #[test]
    fn test_testnet_preset_clears_endpoint() {
        let mut session = SessionConfig::default();
        session.set_endpoint_override("http://localhost:3000").unwrap();
        session.testnet_candles_preset();
        assert_eq!(session.endpoint_override(), None);
        assert_eq!(session.effective_path(), "/api/candles");
    }
}
