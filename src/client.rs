//! High-level client: `ChartClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`; the
//! session surface lives in `session/client.rs`. This module keeps the
//! builder, the shared session state and the accessor methods.

use crate::domain::candle::client::Candles;
use crate::domain::market::client::Markets;
use crate::error::SdkError;
use crate::http::{ChartHttp, DEFAULT_TIMEOUT};
use crate::network::Network;
use crate::session::client::Session;
use crate::session::SessionConfig;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::candle::client::Candles as CandlesClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::session::client::Session as SessionClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors: `client.candles()`,
/// `client.markets()`, `client.session()`. Clones share the session
/// overrides.
pub struct ChartClient {
    pub(crate) http: ChartHttp,
    /// Default network for calls that don't name one.
    pub(crate) network: Network,
    /// Endpoint/path overrides, scoped to this client's lifetime.
    pub(crate) session_config: Arc<RwLock<SessionConfig>>,
}

impl ChartClient {
    pub fn builder() -> ChartClientBuilder {
        ChartClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn session(&self) -> Session<'_> {
        Session { client: self }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// A client for another network sharing this client's session and
    /// connection pool.
    pub fn with_network(&self, network: Network) -> Self {
        Self {
            network,
            ..self.clone()
        }
    }
}

impl Clone for ChartClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            network: self.network,
            session_config: self.session_config.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ChartClientBuilder {
    network: Network,
    timeout: Duration,
    session: SessionConfig,
    endpoint_override: Option<String>,
    path_override: Option<String>,
}

impl Default for ChartClientBuilder {
    fn default() -> Self {
        Self {
            network: Network::default(),
            timeout: DEFAULT_TIMEOUT,
            session: SessionConfig::default(),
            endpoint_override: None,
            path_override: None,
        }
    }
}

impl ChartClientBuilder {
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Request timeout (native targets only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start from an existing session config (e.g. `SessionConfig::from_env()`).
    pub fn session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }

    pub fn endpoint_override(mut self, endpoint: &str) -> Self {
        self.endpoint_override = Some(endpoint.to_string());
        self
    }

    pub fn path_override(mut self, path: &str) -> Self {
        self.path_override = Some(path.to_string());
        self
    }

    pub fn build(self) -> Result<ChartClient, SdkError> {
        let mut session = self.session;
        if let Some(endpoint) = self.endpoint_override.as_deref() {
            session.set_endpoint_override(endpoint)?;
        }
        if let Some(path) = self.path_override.as_deref() {
            session.set_path_override(path)?;
        }

        Ok(ChartClient {
            http: ChartHttp::new(self.timeout)?,
            network: self.network,
            session_config: Arc::new(RwLock::new(session)),
        })
    }
}
