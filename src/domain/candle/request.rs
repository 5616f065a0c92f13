//! Request builder: `RequestSpec` + `SessionConfig` → upstream candle request.

use crate::error::SdkError;
use crate::network::{Network, CANDLES_PATH};
use crate::session::{PathMode, SessionConfig};
use crate::shared::time::now_secs;
use crate::shared::{Resolution, Symbol};
use serde::Serialize;

/// Half-open request window in Unix seconds, `from < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub from: i64,
    pub to: i64,
}

impl TimeRange {
    pub fn new(from: i64, to: i64) -> Result<Self, SdkError> {
        if from >= to {
            return Err(SdkError::Validation(format!(
                "from ({}) must be before to ({})",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    /// Default window for a resolution, ending at `now`.
    pub fn lookback(resolution: &Resolution, now: i64) -> Self {
        Self {
            from: now - resolution.lookback_secs(),
            to: now,
        }
    }

    /// Default window ending at the current time.
    pub fn lookback_from_now(resolution: &Resolution) -> Self {
        Self::lookback(resolution, now_secs())
    }

    pub fn duration_secs(&self) -> i64 {
        self.to - self.from
    }
}

/// Everything needed to build one candle request. Constructed per fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub network: Network,
    /// Path mode selected at the time the spec was made. The builder itself
    /// branches on the session's effective path.
    pub path_mode: PathMode,
    pub symbol: Symbol,
    pub resolution: Resolution,
    pub range: TimeRange,
}

impl RequestSpec {
    pub fn new(
        network: Network,
        path_mode: PathMode,
        symbol: impl Into<Symbol>,
        resolution: impl Into<Resolution>,
        range: TimeRange,
    ) -> Self {
        Self {
            network,
            path_mode,
            symbol: symbol.into(),
            resolution: resolution.into(),
            range,
        }
    }

    /// Spec using the resolution's default lookback window ending now and
    /// the session's current path mode.
    pub fn with_default_range(
        network: Network,
        session: &SessionConfig,
        symbol: impl Into<Symbol>,
        resolution: impl Into<Resolution>,
    ) -> Self {
        let resolution = resolution.into();
        let range = TimeRange::lookback_from_now(&resolution);
        Self::new(network, session.path_mode(), symbol, resolution, range)
    }
}

/// Fully resolved upstream request: URL without query plus query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleRequest {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

impl CandleRequest {
    /// URL with the query string appended.
    pub fn full_url(&self) -> Result<String, SdkError> {
        if self.query.is_empty() {
            return Ok(self.url.clone());
        }
        let qs = serde_urlencoded::to_string(&self.query)
            .map_err(|e| SdkError::Validation(format!("Invalid query parameters: {}", e)))?;
        Ok(format!("{}?{}", self.url, qs))
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Build the upstream request for `spec` under the session's overrides.
///
/// The effective path decides the shape: the candles path embeds symbol and
/// resolution as path segments, any other path takes all four as query
/// parameters.
pub fn build_request(spec: &RequestSpec, session: &SessionConfig) -> CandleRequest {
    let base = session.effective_base_url(spec.network);
    let path = session.effective_path();
    let from = spec.range.from.to_string();
    let to = spec.range.to.to_string();

    if path == CANDLES_PATH {
        CandleRequest {
            url: format!(
                "{}{}/{}/{}",
                base,
                path,
                urlencoding::encode(spec.symbol.as_str()),
                urlencoding::encode(spec.resolution.as_str())
            ),
            query: vec![("from", from), ("to", to)],
        }
    } else {
        CandleRequest {
            url: format!("{}{}", base, path),
            query: vec![
                ("symbol", spec.symbol.to_string()),
                ("resolution", spec.resolution.to_string()),
                ("from", from),
                ("to", to),
            ],
        }
    }
}
