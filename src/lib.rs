//! # Reya Candles SDK
//!
//! Historical OHLC candles from the Reya networks, normalized into one
//! time-sorted series whatever shape the upstream response takes.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Newtypes, networks, candle normalization (always available, WASM-safe)
//! 2. **Session**: Endpoint/path overrides and the request builder
//! 3. **HTTP API**: `ChartHttp`, a thin JSON GET client over `reqwest`
//! 4. **High-Level Client**: `ChartClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reya_candles::prelude::*;
//!
//! let client = ChartClient::builder()
//!     .network(Network::Cronos)
//!     .build()?;
//!
//! let candles = client
//!     .candles()
//!     .latest_default(&Symbol::from("BTCUSDMARK"), &Resolution::from("60"))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and time helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire shapes, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and path constants.
pub mod network;

// ── Layer 2: Session ─────────────────────────────────────────────────────────

/// Session-scoped endpoint and path overrides.
pub mod session;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `ChartClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Resolution, Symbol};

    // Domain types: candles
    pub use crate::domain::candle::{
        build_request, normalize, ApplyOutcome, Candle, CandleRequest, CandleSeries, ChartState,
        FetchTicket, RequestSpec, TimeRange,
    };

    // Domain types: markets
    pub use crate::domain::market::MarketSymbol;

    // Errors
    pub use crate::error::{HttpError, NormalizeError, SdkError};

    // Network + session
    pub use crate::network::Network;
    pub use crate::session::{PathMode, SessionConfig};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CandlesClient, ChartClient, ChartClientBuilder, MarketsClient, SessionClient,
    };
}
