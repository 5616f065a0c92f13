//! Chart state container: app-owned, SDK-provided update logic.
//!
//! Every fetch takes a [`FetchTicket`]. Only the ticket of the most recently
//! started fetch may write, so a slow response from a superseded selection
//! never replaces newer data.

use super::CandleSeries;
use crate::error::SdkError;
use crate::network::Network;
use crate::shared::{Resolution, Symbol};

/// Handle for one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub network: Network,
    pub symbol: Symbol,
    pub resolution: Resolution,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a completed fetch did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Candles replaced.
    Replaced,
    /// Fetch failed; previous candles kept.
    Failed,
    /// A newer fetch was started; result dropped.
    Stale,
}

/// Candle data currently shown by one chart.
///
/// The app owns instances of this type. The SDK provides update methods.
#[derive(Debug, Default)]
pub struct ChartState {
    generation: u64,
    loading: bool,
    candles: CandleSeries,
    shown: Option<(Network, Symbol, Resolution)>,
    last_error: Option<String>,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch cycle: supersedes any in-flight fetch and marks the
    /// chart as loading.
    pub fn begin_fetch(
        &mut self,
        network: Network,
        symbol: Symbol,
        resolution: Resolution,
    ) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            network,
            symbol,
            resolution,
        }
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// Success replaces all candles. Failure keeps the previous candles and
    /// records the error. Results for superseded tickets are dropped.
    pub fn apply(
        &mut self,
        ticket: FetchTicket,
        result: Result<CandleSeries, SdkError>,
    ) -> ApplyOutcome {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                symbol = %ticket.symbol,
                "Dropping stale candle response"
            );
            return ApplyOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(series) => {
                self.candles = series;
                self.shown = Some((ticket.network, ticket.symbol, ticket.resolution));
                self.last_error = None;
                ApplyOutcome::Replaced
            }
            Err(e) => {
                tracing::error!(symbol = %ticket.symbol, resolution = %ticket.resolution, "Candle fetch failed: {}", e);
                self.last_error = Some(e.to_string());
                ApplyOutcome::Failed
            }
        }
    }

    pub fn candles(&self) -> &CandleSeries {
        &self.candles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error from the latest completed fetch, if it failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Network, symbol and resolution the current candles belong to.
    pub fn shown(&self) -> Option<&(Network, Symbol, Resolution)> {
        self.shown.as_ref()
    }
}
