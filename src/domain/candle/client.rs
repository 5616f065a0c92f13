//! Candles sub-client: one request, one normalization per fetch.

use super::request::{build_request, RequestSpec};
use super::state::FetchTicket;
use super::{convert, CandleSeries};
use crate::client::ChartClient;
use crate::error::SdkError;
use crate::network::Network;
use crate::shared::{Resolution, Symbol};
use serde_json::Value;

/// Sub-client for candle queries.
pub struct Candles<'a> {
    pub(crate) client: &'a ChartClient,
}

impl<'a> Candles<'a> {
    /// Fetch and normalize the candles described by `spec`.
    ///
    /// The request is built against a snapshot of the session overrides
    /// taken now. No retries.
    pub async fn get(&self, spec: &RequestSpec) -> Result<CandleSeries, SdkError> {
        let raw = self.get_raw(spec).await?;
        let series = convert::normalize(&raw).map_err(|e| {
            tracing::error!(symbol = %spec.symbol, resolution = %spec.resolution, "Could not normalize candle response: {}", e);
            SdkError::from(e)
        })?;
        tracing::info!(
            symbol = %spec.symbol,
            resolution = %spec.resolution,
            count = series.len(),
            "Loaded candles"
        );
        Ok(series)
    }

    /// Fetch the upstream payload for `spec` without normalizing it.
    pub async fn get_raw(&self, spec: &RequestSpec) -> Result<Value, SdkError> {
        let request = {
            let session = self.client.session_config.read().await;
            build_request(spec, &session)
        };
        let url = request.full_url()?;
        if !spec.resolution.is_known() {
            tracing::warn!("Unknown resolution {}, forwarding as-is", spec.resolution);
        }
        tracing::debug!(network = %spec.network, path_mode = ?spec.path_mode, "Requesting candles from {}", url);

        self.client.http.get_json(&url).await.map_err(|e| {
            tracing::error!("Error fetching candle data from {}: {}", url, e);
            SdkError::from(e)
        })
    }

    /// Candles for the default lookback window of `resolution`, ending now.
    pub async fn latest(
        &self,
        network: Network,
        symbol: &Symbol,
        resolution: &Resolution,
    ) -> Result<CandleSeries, SdkError> {
        let spec = {
            let session = self.client.session_config.read().await;
            RequestSpec::with_default_range(network, &session, symbol.clone(), resolution.clone())
        };
        self.get(&spec).await
    }

    /// Same as [`latest`](Self::latest) on the client's default network.
    pub async fn latest_default(
        &self,
        symbol: &Symbol,
        resolution: &Resolution,
    ) -> Result<CandleSeries, SdkError> {
        self.latest(self.client.network, symbol, resolution).await
    }

    /// Fetch for a ticket issued by `ChartState::begin_fetch`; hand the
    /// result back to `ChartState::apply` with the same ticket.
    pub async fn fetch_for(&self, ticket: &FetchTicket) -> Result<CandleSeries, SdkError> {
        self.latest(ticket.network, &ticket.symbol, &ticket.resolution)
            .await
    }
}
