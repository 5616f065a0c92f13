//! Markets sub-client: symbol list with endpoint fallback.

use super::{convert, MarketSymbol};
use crate::client::ChartClient;
use crate::error::SdkError;
use crate::network::{Network, MARKET_LIST_PATHS};

/// Sub-client for market list operations.
pub struct Markets<'a> {
    pub(crate) client: &'a ChartClient,
}

impl<'a> Markets<'a> {
    /// List symbols on `network`.
    ///
    /// Tries `/api/markets`, `/api/tradingview/symbols`, `/api/trading/markets`
    /// in that order; the first endpoint that answers with a recognizable
    /// list wins. The session endpoint override applies, the path override
    /// does not.
    pub async fn list(&self, network: Network) -> Result<Vec<MarketSymbol>, SdkError> {
        let base = self
            .client
            .session_config
            .read()
            .await
            .effective_base_url(network);

        let mut last_error = None;
        for path in MARKET_LIST_PATHS {
            let url = format!("{}{}", base, path);
            let result = match self.client.http.get_json(&url).await {
                Ok(raw) => convert::decode_market_list(&raw).map_err(SdkError::from),
                Err(e) => Err(SdkError::from(e)),
            };
            match result {
                Ok(symbols) => {
                    tracing::debug!(count = symbols.len(), "Loaded market list from {}", url);
                    return Ok(symbols);
                }
                Err(e) => {
                    tracing::warn!("Market list endpoint {} failed: {}", url, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| SdkError::Other("No market list endpoints configured".to_string())))
    }

    /// [`list`](Self::list) on the client's default network, falling back to
    /// the built-in symbols when every endpoint fails.
    pub async fn list_or_default(&self) -> Vec<MarketSymbol> {
        match self.list(self.client.network).await {
            Ok(symbols) if !symbols.is_empty() => symbols,
            Ok(_) => MarketSymbol::defaults(),
            Err(e) => {
                tracing::warn!("Using built-in symbol list: {}", e);
                MarketSymbol::defaults()
            }
        }
    }
}
