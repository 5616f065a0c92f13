//! Session sub-client: read and mutate the overrides a `ChartClient` owns.

use super::{PathMode, SessionConfig};
use crate::client::ChartClient;
use crate::error::SdkError;

/// Sub-client for the session configuration surface.
pub struct Session<'a> {
    pub(crate) client: &'a ChartClient,
}

impl<'a> Session<'a> {
    /// Snapshot of the current overrides.
    pub async fn get(&self) -> SessionConfig {
        self.client.session_config.read().await.clone()
    }

    /// Replace the whole configuration.
    pub async fn replace(&self, config: SessionConfig) {
        *self.client.session_config.write().await = config;
    }

    pub async fn endpoint_override(&self) -> Option<String> {
        self.client
            .session_config
            .read()
            .await
            .endpoint_override()
            .map(str::to_string)
    }

    pub async fn set_endpoint_override(&self, endpoint: &str) -> Result<(), SdkError> {
        self.client
            .session_config
            .write()
            .await
            .set_endpoint_override(endpoint)?;
        tracing::info!("Using custom API endpoint {}", endpoint.trim());
        Ok(())
    }

    pub async fn clear_endpoint_override(&self) {
        self.client
            .session_config
            .write()
            .await
            .clear_endpoint_override();
    }

    pub async fn path_override(&self) -> Option<String> {
        self.client
            .session_config
            .read()
            .await
            .path_override()
            .map(str::to_string)
    }

    pub async fn set_path_override(&self, path: &str) -> Result<(), SdkError> {
        self.client
            .session_config
            .write()
            .await
            .set_path_override(path)?;
        tracing::info!("Using custom API path {}", path.trim());
        Ok(())
    }

    pub async fn clear_path_override(&self) {
        self.client.session_config.write().await.clear_path_override();
    }

    pub async fn set_path_mode(&self, mode: PathMode) {
        self.client.session_config.write().await.set_path_mode(mode);
    }

    pub async fn path_mode(&self) -> PathMode {
        self.client.session_config.read().await.path_mode()
    }

    /// Testnet quick setup: `/api/candles`, default endpoint.
    pub async fn testnet_candles_preset(&self) {
        self.client
            .session_config
            .write()
            .await
            .testnet_candles_preset();
    }

    /// Base URL requests on the client's network currently go to.
    pub async fn effective_base_url(&self) -> String {
        self.client
            .session_config
            .read()
            .await
            .effective_base_url(self.client.network)
    }
}
