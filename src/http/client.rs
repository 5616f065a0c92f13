//! Low-level HTTP client: `ChartHttp`.
//!
//! One GET per call, no retries. Returns untyped JSON; shape classification
//! happens in the candle and market domains. Internal to the SDK: the
//! high-level client wraps this.

use crate::error::HttpError;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the price-history APIs.
#[derive(Debug, Clone)]
pub struct ChartHttp {
    client: Client,
}

impl ChartHttp {
    /// Build a client. `timeout` applies on native targets only; in the
    /// browser the fetch API owns timeouts.
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `url` (query string already attached) and parse the body as JSON.
    ///
    /// Exactly one attempt is made.
    pub async fn get_json(&self, url: &str) -> Result<Value, HttpError> {
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await.map_err(map_reqwest)?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<Value>().await.map_err(map_reqwest)?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status_code, "Request to {} failed", url);

        Err(status_error(status_code, body_text))
    }
}

fn map_reqwest(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Reqwest(e)
    }
}

/// Map a non-2xx status onto `HttpError`.
pub(crate) fn status_error(status_code: u16, body_text: String) -> HttpError {
    match status_code {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body_text),
        429 => HttpError::RateLimited,
        400..=499 => HttpError::BadRequest(body_text),
        _ => HttpError::ServerError {
            status: status_code,
            body: body_text,
        },
    }
}
