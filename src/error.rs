//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors raised while turning an upstream payload into a candle series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("Unrecognized response shape: {0}")]
    UnrecognizedShape(String),

    #[error("Upstream returned status {status:?}: {message}")]
    Rejected { status: String, message: String },

    #[error("Invalid {field} at index {index}: {value}")]
    InvalidField {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid timestamp at index {index}: {value}")]
    InvalidTimestamp { index: usize, value: String },
}

impl SdkError {
    /// True for failures of the HTTP transport or a non-2xx status.
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Http(_))
    }
}
