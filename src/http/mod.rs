//! HTTP client layer: `ChartHttp`, one attempt per request.

pub mod client;

pub use client::{ChartHttp, DEFAULT_TIMEOUT};
