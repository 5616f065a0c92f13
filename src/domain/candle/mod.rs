//! Candle domain: canonical OHLC records, request building, normalization.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod request;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use convert::normalize;
pub use request::{build_request, CandleRequest, RequestSpec, TimeRange};
pub use state::{ApplyOutcome, ChartState, FetchTicket};
pub use wire::Shape;

/// One OHLC price record for a time bucket.
///
/// Serializes as `{time, open, high, low, close}`, the record layout the
/// chart renderer consumes. `low <= open, close <= high` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Unix timestamp in seconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }
}

/// Candles in ascending `time` order. Duplicate timestamps are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandleSeries(Vec<Candle>);

impl CandleSeries {
    /// Build a series from records in arbitrary order; sorts by time.
    pub fn from_unsorted(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.time);
        Self(candles)
    }

    pub fn as_slice(&self) -> &[Candle] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Candle> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Candle> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Candle> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsorted_orders_by_time() {
        let series = CandleSeries::from_unsorted(vec![
            Candle::new(300, 1.0, 1.0, 1.0, 1.0),
            Candle::new(100, 2.0, 2.0, 2.0, 2.0),
            Candle::new(200, 3.0, 3.0, 3.0, 3.0),
        ]);
        let times: Vec<i64> = series.iter().map(|c| c.time).collect();
        assert_eq!(times, vec![100, 200, 300]);
    }

    #[test]
    fn test_series_serializes_as_renderer_records() {
        let series = CandleSeries::from_unsorted(vec![Candle::new(100, 1.0, 3.0, 0.0, 2.0)]);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"time": 100, "open": 1.0, "high": 3.0, "low": 0.0, "close": 2.0}])
        );
    }
}
