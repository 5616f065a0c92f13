//! Conversion: classified wire shape → `CandleSeries`.
//!
//! Malformed field values fail the whole series instead of leaking `NaN`
//! into the chart.

use super::wire::{self, CandleRow, ParallelArrays, Shape};
use super::{Candle, CandleSeries};
use crate::error::NormalizeError;
use crate::shared::serde_util::Scalar;
use crate::shared::time::{parse_float_prefix, parse_iso8601, to_epoch_secs};
use serde_json::Value;

/// Normalize an arbitrary upstream payload into an ascending candle series.
pub fn normalize(raw: &Value) -> Result<CandleSeries, NormalizeError> {
    let shape = Shape::classify(raw);
    tracing::debug!(shape = shape.name(), "Classified candle payload");

    match shape {
        Shape::Parallel(arrays) => from_parallel(&arrays),
        Shape::Flat(rows) | Shape::Wrapped(rows) => from_rows(&rows),
        Shape::Rejected { status, message } => Err(NormalizeError::Rejected {
            status,
            message: message.unwrap_or_default(),
        }),
        Shape::Unknown => Err(NormalizeError::UnrecognizedShape(wire::describe(raw))),
    }
}

impl TryFrom<&Value> for CandleSeries {
    type Error = NormalizeError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        normalize(raw)
    }
}

/// Zip parallel arrays index-wise, then sort. Times are already in seconds.
fn from_parallel(arrays: &ParallelArrays) -> Result<CandleSeries, NormalizeError> {
    let mut candles = Vec::with_capacity(arrays.len());
    for index in 0..arrays.len() {
        let t = &arrays.t[index];
        let time = match t {
            Scalar::Number(v) if v.is_finite() => v.floor() as i64,
            _ => {
                return Err(NormalizeError::InvalidTimestamp {
                    index,
                    value: t.to_string(),
                })
            }
        };
        candles.push(Candle {
            time,
            open: price(&arrays.o[index], index, "open")?,
            high: price(&arrays.h[index], index, "high")?,
            low: price(&arrays.l[index], index, "low")?,
            close: price(&arrays.c[index], index, "close")?,
        });
    }
    Ok(CandleSeries::from_unsorted(candles))
}

/// Coerce each candle object, then sort ascending by time.
fn from_rows(rows: &[CandleRow]) -> Result<CandleSeries, NormalizeError> {
    let candles = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            Ok(Candle {
                time: row_timestamp(row.time_value(), index)?,
                open: price(&row.open, index, "open")?,
                high: price(&row.high, index, "high")?,
                low: price(&row.low, index, "low")?,
                close: price(&row.close, index, "close")?,
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;
    Ok(CandleSeries::from_unsorted(candles))
}

/// Numbers pass through; strings follow `parseFloat` prefix semantics.
fn price(value: &Scalar, index: usize, field: &'static str) -> Result<f64, NormalizeError> {
    let parsed = match value {
        Scalar::Number(n) => Some(*n),
        Scalar::Text(s) => parse_float_prefix(s),
        Scalar::Null | Scalar::Other(_) => None,
    };
    parsed.ok_or_else(|| NormalizeError::InvalidField {
        index,
        field,
        value: value.to_string(),
    })
}

/// Millisecond magnitudes are reduced to seconds; non-numeric strings are
/// read as ISO-8601.
fn row_timestamp(value: &Scalar, index: usize) -> Result<i64, NormalizeError> {
    let secs = match value {
        Scalar::Number(n) => to_epoch_secs(*n),
        Scalar::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => to_epoch_secs(n),
            Err(_) => parse_iso8601(s),
        },
        Scalar::Null | Scalar::Other(_) => None,
    };
    secs.ok_or_else(|| NormalizeError::InvalidTimestamp {
        index,
        value: value.to_string(),
    })
}
