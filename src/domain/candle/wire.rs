//! Wire types for candle responses (REST).
//!
//! The upstream service family is not format-stable across networks and
//! paths. A payload is deserialized into [`CandlePayload`] and classified
//! into one closed [`Shape`] before any field is converted; conversion lives
//! in `convert.rs`.

use crate::shared::serde_util::{self, Scalar};
use serde::Deserialize;
use serde_json::Value;

/// Status value the TradingView history endpoint sends on success.
pub const STATUS_OK: &str = "ok";

static NULL: Scalar = Scalar::Null;

/// TradingView history body: parallel `t/o/h/l/c` arrays.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParallelArrays {
    #[serde(default)]
    pub s: Option<String>,
    #[serde(default)]
    pub errmsg: Option<String>,
    pub t: Vec<Scalar>,
    pub o: Vec<Scalar>,
    pub h: Vec<Scalar>,
    pub l: Vec<Scalar>,
    pub c: Vec<Scalar>,
}

impl ParallelArrays {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// All five arrays have the same length.
    pub fn is_aligned(&self) -> bool {
        let len = self.t.len();
        [&self.o, &self.h, &self.l, &self.c]
            .iter()
            .all(|a| a.len() == len)
    }
}

/// One candle object from the candles endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandleRow {
    #[serde(default, with = "serde_util::present")]
    pub timestamp: Option<Scalar>,
    #[serde(default, with = "serde_util::present")]
    pub time: Option<Scalar>,
    pub open: Scalar,
    pub high: Scalar,
    pub low: Scalar,
    pub close: Scalar,
}

impl CandleRow {
    /// The row carries a `timestamp` or `time` key, even if null.
    pub fn has_time_field(&self) -> bool {
        self.timestamp.is_some() || self.time.is_some()
    }

    /// `timestamp` unless absent or null, then `time`.
    pub fn time_value(&self) -> &Scalar {
        [&self.timestamp, &self.time]
            .into_iter()
            .flatten()
            .find(|v| !matches!(v, Scalar::Null))
            .unwrap_or(&NULL)
    }
}

/// `{candles: [...]}` around a flat array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WrappedRows {
    #[serde(with = "serde_util::json_objects")]
    pub candles: Vec<CandleRow>,
}

/// Bare TradingView status reply (`{s: "no_data"}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusReply {
    pub s: String,
    #[serde(default)]
    pub errmsg: Option<String>,
}

/// Every body layout the candle endpoints are known to send. Untagged:
/// the first variant that deserializes wins.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CandlePayload {
    Parallel(#[serde(with = "serde_util::json_object")] ParallelArrays),
    Flat(#[serde(with = "serde_util::json_objects")] Vec<CandleRow>),
    Wrapped(#[serde(with = "serde_util::json_object")] WrappedRows),
    Status(#[serde(with = "serde_util::json_object")] StatusReply),
}

/// Classified upstream payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// TradingView history: `{s?: "ok", t, o, h, l, c}`, equal lengths.
    Parallel(ParallelArrays),
    /// Top-level array of candle objects.
    Flat(Vec<CandleRow>),
    /// `{candles: [...]}` around a flat array.
    Wrapped(Vec<CandleRow>),
    /// TradingView-style status other than `"ok"` (`no_data`, `error`).
    Rejected {
        status: String,
        message: Option<String>,
    },
    Unknown,
}

impl Shape {
    pub fn classify(raw: &Value) -> Self {
        CandlePayload::deserialize(raw)
            .map(Shape::from)
            .unwrap_or(Shape::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Parallel(_) => "parallel-arrays",
            Shape::Flat(_) => "flat-array",
            Shape::Wrapped(_) => "wrapped-array",
            Shape::Rejected { .. } => "rejected",
            Shape::Unknown => "unknown",
        }
    }
}

impl From<CandlePayload> for Shape {
    fn from(payload: CandlePayload) -> Self {
        match payload {
            CandlePayload::Parallel(arrays) => {
                if let Some(status) = arrays.s.clone().filter(|s| s.as_str() != STATUS_OK) {
                    return Shape::Rejected {
                        status,
                        message: arrays.errmsg,
                    };
                }
                if arrays.is_aligned() {
                    Shape::Parallel(arrays)
                } else {
                    Shape::Unknown
                }
            }
            CandlePayload::Flat(rows) if rows.iter().all(CandleRow::has_time_field) => {
                Shape::Flat(rows)
            }
            CandlePayload::Wrapped(wrapped)
                if wrapped.candles.iter().all(CandleRow::has_time_field) =>
            {
                Shape::Wrapped(wrapped.candles)
            }
            CandlePayload::Status(reply) if reply.s != STATUS_OK => Shape::Rejected {
                status: reply.s,
                message: reply.errmsg,
            },
            _ => Shape::Unknown,
        }
    }
}

/// Short description of a payload for error messages.
pub fn describe(raw: &Value) -> String {
    match raw {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => format!("array of {} element(s)", items.len()),
        Value::Object(obj) => {
            let keys: Vec<&str> = obj.keys().map(String::as_str).take(8).collect();
            format!("object with keys [{}]", keys.join(", "))
        }
    }
}
