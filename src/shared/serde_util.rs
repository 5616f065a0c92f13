//! Custom serde helpers for backend wire formats.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// A loosely-typed leaf value.
///
/// Upstream sends prices and timestamps as JSON numbers or as strings,
/// depending on the endpoint. Coercion happens in the domain `convert.rs`;
/// this type only records what arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Null,
    /// Booleans, arrays and objects, kept as a short description.
    Other(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{:?}", s),
            Scalar::Null => f.write_str("null"),
            Scalar::Other(desc) => f.write_str(desc),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Scalar, E> {
        Ok(Scalar::Other(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(Scalar::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
        Ok(Scalar::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
        Ok(Scalar::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Scalar, D::Error>
    where
        D: Deserializer<'de>,
    {
        Scalar::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Scalar, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut len = 0;
        while seq.next_element::<IgnoredAny>()?.is_some() {
            len += 1;
        }
        Ok(Scalar::Other(format!("array of {} element(s)", len)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Scalar, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Scalar::Other("object".to_string()))
    }
}

/// Optional [`Scalar`] that tells an absent key (`None`) from an explicit
/// `null` (`Some(Scalar::Null)`). Use with `#[serde(default, with = ...)]`.
pub mod present {
    use super::Scalar;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Scalar::deserialize(deserializer).map(Some)
    }
}

/// Deserializes `T` from a JSON object only.
///
/// Derived struct impls also accept sequences positionally; upstream rows
/// like `[t, o, h, l, c, v]` must not bind to named fields that way.
pub mod json_object {
    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer};
    use serde_json::{Map, Value};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        serde_json::from_value(Value::Object(map)).map_err(D::Error::custom)
    }
}

/// Deserializes a `Vec<T>` from an array of JSON objects only. See
/// [`json_object`].
pub mod json_objects {
    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer};
    use serde_json::{Map, Value};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Vec::<Map<String, Value>>::deserialize(deserializer)?
            .into_iter()
            .map(|map| serde_json::from_value(Value::Object(map)).map_err(D::Error::custom))
            .collect()
    }
}
