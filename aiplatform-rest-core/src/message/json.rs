//! # Canonical JSON helpers
//!
//! `serde` adapters implementing the canonical JSON mapping for field kinds that do not map
//! one-to-one onto serde's data model. Message types reference them with
//! `#[serde(with = "...")]` and `#[serde(skip_serializing_if = "...")]`.
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

/// `skip_serializing_if` predicate omitting implicit-presence defaults.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber<N> {
    String(String),
    Number(N),
}

/// 64-bit signed integers travel as decimal strings; numbers are accepted on input.
pub mod int64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match StringOrNumber::<i64>::deserialize(deserializer)? {
            StringOrNumber::String(s) => s.parse().map_err(D::Error::custom),
            StringOrNumber::Number(n) => Ok(n),
        }
    }
}

/// 64-bit unsigned integers travel as decimal strings; numbers are accepted on input.
pub mod uint64 {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match StringOrNumber::<u64>::deserialize(deserializer)? {
            StringOrNumber::String(s) => s.parse().map_err(D::Error::custom),
            StringOrNumber::Number(n) => Ok(n),
        }
    }
}

/// Bytes travel as standard base64; the URL-safe alphabet is accepted on input.
pub mod bytes {
    use super::*;
    use base64::{
        Engine,
        engine::general_purpose::{STANDARD, URL_SAFE},
    };

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(&encoded)
            .or_else(|_| URL_SAFE.decode(&encoded))
            .map_err(D::Error::custom)
    }
}

/// `google.protobuf.Timestamp` as an RFC-3339 string (`2024-01-02T03:04:05.123456789Z`).
pub mod timestamp {
    use super::*;
    use prost_types::Timestamp;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(
        value: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(timestamp) => serializer.serialize_str(&timestamp.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| Timestamp::from_str(&s).map_err(D::Error::custom))
            .transpose()
    }
}

/// `google.protobuf.Duration` as seconds with an `s` suffix (`"1.500s"`), converted through
/// [`prost_types::Duration`].
pub mod duration {
    use super::*;
    use prost_types::DurationError;
    use std::time::Duration;

    pub fn format(value: &Duration) -> Result<String, DurationError> {
        prost_types::Duration::try_from(*value).map(|duration| duration.to_string())
    }

    /// Negative durations are rejected: they have no `std::time::Duration` counterpart.
    pub fn parse(value: &str) -> Result<Duration, DurationError> {
        value.parse::<prost_types::Duration>()?.try_into()
    }

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => {
                serializer.serialize_str(&format(duration).map_err(serde::ser::Error::custom)?)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| parse(&s).map_err(D::Error::custom))
            .transpose()
    }
}
