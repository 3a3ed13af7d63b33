//! Decoders for string-encoded scalar payloads.
//!
//! Each decoder takes the raw JSON of a single field and returns a typed
//! value or a [`DecodeError`](crate::error::DecodeError). Nothing is coerced:
//! a value that does not decode is an error, except that nullable fields
//! treat a missing value, `null`, `"null"` and `""` as absent.
//!
//! The submodules [`unsigned`], [`duration`], [`null_time`] and
//! [`null_answered_by`] expose the same decoders for `#[serde(with = ...)]`,
//! so the record that owns a field picks its decoder explicitly:
//!
//! ```
//! use serde::Deserialize;
//! use twilio_values::decode::{self, NullTime};
//!
//! #[derive(Deserialize)]
//! struct Message {
//!     #[serde(with = "decode::unsigned")]
//!     num_segments: u64,
//!     #[serde(default, with = "decode::null_time")]
//!     date_sent: NullTime,
//! }
//!
//! let msg: Message = serde_json::from_str(r#"{"num_segments": "2"}"#).unwrap();
//! assert_eq!(msg.num_segments, 2);
//! assert!(!msg.date_sent.is_valid());
//! ```

pub mod scalar;
pub mod timestamp;

pub use scalar::{
    decode_duration, decode_unsigned, parse_duration, parse_unsigned, NumMedia, Segments,
};
pub use timestamp::{
    decode_null_time, decode_time, encode_null_time, parse_time, NullTime, TIME_LAYOUT,
};

use crate::domain::nullable::{present_token, Nullable};
use crate::domain::{AnsweredBy, NullAnsweredBy};
use crate::error::DecodeResult;

/// Decode an answered-by field with the same absence rules as timestamps.
///
/// # Errors
///
/// Returns `DecodeError::MalformedPayload` if `payload` is neither a string
/// nor null.
pub fn decode_null_answered_by(payload: Option<&str>) -> DecodeResult<NullAnsweredBy> {
    let raw = match payload {
        Some(payload) => serde_json::from_str::<Option<String>>(payload)?,
        None => None,
    };

    Ok(present_token(raw.as_deref()).map(AnsweredBy::from).into())
}

/// Quoted unsigned counters, e.g. `"num_media": "1"`.
pub mod unsigned {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_unsigned(&s).map_err(de::Error::custom)
    }

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

/// Quoted whole seconds, e.g. `"duration": "42"`.
pub mod duration {
    use chrono::Duration;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_duration(&s).map_err(de::Error::custom)
    }

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.num_seconds())
    }
}

/// Nullable timestamps in [`TIME_LAYOUT`]. Pair with `#[serde(default)]`
/// so a missing field decodes as absent.
pub mod null_time {
    use super::{present_token, Nullable, NullTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NullTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match present_token(raw.as_deref()) {
            Some(value) => super::parse_time(value)
                .map(Nullable::present)
                .map_err(de::Error::custom),
            None => Ok(Nullable::absent()),
        }
    }

    pub fn serialize<S>(value: &NullTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.to_api_string() {
            Some(text) => serializer.serialize_str(&text),
            None => serializer.serialize_none(),
        }
    }
}

/// Nullable answered-by values. Pair with `#[serde(default)]`.
pub mod null_answered_by {
    use super::{present_token, AnsweredBy, NullAnsweredBy};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NullAnsweredBy, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(present_token(raw.as_deref()).map(AnsweredBy::from).into())
    }

    pub fn serialize<S>(value: &NullAnsweredBy, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_decode_null_answered_by() {
        assert_eq!(
            decode_null_answered_by(Some("\"human\"")).unwrap(),
            NullAnsweredBy::present(AnsweredBy::Human)
        );
        assert_eq!(
            decode_null_answered_by(Some("\"machine\"")).unwrap().into_option(),
            Some(AnsweredBy::Machine)
        );
    }

    #[test]
    fn test_decode_null_answered_by_absent_forms() {
        for payload in [None, Some("null"), Some("\"null\""), Some("\"\"")] {
            let value = decode_null_answered_by(payload).unwrap();
            assert!(!value.is_valid(), "{payload:?} should decode as absent");
        }
    }

    #[test]
    fn test_decode_null_answered_by_rejects_non_string() {
        assert!(matches!(
            decode_null_answered_by(Some("true")),
            Err(DecodeError::MalformedPayload(_))
        ));
    }
}
