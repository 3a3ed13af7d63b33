//! Decoders for integers the API sends as quoted strings.

use crate::error::{DecodeError, DecodeResult};
use chrono::Duration;

/// Number of segments an SMS body was split into.
pub type Segments = u64;

/// Number of media attachments on a message.
pub type NumMedia = u64;

/// Unwrap a JSON string literal, e.g. `"\"5\""` into `5`.
pub(crate) fn unquote(payload: &str) -> DecodeResult<String> {
    Ok(serde_json::from_str::<String>(payload)?)
}

/// Decode a quoted unsigned counter such as `"\"3\""`.
///
/// # Errors
///
/// - `DecodeError::MalformedPayload` if `payload` is not a JSON string
/// - `DecodeError::NumericFormat` if the string is not an unsigned integer
pub fn decode_unsigned(payload: &str) -> DecodeResult<u64> {
    parse_unsigned(&unquote(payload)?)
}

/// Parse an already unquoted unsigned base-10 integer.
///
/// Signs, whitespace and fractions are all rejected.
pub fn parse_unsigned(value: &str) -> DecodeResult<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::NumericFormat {
            value: value.to_string(),
            reason: "expected an unsigned base-10 integer".to_string(),
        });
    }

    value.parse::<u64>().map_err(|e| DecodeError::NumericFormat {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Decode a quoted whole number of seconds such as `"\"42\""`.
///
/// # Errors
///
/// - `DecodeError::MalformedPayload` if `payload` is not a JSON string
/// - `DecodeError::NumericFormat` if the string is not an integer or is
///   too large to represent as a duration
pub fn decode_duration(payload: &str) -> DecodeResult<Duration> {
    parse_duration(&unquote(payload)?)
}

/// Parse an already unquoted integer count of seconds.
pub fn parse_duration(value: &str) -> DecodeResult<Duration> {
    let seconds = value.parse::<i64>().map_err(|e| DecodeError::NumericFormat {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    Duration::try_seconds(seconds).ok_or_else(|| DecodeError::NumericFormat {
        value: value.to_string(),
        reason: "duration out of range".to_string(),
    })
}
