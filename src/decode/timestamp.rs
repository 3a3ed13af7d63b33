//! Timestamps in the API's RFC 1123 layout with a numeric zone.

use super::scalar::unquote;
use crate::domain::nullable::{present_token, Nullable};
use crate::error::{DecodeError, DecodeResult};
use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;

/// The layout the API uses, e.g. `Mon, 2 Jan 2006 15:04:05 -0700`.
///
/// `%d` accepts both `2` and `02` when parsing.
pub const TIME_LAYOUT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Exact shape of [`TIME_LAYOUT`]. chrono alone also accepts two-digit
/// years, `-07:00` offsets and a missing space after the comma.
static TIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{3}, \d{1,2} [A-Za-z]{3} \d{4} \d{2}:\d{2}:\d{2} [+-]\d{4}$")
        .expect("Failed to compile timestamp shape regex")
});

/// Same layout with an unpadded day, for encoding.
const ENCODE_LAYOUT: &str = "%a, %-d %b %Y %H:%M:%S %z";

/// A timestamp the API may omit, send as `null`, or send as `""`.
pub type NullTime = Nullable<DateTime<FixedOffset>>;

impl Nullable<DateTime<FixedOffset>> {
    /// Parse a bare string in [`TIME_LAYOUT`], yielding an absent value if it
    /// does not parse.
    pub fn from_api_str(value: &str) -> Self {
        parse_time(value).ok().into()
    }

    /// The instant in the API layout, or `None` when absent.
    pub fn to_api_string(&self) -> Option<String> {
        self.value().map(|t| t.format(ENCODE_LAYOUT).to_string())
    }

    /// The instant as RFC 3339, or `None` when absent.
    pub fn to_rfc3339(&self) -> Option<String> {
        self.value().map(DateTime::to_rfc3339)
    }
}

/// Parse an already unquoted timestamp in [`TIME_LAYOUT`].
pub fn parse_time(value: &str) -> DecodeResult<DateTime<FixedOffset>> {
    if !TIME_SHAPE.is_match(value) {
        return Err(DecodeError::TimestampFormat {
            value: value.to_string(),
            reason: "expected layout \"Mon, 2 Jan 2006 15:04:05 -0700\"".to_string(),
        });
    }

    DateTime::parse_from_str(value, TIME_LAYOUT).map_err(|e| DecodeError::TimestampFormat {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Decode a timestamp field.
///
/// `payload` is the raw JSON of the field, or `None` if the field was
/// missing. A missing field, JSON `null`, `"null"` and `""` all decode to an
/// absent value.
///
/// # Errors
///
/// - `DecodeError::MalformedPayload` if `payload` is neither a string nor null
/// - `DecodeError::TimestampFormat` if the string is not in [`TIME_LAYOUT`]
pub fn decode_null_time(payload: Option<&str>) -> DecodeResult<NullTime> {
    let raw = match payload {
        Some(payload) => serde_json::from_str::<Option<String>>(payload)?,
        None => None,
    };

    match present_token(raw.as_deref()) {
        Some(value) => parse_time(value).map(Nullable::present),
        None => Ok(Nullable::absent()),
    }
}

/// Encode a timestamp field: `null` when absent, otherwise a quoted string
/// in the API layout.
pub fn encode_null_time(time: &NullTime) -> String {
    match time.to_api_string() {
        Some(value) => format!("\"{}\"", value),
        None => "null".to_string(),
    }
}

/// Decode a quoted, non-nullable timestamp.
pub fn decode_time(payload: &str) -> DecodeResult<DateTime<FixedOffset>> {
    parse_time(&unquote(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn reference_time() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2006, 1, 2, 15, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_decode_null_time_present() {
        let time = decode_null_time(Some("\"Mon, 2 Jan 2006 15:04:05 -0700\"")).unwrap();
        assert!(time.is_valid());
        assert_eq!(time.value(), Some(&reference_time()));
        assert_eq!(
            time.value().unwrap().with_timezone(&Utc),
            Utc.with_ymd_and_hms(2006, 1, 2, 22, 4, 5).unwrap()
        );
    }

    #[test]
    fn test_decode_null_time_padded_day() {
        let time = decode_null_time(Some("\"Tue, 05 Jan 2016 09:30:00 +0000\"")).unwrap();
        assert!(time.is_valid());
    }

    #[test]
    fn test_decode_null_time_absent_forms() {
        for payload in [None, Some("null"), Some("\"null\""), Some("\"\"")] {
            let time = decode_null_time(payload).unwrap();
            assert!(!time.is_valid(), "{payload:?} should decode as absent");
        }
    }

    #[test]
    fn test_decode_null_time_rejects_other_layouts() {
        let rejected = [
            "2006-01-02T15:04:05-07:00",
            "Mon, 2 Jan 2006 15:04:05 MST",
            "yesterday",
            "Mon, 2 Jan 06 15:04:05 -0700",
            "Mon, 2 Jan 2006 15:04:05 -07:00",
            "Mon,2 Jan 2006 15:04:05 -0700",
            "Mon, 2 Jan 2006 15:04:05 -0700 ",
            "Mon, 2 Jan 2006 5:04:05 -0700",
        ];
        for value in rejected {
            let payload = format!("\"{}\"", value);
            let err = decode_null_time(Some(&payload)).unwrap_err();
            assert!(
                matches!(err, DecodeError::TimestampFormat { .. }),
                "{value} should be a timestamp format error, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_time_rejects_two_digit_year() {
        let err = parse_time("Mon, 2 Jan 06 15:04:05 -0700").unwrap_err();
        match err {
            DecodeError::TimestampFormat { value, .. } => {
                assert_eq!(value, "Mon, 2 Jan 06 15:04:05 -0700")
            }
            other => panic!("Expected TimestampFormat error, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_time_rejects_mismatched_weekday() {
        // 2 Jan 2006 was a Monday
        let err = parse_time("Tue, 2 Jan 2006 15:04:05 -0700").unwrap_err();
        assert!(matches!(err, DecodeError::TimestampFormat { .. }));
        assert!(parse_time("Mon, 2 Jan 2006 15:04:05 -0700").is_ok());
    }

    #[test]
    fn test_decode_null_time_rejects_non_string() {
        let err = decode_null_time(Some("1136239445")).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedPayload(_)));
    }

    #[test]
    fn test_encode_null_time() {
        assert_eq!(encode_null_time(&NullTime::absent()), "null");
        assert_eq!(
            encode_null_time(&NullTime::present(reference_time())),
            "\"Mon, 2 Jan 2006 15:04:05 -0700\""
        );
    }

    #[test]
    fn test_null_time_round_trip() {
        let present = NullTime::present(reference_time());
        let decoded = decode_null_time(Some(&encode_null_time(&present))).unwrap();
        assert_eq!(decoded, present);

        let absent = NullTime::absent();
        let decoded = decode_null_time(Some(&encode_null_time(&absent))).unwrap();
        assert!(!decoded.is_valid());
    }

    #[test]
    fn test_from_api_str_is_tolerant() {
        assert!(NullTime::from_api_str("Mon, 2 Jan 2006 15:04:05 -0700").is_valid());
        assert!(!NullTime::from_api_str("not a date").is_valid());
    }

    #[test]
    fn test_to_rfc3339() {
        let time = NullTime::present(reference_time());
        assert_eq!(time.to_rfc3339().unwrap(), "2006-01-02T15:04:05-07:00");
        assert_eq!(NullTime::absent().to_rfc3339(), None);
    }

    #[test]
    fn test_decode_time_requires_value() {
        assert_eq!(
            decode_time("\"Mon, 2 Jan 2006 15:04:05 -0700\"").unwrap(),
            reference_time()
        );
        assert!(decode_time("null").is_err());
    }
}
