//! Error types for Twilio wire value decoding.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when constructing a canonical phone number.
#[derive(Error, Debug)]
pub enum PhoneNumberError {
    /// The input string was empty
    #[error("The provided phone number was empty")]
    Empty,

    /// The input does not look like a phone number at all
    #[error("Invalid phone number: {0}")]
    NotANumber(String),

    /// The explicit or inferred country calling code is not recognized
    #[error("Invalid country code for number: {0}")]
    InvalidCountryCode(String),

    /// Any other failure reported by the phone number parser
    #[error(transparent)]
    Parse(#[from] phonenumber::ParseError),
}

/// Errors that can occur while decoding string-encoded scalar payloads.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The payload is not a JSON string literal
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The unquoted string is not an integer of the expected shape
    #[error("Invalid numeric value {value:?}: {reason}")]
    NumericFormat { value: String, reason: String },

    /// The unquoted string does not match the API timestamp layout
    #[error("Invalid timestamp {value:?}: {reason}")]
    TimestampFormat { value: String, reason: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PhoneNumberError
pub type PhoneNumberResult<T> = Result<T, PhoneNumberError>;

/// Convenience type alias for Results with DecodeError
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhoneNumberError::Empty;
        assert_eq!(err.to_string(), "The provided phone number was empty");

        let err = PhoneNumberError::NotANumber("abc".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: abc");

        let err = PhoneNumberError::InvalidCountryCode("+999 123".to_string());
        assert_eq!(err.to_string(), "Invalid country code for number: +999 123");

        let err = ConfigError::InvalidValue {
            var: "PHONE_DEFAULT_REGION".to_string(),
            reason: "Unknown region".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for PHONE_DEFAULT_REGION: Unknown region"
        );
    }

    #[test]
    fn test_numeric_format_error_names_value() {
        let err = DecodeError::NumericFormat {
            value: "abc".to_string(),
            reason: "not a base-10 integer".to_string(),
        };
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("not a base-10 integer"));
    }

    #[test]
    fn test_malformed_payload_from_json_error() {
        let json_err = serde_json::from_str::<String>("5").unwrap_err();
        let err = DecodeError::from(json_err);
        assert!(matches!(err, DecodeError::MalformedPayload(_)));
        assert!(err.to_string().starts_with("Malformed payload"));
    }
}
