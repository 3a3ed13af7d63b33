//! Configuration management for callers of the value codecs.
//!
//! This module handles loading and validating configuration from environment variables.
//! Nothing here alters the behavior of [`PhoneNumber::new`](crate::domain::PhoneNumber::new),
//! which always treats numbers without a country code as US numbers.

use crate::error::{ConfigError, ConfigResult};
use phonenumber::country;
use std::env;

/// Region used when none is configured.
pub const DEFAULT_REGION: country::Id = country::Id::US;

/// Configuration for the value codecs and the `twilio-values` binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Region passed to [`crate::domain::PhoneNumber::parse_in_region`] by
    /// callers that opt in to a non-US default (default: US)
    pub default_region: country::Id,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_DEFAULT_REGION`: Two-letter region code (default: "US")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let default_region = match env::var("PHONE_DEFAULT_REGION") {
            Ok(val) => Self::parse_region("PHONE_DEFAULT_REGION", &val)?,
            Err(_) => DEFAULT_REGION,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            default_region,
            log_level,
        })
    }

    /// Parse a two-letter region code such as "US" or "GB".
    fn parse_region(var_name: &str, value: &str) -> ConfigResult<country::Id> {
        let code = value.trim().to_ascii_uppercase();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a two-letter region code, got: {}", value),
            });
        }

        code.parse::<country::Id>().map_err(|_| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Unknown region code: {}", value),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_region: DEFAULT_REGION,
            log_level: "error".to_string(),
        }
    }
}
