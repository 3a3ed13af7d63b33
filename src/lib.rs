//! Twilio Values - strict decoders and display formatters for Twilio API wire values.
//!
//! The Twilio REST API sends numbers, durations, timestamps and money as
//! strings, with optional and nullable fields encoded inconsistently. This
//! library turns those strings into validated domain values and renders
//! domain values back to text for display.
//!
//! # Architecture
//!
//! - **domain**: Phone numbers, statuses, prices, answered-by and the nullable wrapper
//! - **decode**: Decoders for quoted counters, durations and timestamps
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! Every operation is a pure function of its input and safe to call from any
//! thread.

pub mod config;
pub mod decode;
pub mod domain;
pub mod error;

pub use config::Config;
pub use decode::{NullTime, NumMedia, Segments};
pub use domain::{
    format_price, AnsweredBy, NullAnsweredBy, Nullable, PhoneNumber, Price, Status, StatusGroup,
};
pub use error::{ConfigError, DecodeError, PhoneNumberError};
