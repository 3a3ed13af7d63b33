//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values the Twilio API
//! sends as loosely typed strings: phone numbers, statuses, prices and
//! nullable fields. Phone numbers are validated at construction time so an
//! unparsed number cannot be represented.

pub mod answered_by;
pub mod nullable;
pub mod phone;
pub mod price;
pub mod status;

pub use answered_by::{AnsweredBy, NullAnsweredBy};
pub use nullable::Nullable;
pub use phone::PhoneNumber;
pub use price::{format_price, Price};
pub use status::{Status, StatusGroup};
