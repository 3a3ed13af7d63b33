//! PhoneNumber value object.

use crate::error::{PhoneNumberError, PhoneNumberResult};
use phonenumber::{country, Mode, ParseError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Region assumed for any number that does not start with `+`.
const ASSUMED_REGION: country::Id = country::Id::US;

/// A phone number held in E.164 form.
///
/// The only way to obtain one is through the parser, so the stored value is
/// always `+<country code><national digits>` with no separators. Numbers
/// without a leading `+` are read as US national numbers.
///
/// # Example
///
/// ```
/// use twilio_values::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(410) 555-4092").unwrap();
/// assert_eq!(phone.as_str(), "+14105554092");
/// assert_eq!(phone.friendly(), "+1 410-555-4092");
/// assert_eq!(phone.local(), "(410) 555-4092");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a phone number and store it in E.164 form.
    ///
    /// # Errors
    ///
    /// - `PhoneNumberError::Empty` if `raw` has zero length
    /// - `PhoneNumberError::NotANumber` if `raw` does not look like a number
    /// - `PhoneNumberError::InvalidCountryCode` if the country code is unknown
    /// - `PhoneNumberError::Parse` for any other parser failure
    pub fn new(raw: impl AsRef<str>) -> PhoneNumberResult<Self> {
        Self::parse_in_region(raw, ASSUMED_REGION)
    }

    /// Like [`PhoneNumber::new`], but numbers without a country code are read
    /// as national numbers of `region` instead of the US.
    pub fn parse_in_region(raw: impl AsRef<str>, region: country::Id) -> PhoneNumberResult<Self> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let number = phonenumber::parse(Some(region), raw).map_err(|err| match err {
            ParseError::NoNumber => PhoneNumberError::NotANumber(raw.to_string()),
            ParseError::InvalidCountryCode => PhoneNumberError::InvalidCountryCode(raw.to_string()),
            other => PhoneNumberError::Parse(other),
        })?;

        let canonical = number.format().mode(Mode::E164).to_string();
        tracing::trace!(input = %raw, canonical = %canonical, "Canonicalized phone number");
        Ok(Self(canonical))
    }

    /// International display form, e.g. `+1 410-555-4092`.
    ///
    /// Returns the stored value unchanged if it cannot be re-parsed.
    pub fn friendly(&self) -> String {
        render(&self.0, Mode::International)
    }

    /// National display form, e.g. `(410) 555-4092`.
    ///
    /// Returns the stored value unchanged if it cannot be re-parsed.
    pub fn local(&self) -> String {
        render(&self.0, Mode::National)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Display-only rendering. Never fails: falls back to `raw`.
fn render(raw: &str, mode: Mode) -> String {
    match phonenumber::parse(Some(ASSUMED_REGION), raw) {
        Ok(number) => number.format().mode(mode).to_string(),
        Err(err) => {
            tracing::debug!(number = %raw, error = %err, "Rendering phone number as stored");
            raw.to_string()
        }
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string through the parser
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
