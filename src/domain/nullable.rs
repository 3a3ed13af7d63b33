//! Nullable value wrapper.

use serde::{Serialize, Serializer};

/// A value the API may omit, send as `null`, or send as an empty string.
///
/// Absence is a valid state, not an error, and is kept distinct from any
/// zero value of `T`. Serializes as `null` when absent and as the inner
/// value otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nullable<T>(Option<T>);

impl<T> Nullable<T> {
    /// A present value.
    pub fn present(value: T) -> Self {
        Self(Some(value))
    }

    /// An absent value.
    pub fn absent() -> Self {
        Self(None)
    }

    /// Whether a value is present.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Map the inner value, preserving absence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        Nullable(self.0.map(f))
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.0
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Collapse the wire encodings of "no value" into `None`.
///
/// A missing field, a JSON `null`, the literal string `"null"` and the empty
/// string all count as absent.
pub(crate) fn present_token(raw: Option<&str>) -> Option<&str> {
    match raw {
        None | Some("") | Some("null") => None,
        Some(token) => Some(token),
    }
}
