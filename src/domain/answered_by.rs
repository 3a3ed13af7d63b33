//! AnsweredBy value for calls placed with answering machine detection.

use super::nullable::Nullable;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Who picked up an outbound call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnsweredBy {
    Human,
    Machine,
    /// Any token not listed above, kept verbatim
    Other(String),
}

/// An `AnsweredBy` the API may leave out.
pub type NullAnsweredBy = Nullable<AnsweredBy>;

impl AnsweredBy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Human => "human",
            Self::Machine => "machine",
            Self::Other(token) => token,
        }
    }
}

impl From<&str> for AnsweredBy {
    fn from(token: &str) -> Self {
        match token {
            "human" => Self::Human,
            "machine" => Self::Machine,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for AnsweredBy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AnsweredBy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AnsweredBy::from(s.as_str()))
    }
}

impl fmt::Display for AnsweredBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
