//! Message and call status values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display labels that differ from the generic title-cased token.
const FRIENDLY_OVERRIDES: &[(&str, &str)] = &[
    ("in-progress", "In Progress"),
    ("no-answer", "No Answer"),
];

/// Which resource a status token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusGroup {
    /// Message lifecycle
    Message,
    /// Call lifecycle
    Call,
    /// Used by both messages and calls
    Shared,
    /// Not one of the known tokens
    Unknown,
}

/// The status of a message or call as reported by the API.
///
/// Known tokens map to named variants; anything else is kept verbatim in
/// [`Status::Other`] so new upstream statuses still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    // Message statuses
    Accepted,
    Delivered,
    Receiving,
    Received,
    Sending,
    Sent,
    Undelivered,

    // Call statuses
    Busy,
    Canceled,
    Completed,
    InProgress,
    NoAnswer,
    Ringing,

    // Shared
    Failed,
    Queued,

    /// A token not listed above, kept verbatim.
    ///
    /// Build statuses with `Status::from` rather than this variant directly:
    /// `Status::Other("no-answer".into())` is not equal to `Status::NoAnswer`.
    Other(String),
}

impl Status {
    /// The wire token, e.g. `"in-progress"`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Accepted => "accepted",
            Self::Delivered => "delivered",
            Self::Receiving => "receiving",
            Self::Received => "received",
            Self::Sending => "sending",
            Self::Sent => "sent",
            Self::Undelivered => "undelivered",
            Self::Busy => "busy",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::NoAnswer => "no-answer",
            Self::Ringing => "ringing",
            Self::Failed => "failed",
            Self::Queued => "queued",
            Self::Other(token) => token,
        }
    }

    pub fn group(&self) -> StatusGroup {
        match self {
            Self::Accepted
            | Self::Delivered
            | Self::Receiving
            | Self::Received
            | Self::Sending
            | Self::Sent
            | Self::Undelivered => StatusGroup::Message,
            Self::Busy
            | Self::Canceled
            | Self::Completed
            | Self::InProgress
            | Self::NoAnswer
            | Self::Ringing => StatusGroup::Call,
            Self::Failed | Self::Queued => StatusGroup::Shared,
            Self::Other(_) => StatusGroup::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Human-readable label, e.g. `"No Answer"` or `"Completed"`.
    pub fn friendly(&self) -> String {
        let token = self.as_str();
        FRIENDLY_OVERRIDES
            .iter()
            .find(|(from, _)| *from == token)
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| title_case(token))
    }
}

/// Upper-case every letter that starts a word. Separators such as `-` are
/// kept, so `"on-hold"` becomes `"On-Hold"`.
fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut at_word_start = true;
    for c in token.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

impl From<&str> for Status {
    fn from(token: &str) -> Self {
        match token {
            "accepted" => Self::Accepted,
            "delivered" => Self::Delivered,
            "receiving" => Self::Receiving,
            "received" => Self::Received,
            "sending" => Self::Sending,
            "sent" => Self::Sent,
            "undelivered" => Self::Undelivered,
            "busy" => Self::Busy,
            "canceled" => Self::Canceled,
            "completed" => Self::Completed,
            "in-progress" => Self::InProgress,
            "no-answer" => Self::NoAnswer,
            "ringing" => Self::Ringing,
            "failed" => Self::Failed,
            "queued" => Self::Queued,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Status::from)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
