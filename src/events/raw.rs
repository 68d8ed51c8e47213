//! Events as returned by the query service, before normalization

use super::payload::lenient_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unique event identifier: transaction digest plus ordinal within it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventId {
    pub tx_digest: String,
    #[serde(deserialize_with = "event_seq")]
    pub event_seq: String,
}

fn event_seq<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    lenient_string(deserializer)
        .and_then(|seq| seq.ok_or_else(|| serde::de::Error::custom("eventSeq must be a string or number")))
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tx_digest, self.event_seq)
    }
}

/// One event record from the query service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: EventId,
    /// Epoch milliseconds as a decimal string; the service may omit it
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp_ms: Option<String>,
    /// Untyped payload
    #[serde(default)]
    pub parsed_json: Value,
    /// Fully-qualified type reported by the service
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
}

impl RawEvent {
    /// Parse a RawEvent from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
