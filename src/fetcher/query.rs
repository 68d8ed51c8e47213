//! Query service interface
//!
//! Defines the request shape and the backend trait used by the stream fetcher.

use crate::events::RawEvent;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Descending)
    }
}

/// One bounded "find events of this type" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// Fully-qualified event type, `<package>::<module>::<EventName>`
    pub event_type: String,
    pub limit: usize,
    pub order: SortOrder,
}

#[derive(Debug)]
pub enum QueryError {
    Http(reqwest::Error),
    Rpc { code: i64, message: String },
    Decode(serde_json::Error),
    /// A fetch task panicked or was cancelled before it settled
    TaskAborted(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Http(err)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::Decode(err)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Http(e) => write!(f, "HTTP error: {}", e),
            QueryError::Rpc { code, message } => write!(f, "RPC error {}: {}", code, message),
            QueryError::Decode(e) => write!(f, "Decode error: {}", e),
            QueryError::TaskAborted(msg) => write!(f, "Fetch task aborted: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}

/// Backend that executes event queries against the ledger
#[async_trait]
pub trait EventQueryService: Send + Sync {
    /// Return at most `query.limit` events of `query.event_type`
    async fn query_events(&self, query: &EventQuery) -> Result<Vec<RawEvent>, QueryError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}
