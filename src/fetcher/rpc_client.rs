//! JSON-RPC client for the ledger's event query endpoint
//!
//! Implements `EventQueryService` over `suix_queryEvents`:
//!
//! ```text
//! POST <rpc_url>
//! {"jsonrpc":"2.0","id":N,"method":"suix_queryEvents",
//!  "params":[{"MoveEventType":"<pkg>::<module>::<Event>"}, null, <limit>, <descending>]}
//! ```
//!
//! Only the first page is requested; `nextCursor` is never followed.

use super::query::{EventQuery, EventQueryService, QueryError};
use crate::config::FeedConfig;
use crate::events::RawEvent;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

const QUERY_EVENTS_METHOD: &str = "suix_queryEvents";

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<EventPage>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// One page of events
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    pub data: Vec<RawEvent>,
    #[serde(default)]
    pub has_next_page: bool,
}

pub struct SuiRpcClient {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl SuiRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, QueryError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, QueryError> {
        Self::new(
            config.rpc_url.clone(),
            Duration::from_secs(config.rpc_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Build the JSON-RPC request body for one query
fn request_body(id: u64, query: &EventQuery) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": QUERY_EVENTS_METHOD,
        "params": [
            { "MoveEventType": query.event_type },
            Value::Null,
            query.limit,
            query.order.is_descending(),
        ],
    })
}

/// Turn a JSON-RPC response body into events or an upstream error
fn decode_response(body: &str) -> Result<EventPage, QueryError> {
    let response: RpcResponse = serde_json::from_str(body)?;

    if let Some(err) = response.error {
        return Err(QueryError::Rpc {
            code: err.code,
            message: err.message,
        });
    }

    response.result.ok_or_else(|| QueryError::Rpc {
        code: -1,
        message: "response has neither result nor error".to_string(),
    })
}

#[async_trait]
impl EventQueryService for SuiRpcClient {
    async fn query_events(&self, query: &EventQuery) -> Result<Vec<RawEvent>, QueryError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let response = self
            .client
            .post(&self.url)
            .json(&request_body(id, query))
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let page = decode_response(&body)?;

        if page.has_next_page {
            log::debug!(
                "{}: more than {} events available, only the first page is used",
                query.event_type,
                query.limit
            );
        }

        Ok(page.data)
    }

    fn backend_type(&self) -> &'static str {
        "JSON-RPC"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::query::SortOrder;

    #[test]
    fn test_request_body() {
        let query = EventQuery {
            event_type: "0xpkg::marketplace::HeroListed".to_string(),
            limit: 20,
            order: SortOrder::Descending,
        };

        let body = request_body(7, &query);
        assert_eq!(body["method"], "suix_queryEvents");
        assert_eq!(body["id"], 7);
        assert_eq!(
            body["params"],
            json!([{ "MoveEventType": "0xpkg::marketplace::HeroListed" }, null, 20, true])
        );
    }

    #[test]
    fn test_decode_result_page() {
        let body = r#"{
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "data": [
                    {
                        "id": { "txDigest": "d1", "eventSeq": "0" },
                        "timestampMs": "2000",
                        "parsedJson": { "price": "1" }
                    }
                ],
                "nextCursor": { "txDigest": "d1", "eventSeq": "0" },
                "hasNextPage": true
            }
        }"#;

        let page = decode_response(body).unwrap();
        assert_eq!(page.data.len(), 1);
        assert!(page.has_next_page);
        assert_eq!(page.data[0].timestamp_ms.as_deref(), Some("2000"));
    }

    #[test]
    fn test_decode_rpc_error() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid params"}}"#;

        match decode_response(body) {
            Err(QueryError::Rpc { code, message }) => {
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid params");
            }
            other => panic!("expected RPC error, got {:?}", other.map(|p| p.data.len())),
        }
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(decode_response("<html>"), Err(QueryError::Decode(_))));
    }

    #[tokio::test]
    #[ignore] // Run only when testing against a live fullnode
    async fn test_live_query() {
        let client = SuiRpcClient::new(
            crate::config::DEFAULT_RPC_URL,
            Duration::from_secs(10),
        )
        .unwrap();

        let query = EventQuery {
            event_type: "0x3::validator::StakingRequestEvent".to_string(),
            limit: 1,
            order: SortOrder::Descending,
        };

        let result = client.query_events(&query).await;
        assert!(result.is_ok());
    }
}
