//! Stream fetcher - one bounded query per event category
//!
//! All seven queries run as independent tasks in a `JoinSet` and are joined
//! before anything is returned. The first upstream failure is propagated and
//! the remaining tasks are aborted when the set is dropped; dropping the
//! `fetch_all` future cancels every outstanding task the same way.

use super::query::{EventQuery, EventQueryService, QueryError, SortOrder};
use crate::events::{EventCategory, RawEvent};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Result of one category's fetch within a cycle
#[derive(Debug, Clone, PartialEq)]
pub enum StreamState {
    /// Not settled (or never issued because the deployment is unknown)
    Pending,
    Ready(Vec<RawEvent>),
}

impl StreamState {
    pub fn is_pending(&self) -> bool {
        matches!(self, StreamState::Pending)
    }
}

/// Per-category fetch results of one cycle, indexed by `EventCategory`
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCycle {
    streams: [StreamState; 7],
}

impl Default for FetchCycle {
    fn default() -> Self {
        Self::pending()
    }
}

impl FetchCycle {
    /// A cycle in which nothing has settled yet
    pub fn pending() -> Self {
        Self {
            streams: std::array::from_fn(|_| StreamState::Pending),
        }
    }

    pub fn set(&mut self, category: EventCategory, state: StreamState) {
        self.streams[category.index()] = state;
    }

    pub fn get(&self, category: EventCategory) -> &StreamState {
        &self.streams[category.index()]
    }

    /// Mark one category as settled with `events`
    pub fn with_ready(mut self, category: EventCategory, events: Vec<RawEvent>) -> Self {
        self.set(category, StreamState::Ready(events));
        self
    }

    /// True once every category has settled
    pub fn is_settled(&self) -> bool {
        self.streams.iter().all(|s| !s.is_pending())
    }

    pub fn pending_categories(&self) -> Vec<EventCategory> {
        EventCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.get(*c).is_pending())
            .collect()
    }

    /// Settled result sets in category order, or `None` while any is pending
    pub fn into_ready(self) -> Option<Vec<(EventCategory, Vec<RawEvent>)>> {
        if !self.is_settled() {
            return None;
        }
        Some(
            EventCategory::ALL
                .iter()
                .copied()
                .zip(self.streams)
                .filter_map(|(category, state)| match state {
                    StreamState::Ready(events) => Some((category, events)),
                    StreamState::Pending => None,
                })
                .collect(),
        )
    }
}

pub struct StreamFetcher {
    service: Arc<dyn EventQueryService>,
    package_id: Option<String>,
    page_size: usize,
}

impl StreamFetcher {
    pub fn new(
        service: Arc<dyn EventQueryService>,
        package_id: Option<String>,
        page_size: usize,
    ) -> Self {
        Self {
            service,
            package_id: package_id.filter(|id| !id.is_empty()),
            page_size,
        }
    }

    /// The seven queries of a cycle, or `None` when no deployment is known
    pub fn queries(&self) -> Option<Vec<(EventCategory, EventQuery)>> {
        let package_id = self.package_id.as_deref()?;
        Some(
            EventCategory::ALL
                .iter()
                .map(|category| {
                    (
                        *category,
                        EventQuery {
                            event_type: category.type_filter(package_id),
                            limit: self.page_size,
                            order: SortOrder::Descending,
                        },
                    )
                })
                .collect(),
        )
    }

    /// Run one fetch cycle.
    ///
    /// Without a deployment identifier no request is issued and every stream
    /// stays `Pending`.
    pub async fn fetch_all(&self) -> Result<FetchCycle, QueryError> {
        let mut cycle = FetchCycle::pending();

        let queries = match self.queries() {
            Some(queries) => queries,
            None => {
                log::info!("⏸️  No deployment identifier configured, skipping fetch");
                return Ok(cycle);
            }
        };

        log::debug!(
            "Issuing {} queries via {} backend",
            queries.len(),
            self.service.backend_type()
        );

        let mut tasks = JoinSet::new();
        for (category, query) in queries {
            let service = Arc::clone(&self.service);
            tasks.spawn(async move {
                let result = service.query_events(&query).await;
                (category, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((category, Ok(events))) => {
                    log::debug!("📥 {}: {} events", category, events.len());
                    cycle.set(category, StreamState::Ready(events));
                }
                Ok((category, Err(e))) => {
                    log::error!("❌ {} query failed: {}", category, e);
                    return Err(e);
                }
                Err(e) => {
                    return Err(QueryError::TaskAborted(e.to_string()));
                }
            }
        }

        Ok(cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::events::EventId;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn event(ts: &str) -> RawEvent {
        RawEvent {
            id: EventId {
                tx_digest: format!("tx{}", ts),
                event_seq: "0".to_string(),
            },
            timestamp_ms: Some(ts.to_string()),
            parsed_json: serde_json::Value::Null,
            event_type: None,
        }
    }

    /// Answers every query with one event; slower for earlier categories so
    /// completions arrive out of order.
    struct StaggeredService {
        calls: AtomicUsize,
        seen: Mutex<Vec<EventQuery>>,
        fail_on: Option<&'static str>,
    }

    impl StaggeredService {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                fail_on,
            }
        }
    }

    #[async_trait]
    impl EventQueryService for StaggeredService {
        async fn query_events(&self, query: &EventQuery) -> Result<Vec<RawEvent>, QueryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(query.clone());

            let position = EventCategory::ALL
                .iter()
                .position(|c| query.event_type.ends_with(c.event_name()))
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis((7 - position as u64) * 5)).await;

            if let Some(name) = self.fail_on {
                if query.event_type.ends_with(name) {
                    return Err(QueryError::Rpc {
                        code: 500,
                        message: "boom".to_string(),
                    });
                }
            }
            Ok(vec![event(&position.to_string())])
        }

        fn backend_type(&self) -> &'static str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_fetch_all_settles_every_stream() {
        let service = Arc::new(StaggeredService::new(None));
        let fetcher = StreamFetcher::new(service.clone(), Some("0xpkg".to_string()), 20);

        let cycle = fetcher.fetch_all().await.unwrap();

        assert!(cycle.is_settled());
        assert_eq!(service.calls.load(Ordering::SeqCst), 7);
        for (i, category) in EventCategory::ALL.iter().enumerate() {
            match cycle.get(*category) {
                StreamState::Ready(events) => {
                    assert_eq!(events[0].timestamp_ms.as_deref(), Some(i.to_string().as_str()));
                }
                StreamState::Pending => panic!("{} still pending", category),
            }
        }

        let seen = service.seen.lock().unwrap();
        assert!(seen.iter().all(|q| q.limit == 20 && q.order == SortOrder::Descending));
        assert!(seen.iter().any(|q| q.event_type == "0xpkg::arena::ArenaCompleted"));
    }

    #[tokio::test]
    async fn test_no_package_id_issues_no_requests() {
        let service = Arc::new(StaggeredService::new(None));
        let fetcher = StreamFetcher::new(service.clone(), Some(String::new()), 20);

        let cycle = fetcher.fetch_all().await.unwrap();

        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        assert!(!cycle.is_settled());
        assert_eq!(cycle.pending_categories().len(), 7);
        assert!(fetcher.queries().is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_propagated() {
        let service = Arc::new(StaggeredService::new(Some("BidPlaced")));
        let fetcher = StreamFetcher::new(service, Some("0xpkg".to_string()), 20);

        let result = fetcher.fetch_all().await;
        assert!(matches!(result, Err(QueryError::Rpc { code: 500, .. })));
    }

    struct SlowService {
        finished: Arc<AtomicBool>,
    }

    #[async_trait]
    impl EventQueryService for SlowService {
        async fn query_events(&self, _query: &EventQuery) -> Result<Vec<RawEvent>, QueryError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            self.finished.store(true, Ordering::SeqCst);
            Ok(Vec::new())
        }

        fn backend_type(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test]
    async fn test_dropping_cycle_cancels_all_tasks() {
        let finished = Arc::new(AtomicBool::new(false));
        let service = Arc::new(SlowService {
            finished: finished.clone(),
        });
        let fetcher = StreamFetcher::new(service, Some("0xpkg".to_string()), 20);

        let result = tokio::time::timeout(Duration::from_millis(20), fetcher.fetch_all()).await;
        assert!(result.is_err());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }

    #[test]
    fn test_into_ready_requires_every_stream() {
        let partial = FetchCycle::pending().with_ready(EventCategory::Listed, vec![event("1")]);
        assert!(partial.into_ready().is_none());

        let mut full = FetchCycle::pending();
        for category in EventCategory::ALL {
            full.set(category, StreamState::Ready(Vec::new()));
        }
        let ready = full.into_ready().unwrap();
        assert_eq!(ready.len(), 7);
        assert_eq!(ready[0].0, EventCategory::Listed);
        assert_eq!(ready[6].0, EventCategory::AuctionEnded);
    }
}
