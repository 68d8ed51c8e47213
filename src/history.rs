//! Events history - one fetch cycle from query service to view model

use crate::config::FeedConfig;
use crate::feed::{resolve, FeedView};
use crate::fetcher::{EventQueryService, QueryError, StreamFetcher, SuiRpcClient};
use chrono::TimeZone;
use std::sync::Arc;
use std::time::Instant;

pub struct EventsHistory {
    fetcher: StreamFetcher,
}

impl EventsHistory {
    pub fn new(service: Arc<dyn EventQueryService>, config: &FeedConfig) -> Self {
        Self {
            fetcher: StreamFetcher::new(service, config.package_id.clone(), config.page_size),
        }
    }

    /// Build a history backed by the JSON-RPC client described by `config`
    pub fn from_config(config: &FeedConfig) -> Result<Self, QueryError> {
        let client = SuiRpcClient::from_config(config)?;
        log::info!("🔗 {} backend at {}", client.backend_type(), client.url());
        Ok(Self::new(Arc::new(client), config))
    }

    /// Fetch every stream and resolve the result. Upstream failures are
    /// returned as-is; nothing is retried here.
    pub async fn refresh<Tz>(&self, tz: &Tz) -> Result<FeedView, QueryError>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let started = Instant::now();
        let cycle = self.fetcher.fetch_all().await?;
        let view = resolve(cycle, tz);

        match &view {
            FeedView::Loading => log::info!("⏳ Events history not ready"),
            FeedView::Empty => log::info!("📭 No events found ({:?})", started.elapsed()),
            FeedView::Feed { count, .. } => {
                log::info!("✅ {} events merged in {:?}", count, started.elapsed())
            }
        }

        Ok(view)
    }
}
