//! Loading / empty state resolver
//!
//! Nothing is shown until every stream has settled: a cycle with any pending
//! stream resolves to `Loading`, never to a partial feed.

use super::merger::merge_streams;
use super::view::FeedItem;
use crate::fetcher::FetchCycle;
use chrono::TimeZone;
use serde::Serialize;

/// View model handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FeedView {
    Loading,
    Empty,
    Feed { count: usize, items: Vec<FeedItem> },
}

impl FeedView {
    /// Displayed event count (0 while loading or empty)
    pub fn count(&self) -> usize {
        match self {
            FeedView::Feed { count, .. } => *count,
            FeedView::Loading | FeedView::Empty => 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedView::Loading)
    }

    pub fn items(&self) -> &[FeedItem] {
        match self {
            FeedView::Feed { items, .. } => items,
            FeedView::Loading | FeedView::Empty => &[],
        }
    }
}

/// Gate, merge and format one fetch cycle
pub fn resolve<Tz>(cycle: FetchCycle, tz: &Tz) -> FeedView
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let pending = cycle.pending_categories();
    let streams = match cycle.into_ready() {
        Some(streams) => streams,
        None => {
            log::debug!("⏳ Waiting on {} stream(s): {:?}", pending.len(), pending);
            return FeedView::Loading;
        }
    };

    let merged = merge_streams(streams);
    if merged.is_empty() {
        return FeedView::Empty;
    }

    let items: Vec<FeedItem> = merged.iter().map(|e| FeedItem::from_event(e, tz)).collect();
    FeedView::Feed {
        count: items.len(),
        items,
    }
}
