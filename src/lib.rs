//! # herofeed
//!
//! Aggregates the hero marketplace and arena event streams of one on-chain
//! deployment into a single, newest-first activity feed.
//!
//! ```text
//! StreamFetcher (7 concurrent queries, joined)
//!     ↓
//! normalize (tag by stream, typed payloads)
//!     ↓
//! merge_streams (sort by timestampMs, descending)
//!     ↓
//! resolve → FeedView (Loading | Empty | Feed)
//!     ↓
//! ui (ratatui) or plain-text output
//! ```

pub mod config;
pub mod events;
pub mod feed;
pub mod fetcher;
pub mod format;
pub mod history;
pub mod ui;

pub use config::FeedConfig;
pub use events::{EventCategory, NormalizedEvent, RawEvent};
pub use feed::{FeedItem, FeedView};
pub use history::EventsHistory;
