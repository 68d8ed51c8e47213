//! Feed assembly
//!
//! ```text
//! FetchCycle (7 × StreamState)
//!     ↓ readiness gate: any Pending → Loading
//! merge_streams (normalize + stable sort, newest first)
//!     ↓
//! FeedItem::from_event (display fields, N/A policy)
//!     ↓
//! FeedView: Loading | Empty | Feed { count, items }
//! ```

pub mod merger;
pub mod readiness;
pub mod view;

pub use merger::merge_streams;
pub use readiness::{resolve, FeedView};
pub use view::{DisplayField, FeedItem, NO_BIDS_PLACED};
