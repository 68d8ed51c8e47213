//! Stream Fetcher
//!
//! ```text
//! FeedConfig (PACKAGE_ID, page size)
//!     ↓
//! StreamFetcher ── 7 × EventQuery ──→ EventQueryService (SuiRpcClient)
//!     ↓ (JoinSet barrier)
//! FetchCycle: one StreamState per EventCategory
//! ```

pub mod query;
pub mod rpc_client;
pub mod stream;

pub use query::{EventQuery, EventQueryService, QueryError, SortOrder};
pub use rpc_client::SuiRpcClient;
pub use stream::{FetchCycle, StreamFetcher, StreamState};
