//! Event model: categories, raw query-service records, typed payloads and
//! the normalizer that joins them.

pub mod category;
pub mod normalizer;
pub mod payload;
pub mod raw;

pub use category::{BadgeColor, EventCategory};
pub use normalizer::{normalize, normalize_stream, EventVariant, NormalizeError, NormalizedEvent};
pub use raw::{EventId, RawEvent};
