//! Feed merger - union of all streams, newest first

use crate::events::{normalize_stream, EventCategory, NormalizedEvent, RawEvent};

/// Normalize every stream and merge them into one feed sorted by timestamp,
/// descending.
///
/// Equal timestamps are ordered by category declaration order, then by
/// arrival order within the stream. Rebuilt from scratch on every call.
pub fn merge_streams(streams: Vec<(EventCategory, Vec<RawEvent>)>) -> Vec<NormalizedEvent> {
    let mut merged: Vec<NormalizedEvent> = streams
        .into_iter()
        .flat_map(|(category, events)| normalize_stream(category, events))
        .collect();

    // sort_by is stable, so per-stream arrival order survives ties
    merged.sort_by(|a, b| {
        b.timestamp_ms
            .cmp(&a.timestamp_ms)
            .then_with(|| a.category().cmp(&b.category()))
    });

    merged
}
