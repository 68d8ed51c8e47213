//! Event normalization from raw query-service records to tagged variants
//!
//! The category is always supplied by the caller (the stream that fetched the
//! event), never guessed from the payload shape.

use super::category::EventCategory;
use super::payload::{
    ArenaCompletedPayload, ArenaCreatedPayload, AuctionCreatedPayload, AuctionEndedPayload,
    BidPlacedPayload, BoughtPayload, ListedPayload,
};
use super::raw::{EventId, RawEvent};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug)]
pub enum NormalizeError {
    MissingTimestamp(EventId),
    InvalidTimestamp { id: EventId, raw: String },
    Payload { id: EventId, source: serde_json::Error },
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::MissingTimestamp(id) => write!(f, "Event {} has no timestamp", id),
            NormalizeError::InvalidTimestamp { id, raw } => {
                write!(f, "Event {} has invalid timestamp '{}'", id, raw)
            }
            NormalizeError::Payload { id, source } => {
                write!(f, "Event {} has malformed payload: {}", id, source)
            }
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizeError::Payload { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Category-tagged payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventVariant {
    Listed(ListedPayload),
    Bought(BoughtPayload),
    ArenaCreated(ArenaCreatedPayload),
    ArenaCompleted(ArenaCompletedPayload),
    AuctionCreated(AuctionCreatedPayload),
    BidPlaced(BidPlacedPayload),
    AuctionEnded(AuctionEndedPayload),
}

impl EventVariant {
    /// Decode `payload` as the record type of `category`
    pub fn decode(category: EventCategory, payload: Value) -> Result<Self, serde_json::Error> {
        Ok(match category {
            EventCategory::Listed => EventVariant::Listed(decode_payload(payload)?),
            EventCategory::Bought => EventVariant::Bought(decode_payload(payload)?),
            EventCategory::ArenaCreated => EventVariant::ArenaCreated(decode_payload(payload)?),
            EventCategory::ArenaCompleted => EventVariant::ArenaCompleted(decode_payload(payload)?),
            EventCategory::AuctionCreated => EventVariant::AuctionCreated(decode_payload(payload)?),
            EventCategory::BidPlaced => EventVariant::BidPlaced(decode_payload(payload)?),
            EventCategory::AuctionEnded => EventVariant::AuctionEnded(decode_payload(payload)?),
        })
    }

    pub fn category(&self) -> EventCategory {
        match self {
            EventVariant::Listed(_) => EventCategory::Listed,
            EventVariant::Bought(_) => EventCategory::Bought,
            EventVariant::ArenaCreated(_) => EventCategory::ArenaCreated,
            EventVariant::ArenaCompleted(_) => EventCategory::ArenaCompleted,
            EventVariant::AuctionCreated(_) => EventCategory::AuctionCreated,
            EventVariant::BidPlaced(_) => EventCategory::BidPlaced,
            EventVariant::AuctionEnded(_) => EventCategory::AuctionEnded,
        }
    }
}

// Anything but a JSON object decodes to the all-`None` record. Arrays are
// excluded too, since serde would map them onto fields by position.
fn decode_payload<T: DeserializeOwned + Default>(payload: Value) -> Result<T, serde_json::Error> {
    if !payload.is_object() {
        if !payload.is_null() {
            log::warn!("⚠️  Ignoring non-object payload: {}", payload);
        }
        return Ok(T::default());
    }
    serde_json::from_value(payload)
}

/// An event ready for merging and display. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEvent {
    pub id: EventId,
    pub timestamp_ms: u64,
    pub variant: EventVariant,
}

impl NormalizedEvent {
    pub fn category(&self) -> EventCategory {
        self.variant.category()
    }
}

/// Tag one raw event with the category of the stream that produced it
pub fn normalize(category: EventCategory, raw: RawEvent) -> Result<NormalizedEvent, NormalizeError> {
    let RawEvent {
        id,
        timestamp_ms,
        parsed_json,
        event_type,
    } = raw;

    // The stream decides the category; a disagreeing type is only reported
    if let Some(reported) = event_type.as_deref() {
        if !category.matches_type(reported) {
            log::warn!("⚠️  {} stream returned event {} of type {}", category, id, reported);
        }
    }

    let raw_ts = match timestamp_ms {
        Some(ts) => ts,
        None => return Err(NormalizeError::MissingTimestamp(id)),
    };
    let timestamp_ms = match raw_ts.trim().parse::<u64>() {
        Ok(ts) => ts,
        Err(_) => return Err(NormalizeError::InvalidTimestamp { id, raw: raw_ts }),
    };

    let variant = match EventVariant::decode(category, parsed_json) {
        Ok(variant) => variant,
        Err(source) => return Err(NormalizeError::Payload { id, source }),
    };

    Ok(NormalizedEvent {
        id,
        timestamp_ms,
        variant,
    })
}

/// Normalize a whole stream, dropping (and logging) events that cannot be
/// normalized. Arrival order is preserved.
pub fn normalize_stream(category: EventCategory, events: Vec<RawEvent>) -> Vec<NormalizedEvent> {
    let total = events.len();
    let normalized: Vec<NormalizedEvent> = events
        .into_iter()
        .filter_map(|raw| match normalize(category, raw) {
            Ok(event) => Some(event),
            Err(e) => {
                log::warn!("⚠️  Skipping {} event: {}", category, e);
                None
            }
        })
        .collect();

    if normalized.len() < total {
        log::debug!(
            "{}: kept {} of {} events",
            category,
            normalized.len(),
            total
        );
    }

    normalized
}
