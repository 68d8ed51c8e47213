//! Display-ready feed items
//!
//! Every value shown for an event is derived here. Absent payload fields
//! become `N/A`; numeric fields that fail to parse also become `N/A` and mark
//! the item as `malformed` instead of dropping it.

use crate::events::{BadgeColor, EventCategory, EventVariant, NormalizedEvent};
use crate::format::{
    format_address, format_price, format_timestamp, is_zero_address, short_id, short_tail,
    FormatError, NOT_AVAILABLE,
};
use chrono::TimeZone;
use serde::Serialize;

/// Shown instead of a winner when an auction closed without bids
pub const NO_BIDS_PLACED: &str = "No bids placed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub category: EventCategory,
    /// `<txDigest>:<eventSeq>`
    pub event_id: String,
    pub timestamp_ms: u64,
    pub display_timestamp: String,
    pub label: &'static str,
    pub badge_color: BadgeColor,
    /// Fixed caption for events that carry no amounts
    pub headline: Option<&'static str>,
    pub fields: Vec<DisplayField>,
    /// Some numeric field could not be formatted
    pub malformed: bool,
}

impl FeedItem {
    pub fn from_event<Tz>(event: &NormalizedEvent, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let category = event.category();
        let mut fields = FieldBuilder::new(category);

        let display_timestamp = fields.formatted(
            "Timestamp",
            Some(event.timestamp_ms.to_string().as_str()),
            |ts| format_timestamp(ts, tz),
        );

        let mut headline = None;
        match &event.variant {
            EventVariant::Listed(p) => {
                fields.price("Price", p.price.as_deref());
                fields.address("Seller", p.seller.as_deref());
                fields.id("ID", p.id.as_deref());
            }
            EventVariant::Bought(p) => {
                fields.price("Price", p.price.as_deref());
                fields.address("Buyer", p.buyer.as_deref());
                fields.address("Seller", p.seller.as_deref());
                fields.id("ID", p.id.as_deref());
            }
            EventVariant::ArenaCreated(p) => {
                headline = Some("Battle Arena Created");
                fields.id("ID", p.id.as_deref());
            }
            EventVariant::ArenaCompleted(p) => {
                fields.text("Winner", p.winner.as_deref(), short_tail);
                fields.text("Loser", p.loser.as_deref(), short_tail);
            }
            EventVariant::AuctionCreated(p) => {
                fields.price("Starting Price", p.starting_price.as_deref());
                fields.address("Seller", p.seller.as_deref());
                fields.timestamp("End Time", p.end_time.as_deref(), tz);
                fields.id("Auction ID", p.auction_id.as_deref());
            }
            EventVariant::BidPlaced(p) => {
                fields.price("Bid Amount", p.amount.as_deref());
                fields.address("Bidder", p.bidder.as_deref());
                fields.id("Auction ID", p.auction_id.as_deref());
            }
            EventVariant::AuctionEnded(p) => {
                fields.price("Final Price", p.final_price.as_deref());
                match p.winner.as_deref().filter(|w| !is_zero_address(w)) {
                    Some(winner) => fields.push("Winner", format_address(winner)),
                    None => fields.push("Result", NO_BIDS_PLACED.to_string()),
                }
                fields.address("Seller", p.seller.as_deref());
                fields.id("Auction ID", p.auction_id.as_deref());
            }
        }

        Self {
            category,
            event_id: event.id.to_string(),
            timestamp_ms: event.timestamp_ms,
            display_timestamp,
            label: category.label(),
            badge_color: category.badge_color(),
            headline,
            malformed: fields.malformed,
            fields: fields.fields,
        }
    }

    /// Value of the field with `label`, if this item has one
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    /// Fields joined for single-line output: `Price: 1.00 SUI | Seller: 0x1234...cdef`
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = self.headline.iter().map(|h| h.to_string()).collect();
        parts.extend(self.fields.iter().map(|f| format!("{}: {}", f.label, f.value)));
        parts.join(" | ")
    }
}

struct FieldBuilder {
    category: EventCategory,
    fields: Vec<DisplayField>,
    malformed: bool,
}

impl FieldBuilder {
    fn new(category: EventCategory) -> Self {
        Self {
            category,
            fields: Vec::new(),
            malformed: false,
        }
    }

    fn push(&mut self, label: &'static str, value: String) {
        self.fields.push(DisplayField { label, value });
    }

    fn text(&mut self, label: &'static str, raw: Option<&str>, fmt: impl Fn(&str) -> String) {
        let value = raw.map(fmt).unwrap_or_else(|| NOT_AVAILABLE.to_string());
        self.push(label, value);
    }

    fn address(&mut self, label: &'static str, raw: Option<&str>) {
        self.text(label, raw, format_address);
    }

    fn id(&mut self, label: &'static str, raw: Option<&str>) {
        self.text(label, raw, short_id);
    }

    /// Format a numeric value; failures render `N/A` and flag the item
    fn formatted(
        &mut self,
        label: &'static str,
        raw: Option<&str>,
        fmt: impl Fn(&str) -> Result<String, FormatError>,
    ) -> String {
        match raw.map(fmt) {
            Some(Ok(value)) => value,
            Some(Err(e)) => {
                log::warn!("⚠️  {} {}: {}", self.category, label, e);
                self.malformed = true;
                NOT_AVAILABLE.to_string()
            }
            None => NOT_AVAILABLE.to_string(),
        }
    }

    fn price(&mut self, label: &'static str, raw: Option<&str>) {
        let value = self.formatted(label, raw, |amount| {
            format_price(amount).map(|sui| format!("{} SUI", sui))
        });
        self.push(label, value);
    }

    fn timestamp<Tz>(&mut self, label: &'static str, raw: Option<&str>, tz: &Tz)
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let value = self.formatted(label, raw, |ms| format_timestamp(ms, tz));
        self.push(label, value);
    }
}
