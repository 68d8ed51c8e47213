//! Typed per-category event payloads
//!
//! The query service returns payloads as untyped JSON. Every field here is
//! optional: a key that is absent, null, empty, or of an unexpected shape
//! decodes to `None` instead of failing the whole event. 64-bit numbers arrive as decimal
//! strings, but bare JSON numbers are accepted too.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode a JSON scalar into its string form, anything else into `None`.
/// An empty string counts as absent.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListedPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub price: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub seller: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoughtPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub price: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub buyer: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub seller: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaCreatedPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaCompletedPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub winner: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub loser: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionCreatedPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub auction_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub starting_price: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub seller: Option<String>,
    /// Auction deadline, epoch milliseconds
    #[serde(deserialize_with = "lenient_string")]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidPlacedPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub auction_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub amount: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub bidder: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuctionEndedPayload {
    #[serde(deserialize_with = "lenient_string")]
    pub auction_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub final_price: Option<String>,
    /// Zero address (or absent) when the auction closed without bids
    #[serde(deserialize_with = "lenient_string")]
    pub winner: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub seller: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_listed_payload() {
        let payload: ListedPayload = serde_json::from_value(json!({
            "id": "0xabcdef1234567890",
            "price": "1000000000",
            "seller": "0x1234567890abcdef"
        }))
        .unwrap();

        assert_eq!(payload.id.as_deref(), Some("0xabcdef1234567890"));
        assert_eq!(payload.price.as_deref(), Some("1000000000"));
        assert_eq!(payload.seller.as_deref(), Some("0x1234567890abcdef"));
    }

    #[test]
    fn test_missing_and_null_fields_are_none() {
        let payload: BoughtPayload = serde_json::from_value(json!({
            "price": null,
            "buyer": "0xbuyer"
        }))
        .unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.price, None);
        assert_eq!(payload.seller, None);
        assert_eq!(payload.buyer.as_deref(), Some("0xbuyer"));
    }

    #[test]
    fn test_numbers_accepted_as_strings() {
        let payload: BidPlacedPayload = serde_json::from_value(json!({
            "auction_id": "0xauction",
            "amount": 2500000000u64,
        }))
        .unwrap();

        assert_eq!(payload.amount.as_deref(), Some("2500000000"));
    }

    #[test]
    fn test_empty_strings_are_none() {
        let payload: AuctionEndedPayload = serde_json::from_value(json!({
            "winner": "",
            "auction_id": "",
            "seller": "0xseller"
        }))
        .unwrap();

        assert_eq!(payload.winner, None);
        assert_eq!(payload.auction_id, None);
        assert_eq!(payload.seller.as_deref(), Some("0xseller"));
    }

    #[test]
    fn test_nested_values_are_ignored() {
        let payload: AuctionEndedPayload = serde_json::from_value(json!({
            "winner": { "vec": [] },
            "final_price": "0"
        }))
        .unwrap();

        assert_eq!(payload.winner, None);
        assert_eq!(payload.final_price.as_deref(), Some("0"));
    }
}
