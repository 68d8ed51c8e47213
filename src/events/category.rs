//! The fixed set of event kinds the feed understands

use serde::{Deserialize, Serialize};

/// One kind of ledger-emitted event
///
/// Declaration order is significant: streams are concatenated in this order
/// before sorting, so it also breaks timestamp ties across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventCategory {
    Listed,
    Bought,
    ArenaCreated,
    ArenaCompleted,
    AuctionCreated,
    BidPlaced,
    AuctionEnded,
}

/// Badge color shown next to each event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeColor {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Yellow,
    Indigo,
}

impl EventCategory {
    pub const ALL: [EventCategory; 7] = [
        EventCategory::Listed,
        EventCategory::Bought,
        EventCategory::ArenaCreated,
        EventCategory::ArenaCompleted,
        EventCategory::AuctionCreated,
        EventCategory::BidPlaced,
        EventCategory::AuctionEnded,
    ];

    /// Position of this category in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// On-chain module that emits this event
    pub fn module(&self) -> &'static str {
        match self {
            EventCategory::ArenaCreated | EventCategory::ArenaCompleted => "arena",
            _ => "marketplace",
        }
    }

    /// On-chain struct name of this event
    pub fn event_name(&self) -> &'static str {
        match self {
            EventCategory::Listed => "HeroListed",
            EventCategory::Bought => "HeroBought",
            EventCategory::ArenaCreated => "ArenaCreated",
            EventCategory::ArenaCompleted => "ArenaCompleted",
            EventCategory::AuctionCreated => "AuctionCreated",
            EventCategory::BidPlaced => "BidPlaced",
            EventCategory::AuctionEnded => "AuctionEnded",
        }
    }

    /// Fully-qualified event type filter: `<package>::<module>::<EventName>`
    pub fn type_filter(&self, package_id: &str) -> String {
        format!("{}::{}::{}", package_id, self.module(), self.event_name())
    }

    /// Whether a reported event type names this category's module and event
    pub fn matches_type(&self, event_type: &str) -> bool {
        event_type
            .strip_suffix(self.event_name())
            .and_then(|rest| rest.strip_suffix("::"))
            .and_then(|rest| rest.strip_suffix(self.module()))
            .map_or(false, |rest| rest.ends_with("::"))
    }

    /// Human-readable badge label
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Listed => "Hero Listed",
            EventCategory::Bought => "Hero Bought",
            EventCategory::ArenaCreated => "Arena Created",
            EventCategory::ArenaCompleted => "Battle Completed",
            EventCategory::AuctionCreated => "Auction Created",
            EventCategory::BidPlaced => "Bid Placed",
            EventCategory::AuctionEnded => "Auction Ended",
        }
    }

    pub fn badge_color(&self) -> BadgeColor {
        match self {
            EventCategory::Listed => BadgeColor::Blue,
            EventCategory::Bought => BadgeColor::Green,
            EventCategory::ArenaCreated => BadgeColor::Orange,
            EventCategory::ArenaCompleted => BadgeColor::Red,
            EventCategory::AuctionCreated => BadgeColor::Purple,
            EventCategory::BidPlaced => BadgeColor::Yellow,
            EventCategory::AuctionEnded => BadgeColor::Indigo,
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_type_filters() {
        let filters: Vec<String> = EventCategory::ALL
            .iter()
            .map(|c| c.type_filter("0xpkg"))
            .collect();

        assert_eq!(
            filters,
            vec![
                "0xpkg::marketplace::HeroListed",
                "0xpkg::marketplace::HeroBought",
                "0xpkg::arena::ArenaCreated",
                "0xpkg::arena::ArenaCompleted",
                "0xpkg::marketplace::AuctionCreated",
                "0xpkg::marketplace::BidPlaced",
                "0xpkg::marketplace::AuctionEnded",
            ]
        );
    }

    #[test]
    fn test_label_and_color_are_bijective() {
        let labels: HashSet<_> = EventCategory::ALL.iter().map(|c| c.label()).collect();
        let colors: HashSet<_> = EventCategory::ALL.iter().map(|c| c.badge_color()).collect();

        assert_eq!(labels.len(), 7);
        assert_eq!(colors.len(), 7);
        assert_eq!(EventCategory::Listed.badge_color(), BadgeColor::Blue);
        assert_eq!(EventCategory::AuctionEnded.label(), "Auction Ended");
        assert_eq!(EventCategory::AuctionEnded.badge_color(), BadgeColor::Indigo);
    }

    #[test]
    fn test_matches_reported_type() {
        assert!(EventCategory::Listed.matches_type("0xpkg::marketplace::HeroListed"));
        assert!(EventCategory::ArenaCompleted.matches_type("0xpkg::arena::ArenaCompleted"));
        assert!(!EventCategory::Listed.matches_type("0xpkg::marketplace::HeroBought"));
        assert!(!EventCategory::ArenaCreated.matches_type("0xpkg::marketplace::ArenaCreated"));
        assert!(!EventCategory::BidPlaced.matches_type("BidPlaced"));
    }

    #[test]
    fn test_index_matches_all() {
        for (i, category) in EventCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
