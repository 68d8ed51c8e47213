// Renderer module - formatting utilities shared by the TUI and plain output

use crate::events::BadgeColor;
use crate::feed::FeedView;
use ratatui::style::Color;

pub const LOADING_TEXT: &str = "Loading events history...";
pub const EMPTY_TEXT: &str = "No events found";

/// Terminal color for a badge
pub fn badge_style_color(color: BadgeColor) -> Color {
    match color {
        BadgeColor::Blue => Color::Blue,
        BadgeColor::Green => Color::Green,
        BadgeColor::Orange => Color::Rgb(255, 165, 0),
        BadgeColor::Red => Color::Red,
        BadgeColor::Purple => Color::Magenta,
        BadgeColor::Yellow => Color::Yellow,
        BadgeColor::Indigo => Color::Rgb(99, 102, 241),
    }
}

/// Heading shown above the feed
pub fn heading(view: &FeedView) -> String {
    format!("Recent Events ({})", view.count())
}

/// Render the view model as plain text, one event per line
pub fn render_plain(view: &FeedView) -> String {
    match view {
        FeedView::Loading => LOADING_TEXT.to_string(),
        FeedView::Empty => format!("{}\n{}", heading(view), EMPTY_TEXT),
        FeedView::Feed { items, .. } => {
            let mut lines = vec![heading(view)];
            lines.extend(items.iter().map(|item| {
                format!(
                    "[{}] {}  {}",
                    item.label,
                    item.display_timestamp,
                    item.summary()
                )
            }));
            lines.join("\n")
        }
    }
}
