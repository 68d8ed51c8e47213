//! Events History - marketplace and arena activity feed
//!
//! Fetches the seven event streams of one deployment, merges them newest
//! first and renders the result.
//!
//! Usage:
//!   cargo run --release --bin events_history            # interactive TUI
//!   cargo run --release --bin events_history -- --plain # one-shot text output
//!
//! Environment variables:
//!   SUI_RPC_URL - JSON-RPC endpoint (default: testnet fullnode)
//!   PACKAGE_ID - deployment identifier; without it the feed stays loading
//!   EVENT_PAGE_SIZE - events per stream (default: 20)
//!   RPC_TIMEOUT_SECS - HTTP timeout (default: 10)

use chrono::Local;
use dotenv::dotenv;
use herofeed::{config, ui, EventsHistory, FeedConfig};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    // Logs go to stderr so they stay out of the TUI and of piped --plain output.
    // Set up before loading the config, which may warn
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config::log_filter()))
        .target(env_logger::Target::Stderr)
        .init();

    let config = FeedConfig::from_env()?;

    let plain = env::args().any(|arg| arg == "--plain");

    info!("🚀 Events History");
    info!("   ├─ RPC: {}", config.rpc_url);
    info!(
        "   ├─ Package: {}",
        config.package_id.as_deref().unwrap_or("(not configured)")
    );
    info!("   ├─ Page size: {} per stream", config.page_size);
    info!("   └─ Log filter: {}", config.rust_log);

    let history = EventsHistory::from_config(&config)?;

    if plain {
        let view = history.refresh(&Local).await?;
        println!("{}", ui::render_plain(&view));
        return Ok(());
    }

    ui::run_ui(history).await
}
