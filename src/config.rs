use std::env;

/// Default JSON-RPC endpoint of the event query service
pub const DEFAULT_RPC_URL: &str = "https://fullnode.testnet.sui.io:443";

/// Page size used by every stream unless overridden
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page the query service accepts
pub const MAX_PAGE_SIZE: usize = 50;

pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Log filter from `RUST_LOG`, `info` when unset.
/// Readable before the rest of the config so the logger can come up first.
pub fn log_filter() -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}

/// Configuration for the events history feed
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// JSON-RPC endpoint of the query service
    pub rpc_url: String,

    /// Deployment identifier that scopes every event-type filter.
    /// `None` means the deployment is not known yet; no stream is fetched.
    pub package_id: Option<String>,

    /// Events requested per stream
    pub page_size: usize,

    /// HTTP timeout for a single query
    pub rpc_timeout_secs: u64,

    pub rust_log: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            package_id: None,
            page_size: DEFAULT_PAGE_SIZE,
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
            rust_log: "info".to_string(),
        }
    }
}

impl FeedConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `SUI_RPC_URL` (default: testnet fullnode)
    /// - `PACKAGE_ID` (default: unset, feed stays in loading state)
    /// - `EVENT_PAGE_SIZE` (default: 20, accepted range 1..=50)
    /// - `RPC_TIMEOUT_SECS` (default: 10, must be positive)
    /// - `RUST_LOG` (default: info)
    pub fn from_env() -> Result<Self, ConfigError> {
        let rpc_url = env::var("SUI_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        if !rpc_url.starts_with("http://") && !rpc_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "SUI_RPC_URL must start with http:// or https://".to_string(),
            ));
        }

        // An empty PACKAGE_ID is the same as an unset one
        let package_id = env::var("PACKAGE_ID")
            .ok()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        let page_size = match env::var("EVENT_PAGE_SIZE").ok() {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => size,
                _ => {
                    log::warn!(
                        "Invalid EVENT_PAGE_SIZE '{}', defaulting to {}",
                        raw,
                        DEFAULT_PAGE_SIZE
                    );
                    DEFAULT_PAGE_SIZE
                }
            },
        };

        let rpc_timeout_secs = match env::var("RPC_TIMEOUT_SECS").ok() {
            None => DEFAULT_RPC_TIMEOUT_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    log::warn!(
                        "Invalid RPC_TIMEOUT_SECS '{}', defaulting to {}",
                        raw,
                        DEFAULT_RPC_TIMEOUT_SECS
                    );
                    DEFAULT_RPC_TIMEOUT_SECS
                }
            },
        };

        let rust_log = log_filter();

        Ok(Self {
            rpc_url,
            package_id,
            page_size,
            rpc_timeout_secs,
            rust_log,
        })
    }
}
