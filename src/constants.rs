//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Title shown in the page header
pub const APP_NAME: &str = "Smartscreen Manager";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Artificial latency applied before every message update request
pub const REQUEST_DEMO_DELAY: Duration = Duration::from_millis(2000);

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log file name, written inside the data directory
pub const LOG_FILE_NAME: &str = "smartscreen.log";

/// Environment variables read by [`crate::config::Config`]
pub const ENV_API_URL: &str = "SMARTSCREEN_API_URL";
pub const ENV_UPDATE_DELAY_MS: &str = "SMARTSCREEN_UPDATE_DELAY_MS";
pub const ENV_LOG: &str = "SMARTSCREEN_LOG";

/// Request timeout for the HTTP client
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
