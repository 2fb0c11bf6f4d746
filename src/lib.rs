//! # Smartscreen TUI
//!
//! A terminal dashboard for a fleet of smartscreen devices.
//!
//! ## Features
//! - Fetch and list devices as cards
//! - Push a short message to any device
//! - Per-device in-flight indicator while an update is pending
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (store + reducer)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod error;
pub mod config;
pub mod constants;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Device, DeviceId};
pub use error::{ApiError, ConfigError};
pub use config::Config;
pub use messages::{UiEvent, NetworkCommand, RenderState};
pub use app::{Action, AppActor, AppState, DashboardState, DevicesStatus, Dispatcher, Store, reduce};
pub use network::{ApiClient, NetworkActor};
