//! Render state - data structure sent from App layer to UI for rendering

use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::app::state::DevicesStatus;
use crate::constants::DEFAULT_API_URL;
use crate::messages::ui_events::InputMode;
use crate::models::{Device, DeviceId};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Store snapshot
    pub devices_status: DevicesStatus,
    pub devices: Option<Vec<Device>>,
    pub updating_devices: HashMap<DeviceId, bool>,

    // View-local
    pub selected: usize,
    pub input_mode: InputMode,
    pub drafts: HashMap<DeviceId, String>,
    pub cursor_position: usize,
    pub show_help: bool,
    pub last_refreshed: Option<DateTime<Local>>,

    pub api_url: String,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            devices_status: DevicesStatus::Empty,
            devices: None,
            updating_devices: HashMap::new(),
            selected: 0,
            input_mode: InputMode::Normal,
            drafts: HashMap::new(),
            cursor_position: 0,
            show_help: false,
            last_refreshed: None,
            api_url: String::from(DEFAULT_API_URL),
        }
    }
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        self.devices_status == DevicesStatus::Loading
    }

    pub fn is_updating(&self, id: &DeviceId) -> bool {
        self.updating_devices.get(id).copied().unwrap_or(false)
    }

    pub fn draft(&self, id: &DeviceId) -> &str {
        self.drafts.get(id).map(String::as_str).unwrap_or("")
    }
}
