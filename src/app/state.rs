//! App state - pure data structures with no I/O logic

use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::app::store::Store;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::{Device, DeviceId};

/// Load status of the device list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DevicesStatus {
    /// No fetch has been made yet
    #[default]
    Empty,
    /// A fetch is outstanding
    Loading,
    /// The last fetch completed (an empty list on failure)
    Idle,
}

/// State owned by the store and changed only by the reducer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub devices_status: DevicesStatus,
    pub updating_devices: HashMap<DeviceId, bool>,
    /// `None` until the first fetch completes
    pub devices: Option<Vec<Device>>,
}

impl DashboardState {
    /// Unknown ids read as not updating
    pub fn is_updating(&self, id: &DeviceId) -> bool {
        self.updating_devices.get(id).copied().unwrap_or(false)
    }

    pub fn devices(&self) -> &[Device] {
        self.devices.as_deref().unwrap_or(&[])
    }
}

/// View-local state: selection and message drafts.
///
/// Lives beside the store, not inside it. The reducer never sees it.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub selected: usize,
    pub input_mode: InputMode,
    pub drafts: HashMap<DeviceId, String>,
    pub cursor_position: usize,
    pub show_help: bool,
    pub last_refreshed: Option<DateTime<Local>>,
    /// Set when `FetchDevices` is sent, cleared by `GOT_DEVICES`
    pub fetch_pending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            selected: 0,
            input_mode: InputMode::Normal,
            drafts: HashMap::new(),
            cursor_position: 0,
            show_help: false,
            last_refreshed: None,
            fetch_pending: false,
        }
    }
}

/// Combined snapshot source for the UI
pub struct AppState {
    pub store: Store,
    pub view: ViewState,
    pub api_url: String,
}

impl AppState {
    pub fn new(api_url: impl Into<String>) -> Self {
        AppState {
            store: Store::new(),
            view: ViewState::new(),
            api_url: api_url.into(),
        }
    }

    /// The device currently under the cursor
    pub fn selected_device(&self) -> Option<&Device> {
        self.store.state().devices().get(self.view.selected)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let state = self.store.state();
        RenderState {
            devices_status: state.devices_status,
            devices: state.devices.clone(),
            updating_devices: state.updating_devices.clone(),
            selected: self.view.selected,
            input_mode: self.view.input_mode,
            drafts: self.view.drafts.clone(),
            cursor_position: self.view.cursor_position,
            show_help: self.view.show_help,
            last_refreshed: self.view.last_refreshed,
            api_url: self.api_url.clone(),
        }
    }
}
