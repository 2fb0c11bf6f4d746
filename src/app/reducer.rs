//! Reducer - pure (state, action) -> state transition

use crate::app::action::Action;
use crate::app::state::{DashboardState, DevicesStatus};

/// Apply one action to the dashboard state.
///
/// Total and side-effect free: every action yields a defined next state.
pub fn reduce(state: DashboardState, action: &Action) -> DashboardState {
    match action {
        Action::GettingDevices => DashboardState {
            devices_status: DevicesStatus::Loading,
            ..state
        },
        Action::GotDevices(devices) => DashboardState {
            devices: Some(devices.clone()),
            devices_status: DevicesStatus::Idle,
            ..state
        },
        Action::ChangingMessage(id) => {
            let mut updating_devices = state.updating_devices;
            updating_devices.insert(id.clone(), true);
            DashboardState {
                updating_devices,
                ..state
            }
        }
        Action::ChangedMessage(id) => {
            let mut updating_devices = state.updating_devices;
            updating_devices.insert(id.clone(), false);
            DashboardState {
                updating_devices,
                ..state
            }
        }
        Action::Unknown => state,
    }
}
