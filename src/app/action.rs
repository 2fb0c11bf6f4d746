//! Actions - the only way the dashboard state changes

use serde::{Deserialize, Serialize};

use crate::models::{Device, DeviceId};

/// A tagged state transition request.
///
/// Serialized as `{"type": "GOT_DEVICES", "payload": [...]}`. Any unknown
/// `type` deserializes to [`Action::Unknown`], which the reducer ignores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// A device list fetch started
    GettingDevices,
    /// A device list fetch finished (empty on failure)
    GotDevices(Vec<Device>),
    /// A message update for this device is in flight
    ChangingMessage(DeviceId),
    /// The message update for this device finished, successfully or not
    ChangedMessage(DeviceId),
    #[serde(other)]
    Unknown,
}

impl Action {
    /// The wire name of this action
    pub fn name(&self) -> &'static str {
        match self {
            Action::GettingDevices => "GETTING_DEVICES",
            Action::GotDevices(_) => "GOT_DEVICES",
            Action::ChangingMessage(_) => "CHANGING_MESSAGE",
            Action::ChangedMessage(_) => "CHANGED_MESSAGE",
            Action::Unknown => "UNKNOWN",
        }
    }

    /// JSON form used in the action log
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.name().to_string())
    }
}
