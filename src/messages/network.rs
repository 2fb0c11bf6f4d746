//! Network messages - commands from App layer to Network layer
//!
//! Results come back as [`Action`](crate::app::Action)s through a
//! [`Dispatcher`](crate::app::Dispatcher), not as a separate response type.

use crate::models::DeviceId;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Load the device list
    FetchDevices,
    /// Push a new message to one device
    ChangeMessage { device_id: DeviceId, msg: String },
    /// Shutdown the network actor
    Shutdown,
}
