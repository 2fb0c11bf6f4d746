//! Async tasks - each one is a short sequence of store dispatches around a request.
//!
//! The opening action is dispatched when the function is called, before the
//! returned future is first polled. Failures never leave the task.

use std::future::Future;
use std::time::Duration;

use crate::app::{Action, Dispatcher};
use crate::models::DeviceId;
use crate::network::client::ApiClient;

/// Load the device list.
///
/// Dispatches `GETTING_DEVICES` now, then exactly one `GOT_DEVICES`:
/// the fetched list, or an empty list if the request failed in any way.
pub fn fetch_devices(
    client: ApiClient,
    dispatcher: Dispatcher,
) -> impl Future<Output = ()> + Send + 'static {
    dispatcher.dispatch(Action::GettingDevices);

    async move {
        let devices = match client.get_devices().await {
            Ok(devices) => {
                tracing::info!(count = devices.len(), "devices fetched");
                devices
            }
            Err(e) => {
                tracing::warn!(error = %e, "device fetch failed, showing empty list");
                Vec::new()
            }
        };
        dispatcher.dispatch(Action::GotDevices(devices));
    }
}

/// Push a message to one device.
///
/// Dispatches `CHANGING_MESSAGE(id)` now, waits `delay`, sends the request,
/// then dispatches `CHANGED_MESSAGE(id)` whatever the outcome.
pub fn change_message(
    client: ApiClient,
    dispatcher: Dispatcher,
    device_id: DeviceId,
    msg: String,
    delay: Duration,
) -> impl Future<Output = ()> + Send + 'static {
    dispatcher.dispatch(Action::ChangingMessage(device_id.clone()));

    async move {
        tokio::time::sleep(delay).await;

        match client.put_message(&device_id, &msg).await {
            Ok(()) => tracing::info!(device = %device_id, msg = %msg, "message updated"),
            Err(e) => tracing::warn!(device = %device_id, error = %e, "message update failed"),
        }
        dispatcher.dispatch(Action::ChangedMessage(device_id));
    }
}
