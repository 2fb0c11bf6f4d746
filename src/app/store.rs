//! Store - owns the dashboard state and routes every change through the reducer

use tokio::sync::mpsc;

use crate::app::action::Action;
use crate::app::reducer::reduce;
use crate::app::state::DashboardState;

pub struct Store {
    state: DashboardState,
    dispatched: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(DashboardState::default())
    }

    pub fn with_state(state: DashboardState) -> Self {
        Store {
            state,
            dispatched: 0,
        }
    }

    /// Get the current state
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Number of actions applied so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Apply an action through the reducer
    pub fn dispatch(&mut self, action: Action) {
        self.dispatched += 1;
        tracing::debug!(seq = self.dispatched, action = %action.to_json(), "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);
    }
}

/// Cloneable handle that async tasks use to submit actions to the store
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher and the receiving end the store actor drains
    pub fn channel() -> (Dispatcher, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Dispatcher { tx }, rx)
    }

    /// Submit an action. Dropped silently once the store has shut down.
    pub fn dispatch(&self, action: Action) {
        if self.tx.send(action).is_err() {
            tracing::debug!("store is gone, action dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DevicesStatus;
    use crate::models::{Device, DeviceId};

    #[test]
    fn test_dispatch_routes_through_reducer() {
        let mut store = Store::new();
        store.dispatch(Action::GettingDevices);
        assert_eq!(store.state().devices_status, DevicesStatus::Loading);

        store.dispatch(Action::GotDevices(vec![Device::new("a", "A", "c", "")]));
        assert_eq!(store.state().devices_status, DevicesStatus::Idle);
        assert_eq!(store.state().devices().len(), 1);
        assert_eq!(store.dispatched(), 2);
    }

    #[test]
    fn test_unknown_counts_but_changes_nothing() {
        let mut store = Store::new();
        store.dispatch(Action::Unknown);
        assert_eq!(store.state(), &DashboardState::default());
        assert_eq!(store.dispatched(), 1);
    }

    #[test]
    fn test_dispatcher_preserves_order() {
        let (dispatcher, mut rx) = Dispatcher::channel();
        dispatcher.dispatch(Action::ChangingMessage(DeviceId::new("d1")));
        dispatcher.clone().dispatch(Action::ChangedMessage(DeviceId::new("d1")));

        assert_eq!(
            rx.try_recv().unwrap(),
            Action::ChangingMessage(DeviceId::new("d1"))
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            Action::ChangedMessage(DeviceId::new("d1"))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_after_store_dropped_is_silent() {
        let (dispatcher, rx) = Dispatcher::channel();
        drop(rx);
        dispatcher.dispatch(Action::GettingDevices);
    }
}
