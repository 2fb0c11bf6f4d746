//! Network actor - runs device tasks in the Tokio async runtime

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::app::Dispatcher;
use crate::messages::NetworkCommand;
use crate::network::client::ApiClient;
use crate::network::tasks::{change_message, fetch_devices};

/// Network actor that turns commands into spawned tasks
pub struct NetworkActor {
    client: ApiClient,
    dispatcher: Dispatcher,
    update_delay: Duration,
    active_tasks: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: ApiClient, dispatcher: Dispatcher, update_delay: Duration) -> Self {
        NetworkActor {
            client,
            dispatcher,
            update_delay,
            active_tasks: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchDevices) => {
                            tracing::info!(url = %self.client.base_url(), "Fetching devices");
                            let task = fetch_devices(self.client.clone(), self.dispatcher.clone());
                            self.active_tasks.spawn(task);
                        }

                        Some(NetworkCommand::ChangeMessage { device_id, msg }) => {
                            tracing::info!(device = %device_id, "Changing message");
                            let task = change_message(
                                self.client.clone(),
                                self.dispatcher.clone(),
                                device_id,
                                msg,
                                self.update_delay,
                            );
                            self.active_tasks.spawn(task);
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_tasks.abort_all();
                            break;
                        }
                    }
                }

                // Reap finished tasks
                Some(result) = self.active_tasks.join_next() => {
                    if let Err(e) = result {
                        if e.is_panic() {
                            tracing::error!(error = %e, "device task panicked");
                        }
                    }
                }
            }
        }
    }
}
