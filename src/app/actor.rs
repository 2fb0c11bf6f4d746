//! App actor - message loop processing UI events and store actions

use tokio::sync::mpsc;

use crate::app::action::Action;
use crate::app::state::AppState;
use crate::messages::{NetworkCommand, RenderState, UiEvent};

/// App actor that owns the store and processes UI events and task actions
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        api_url: impl Into<String>,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(api_url),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop.
    ///
    /// The action receiver is drained only here, so the reducer never runs
    /// concurrently with itself.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut action_rx: mpsc::UnboundedReceiver<Action>,
    ) {
        // Initial load
        if let Some(cmd) = self.state.refresh_devices() {
            self.send_command(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        self.send_command(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(action) = action_rx.recv() => {
                    self.state.apply(action);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }

        tracing::info!(actions = self.state.store.dispatched(), "app actor stopped");
    }

    fn send_command(&self, cmd: NetworkCommand) {
        if self.network_tx.send(cmd).is_err() {
            tracing::warn!("network actor is gone");
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Device list
            UiEvent::RefreshDevices => {
                if let Some(cmd) = self.state.refresh_devices() {
                    self.send_command(cmd);
                }
            }
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),

            // Message editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::SendMessage => {
                if let Some(cmd) = self.state.send_message() {
                    self.send_command(cmd);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
