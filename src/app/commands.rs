//! Command handlers - business logic for processing UI events

use crate::app::action::Action;
use crate::app::state::{AppState, DevicesStatus};
use crate::messages::ui_events::InputMode;
use crate::messages::NetworkCommand;

impl AppState {
    // ========================
    // Store
    // ========================

    /// Apply an action coming back from a task and keep the view consistent
    pub fn apply(&mut self, action: Action) {
        let refreshed = matches!(action, Action::GotDevices(_));
        self.store.dispatch(action);

        if refreshed {
            self.view.fetch_pending = false;
            self.view.last_refreshed = Some(chrono::Local::now());
            // The card under the cursor may have changed
            self.stop_editing();
            self.clamp_selection();
        }
    }

    // ========================
    // Device list
    // ========================

    /// A fetch was requested and its `GOT_DEVICES` has not arrived yet
    pub fn is_fetching(&self) -> bool {
        self.view.fetch_pending || self.store.state().devices_status == DevicesStatus::Loading
    }

    /// Request a fresh device list, unless one is already outstanding
    pub fn refresh_devices(&mut self) -> Option<NetworkCommand> {
        if self.is_fetching() {
            tracing::debug!("refresh ignored, fetch already outstanding");
            return None;
        }
        self.view.fetch_pending = true;
        Some(NetworkCommand::FetchDevices)
    }

    pub fn select_next(&mut self) {
        let count = self.store.state().devices().len();
        if count > 0 {
            self.view.selected = (self.view.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.store.state().devices().len();
        if count > 0 {
            self.view.selected = (self.view.selected + count - 1) % count;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.store.state().devices().len();
        if self.view.selected >= count {
            self.view.selected = count.saturating_sub(1);
        }
        if count == 0 {
            self.view.input_mode = InputMode::Normal;
        }
    }

    // ========================
    // Message editing
    // ========================

    fn current_draft(&self) -> &str {
        self.selected_device()
            .and_then(|d| self.view.drafts.get(&d.id))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn current_draft_mut(&mut self) -> Option<&mut String> {
        let id = self.selected_device()?.id.clone();
        Some(self.view.drafts.entry(id).or_default())
    }

    /// Cards are hidden while a fetch is outstanding, so editing is refused then
    pub fn start_editing(&mut self) {
        if self.is_fetching() {
            return;
        }
        if self.selected_device().is_some() {
            self.view.input_mode = InputMode::Editing;
            self.view.cursor_position = self.current_draft().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.view.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let cursor = cursor_within(self.current_draft(), self.view.cursor_position);
        let new_pos = self.current_draft()[..cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.view.cursor_position = new_pos;
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_draft();
        let cursor = cursor_within(input, self.view.cursor_position);
        let new_pos = input[cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| cursor + i)
            .unwrap_or(input.len());
        self.view.cursor_position = new_pos;
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.view.cursor_position;
        if let Some(input) = self.current_draft_mut() {
            let cursor = cursor_within(input, cursor_pos);
            input.insert(cursor, c);
            self.view.cursor_position = cursor + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        let cursor_pos = self.view.cursor_position;
        if let Some(input) = self.current_draft_mut() {
            let cursor = cursor_within(input, cursor_pos);
            let prev_pos = input[..cursor].char_indices().last().map(|(i, _)| i);
            match prev_pos {
                Some(prev_pos) => {
                    input.remove(prev_pos);
                    self.view.cursor_position = prev_pos;
                }
                None => self.view.cursor_position = 0,
            }
        }
    }

    /// Send the selected card's draft. The draft stays in the field afterwards.
    pub fn send_message(&mut self) -> Option<NetworkCommand> {
        self.stop_editing();
        let device = self.selected_device()?;
        let msg = self.view.drafts.get(&device.id).cloned().unwrap_or_default();
        Some(NetworkCommand::ChangeMessage {
            device_id: device.id.clone(),
            msg,
        })
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.view.show_help = !self.view.show_help;
    }

    pub fn close_help(&mut self) {
        self.view.show_help = false;
    }
}

/// Clamp a byte cursor into `input` and back onto a char boundary
fn cursor_within(input: &str, pos: usize) -> usize {
    let mut pos = pos.min(input.len());
    while !input.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Device, DeviceId};

    fn loaded(devices: Vec<Device>) -> AppState {
        let mut app = AppState::new("http://localhost");
        app.apply(Action::GettingDevices);
        app.apply(Action::GotDevices(devices));
        app
    }

    fn two_devices() -> AppState {
        loaded(vec![
            Device::new("a", "A", "hall", ""),
            Device::new("b", "B", "desk", ""),
        ])
    }

    #[test]
    fn test_refresh_blocked_while_loading() {
        let mut app = AppState::new("http://localhost");
        assert_eq!(app.refresh_devices(), Some(NetworkCommand::FetchDevices));

        app.apply(Action::GettingDevices);
        assert_eq!(app.refresh_devices(), None);

        app.apply(Action::GotDevices(vec![]));
        assert_eq!(app.refresh_devices(), Some(NetworkCommand::FetchDevices));
        assert!(app.view.last_refreshed.is_some());
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = two_devices();
        app.select_prev();
        assert_eq!(app.view.selected, 1);
        app.select_next();
        assert_eq!(app.view.selected, 0);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut app = two_devices();
        app.select_next();
        app.apply(Action::GotDevices(vec![Device::new("a", "A", "", "")]));
        assert_eq!(app.view.selected, 0);
    }

    #[test]
    fn test_cannot_edit_without_devices() {
        let mut app = loaded(vec![]);
        app.start_editing();
        assert_eq!(app.view.input_mode, InputMode::Normal);
        assert_eq!(app.send_message(), None);
    }

    #[test]
    fn test_type_and_send_message() {
        let mut app = two_devices();
        app.select_next();
        app.start_editing();
        for c in "helo".chars() {
            app.enter_char(c);
        }
        app.move_cursor_left();
        app.enter_char('l');
        app.move_cursor_right();
        app.enter_char('!');
        app.delete_char();

        let cmd = app.send_message();
        assert_eq!(
            cmd,
            Some(NetworkCommand::ChangeMessage {
                device_id: DeviceId::new("b"),
                msg: "hello".to_string(),
            })
        );
        assert_eq!(app.view.input_mode, InputMode::Normal);
        // Draft is kept after sending
        assert_eq!(app.view.drafts[&DeviceId::new("b")], "hello");
        assert!(!app.view.drafts.contains_key(&DeviceId::new("a")));
    }

    #[test]
    fn test_drafts_are_per_device() {
        let mut app = two_devices();
        app.start_editing();
        app.enter_char('x');
        app.stop_editing();
        app.select_next();
        app.start_editing();
        assert_eq!(app.view.cursor_position, 0);
        app.enter_char('y');

        assert_eq!(app.view.drafts[&DeviceId::new("a")], "x");
        assert_eq!(app.view.drafts[&DeviceId::new("b")], "y");
    }

    #[test]
    fn test_refresh_pending_until_list_arrives() {
        let mut app = two_devices();
        assert_eq!(app.refresh_devices(), Some(NetworkCommand::FetchDevices));
        // GETTING_DEVICES has not come back yet
        assert_eq!(app.refresh_devices(), None);
        assert_eq!(app.refresh_devices(), None);

        app.apply(Action::GettingDevices);
        assert_eq!(app.refresh_devices(), None);
        app.apply(Action::GotDevices(vec![]));
        assert_eq!(app.refresh_devices(), Some(NetworkCommand::FetchDevices));
    }

    #[test]
    fn test_no_editing_while_fetching() {
        let mut app = two_devices();
        app.refresh_devices();
        app.start_editing();
        assert_eq!(app.view.input_mode, InputMode::Normal);

        app.apply(Action::GettingDevices);
        app.start_editing();
        assert_eq!(app.view.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_reordered_list_mid_edit_does_not_panic() {
        let mut app = two_devices();
        app.start_editing();
        for c in "hello".chars() {
            app.enter_char(c);
        }

        app.apply(Action::GotDevices(vec![
            Device::new("b", "B", "desk", ""),
            Device::new("a", "A", "hall", ""),
        ]));
        assert_eq!(app.view.input_mode, InputMode::Normal);

        // Stale cursor (5) over device b's empty draft
        app.move_cursor_left();
        app.move_cursor_right();
        app.view.cursor_position = 5;
        app.delete_char();
        app.view.cursor_position = 5;
        app.enter_char('z');
        assert_eq!(app.view.drafts[&DeviceId::new("b")], "z");
        assert_eq!(app.view.drafts[&DeviceId::new("a")], "hello");
    }

    #[test]
    fn test_cursor_snaps_to_char_boundary() {
        let mut app = two_devices();
        app.start_editing();
        app.enter_char('é');
        app.enter_char('x');
        // Inside the two-byte 'é'
        app.view.cursor_position = 1;
        app.enter_char('a');
        assert_eq!(app.view.drafts[&DeviceId::new("a")], "aéx");

        app.view.cursor_position = 2;
        app.delete_char();
        assert_eq!(app.view.drafts[&DeviceId::new("a")], "éx");
        assert_eq!(app.view.cursor_position, 0);
    }

    #[test]
    fn test_cursor_within() {
        assert_eq!(cursor_within("héllo", 99), 6);
        assert_eq!(cursor_within("héllo", 2), 1);
        assert_eq!(cursor_within("", 3), 0);
    }

    #[test]
    fn test_render_state_reflects_store() {
        let mut app = two_devices();
        app.apply(Action::ChangingMessage(DeviceId::new("a")));
        let render = app.to_render_state();
        assert_eq!(render.devices_status, DevicesStatus::Idle);
        assert!(render.is_updating(&DeviceId::new("a")));
        assert!(!render.is_updating(&DeviceId::new("b")));
    }
}
