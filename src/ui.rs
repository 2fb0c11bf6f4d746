//! View layer - pure drawing functions over a [`RenderState`] snapshot

use ratatui::{prelude::*, widgets::*};

use crate::app::state::DevicesStatus;
use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;

/// Rows taken by one device card, borders included
pub const CARD_HEIGHT: u16 = 5;

/// What a single device card shows
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCard {
    pub title: String,
    pub info: String,
    pub draft: String,
    pub updating: bool,
    pub selected: bool,
}

/// Which body the device area shows
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceListView {
    /// Nothing fetched yet, or a fetch is outstanding
    Placeholder,
    NoDevices,
    Cards(Vec<DeviceCard>),
}

/// Derive the device area from the snapshot
pub fn device_list_view(state: &RenderState) -> DeviceListView {
    match state.devices_status {
        DevicesStatus::Empty | DevicesStatus::Loading => DeviceListView::Placeholder,
        DevicesStatus::Idle => {
            let devices = state.devices.as_deref().unwrap_or(&[]);
            if devices.is_empty() {
                return DeviceListView::NoDevices;
            }
            let cards = devices
                .iter()
                .enumerate()
                .map(|(i, d)| DeviceCard {
                    title: d.name.clone(),
                    info: format!("info: {}", d.comment),
                    draft: state.draft(&d.id).to_string(),
                    updating: state.is_updating(&d.id),
                    selected: i == state.selected,
                })
                .collect();
            DeviceListView::Cards(cards)
        }
    }
}

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Page header
            Constraint::Min(0),    // Devices
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);
    draw_devices(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let button = if state.is_loading() {
        Span::styled("[...] Update List", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled("[u] Update List", Style::default().fg(Color::Cyan).bold())
    };

    let refreshed = state
        .last_refreshed
        .map(|t| format!(" refreshed {} ", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {} ", APP_NAME)).bold())
        .title_bottom(Line::from(refreshed).right_aligned());

    let line = Line::from(vec![
        button,
        Span::raw("  "),
        Span::styled(state.api_url.as_str(), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_devices(f: &mut Frame, state: &RenderState, area: Rect) {
    match device_list_view(state) {
        DeviceListView::Placeholder => {
            f.render_widget(Paragraph::new(""), area);
        }
        DeviceListView::NoDevices => {
            let text = Paragraph::new("no devices")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(text, area);
        }
        DeviceListView::Cards(cards) => {
            let per_page = (area.height / CARD_HEIGHT).max(1) as usize;
            let first = state.selected.saturating_sub(per_page - 1);

            let visible: Vec<&DeviceCard> = cards.iter().skip(first).take(per_page).collect();
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    visible
                        .iter()
                        .map(|_| Constraint::Length(CARD_HEIGHT))
                        .chain(std::iter::once(Constraint::Min(0))),
                )
                .split(area);

            for (card, row) in visible.into_iter().zip(rows.iter()) {
                draw_card(f, state, card, *row);
            }
        }
    }
}

fn draw_card(f: &mut Frame, state: &RenderState, card: &DeviceCard, area: Rect) {
    let editing = card.selected && state.input_mode == InputMode::Editing;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else if card.selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(format!(" {} ", card.title)).bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    f.render_widget(Paragraph::new(card.info.as_str()), lines[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(lines[1]);

    let input_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let input = Paragraph::new(format!("> {}", card.draft)).style(input_style);
    f.render_widget(input, cols[0]);

    let button = if card.updating {
        Span::styled("[...] update", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled("[ update ]", Style::default().fg(Color::Green).bold())
    };
    f.render_widget(Paragraph::new(Line::from(button).right_aligned()), cols[1]);

    if editing {
        f.set_cursor_position(input_cursor(cols[0], state.cursor_position));
    }
}

/// Cursor cell for a `> `-prefixed input, kept inside `area`
fn input_cursor(area: Rect, cursor_position: usize) -> Position {
    let max_x = area.x.saturating_add(area.width.saturating_sub(1));
    let offset = u16::try_from(cursor_position).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(2).saturating_add(offset).min(max_x);
    Position::new(cursor_x, area.y)
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading() {
        " Loading devices... "
    } else if state.input_mode == InputMode::Editing {
        " Enter:send | ESC:stop editing | arrows:move "
    } else {
        " u:update list | ↑/↓:select | e:edit message | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = format!(
        r#"
 {} v{} - Keyboard Shortcuts

 DEVICES
   u / r              Update the device list
   ↑ / ↓  (k / j)     Select a device

 MESSAGE
   e / Enter          Edit the selected device's message
   Enter (editing)    Send the message
   Esc                Stop editing

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
