//! Smartscreen Manager - Actor-based device dashboard
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - store and reducer processing events and actions
//! - Network Layer (Tokio) - async HTTP tasks

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use smartscreen_tui::constants::LOG_FILE_NAME;
use smartscreen_tui::messages::ui_events::key_to_ui_event;
use smartscreen_tui::ui::draw_ui;
use smartscreen_tui::{
    ApiClient, AppActor, Config, Dispatcher, NetworkActor, NetworkCommand, RenderState, UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("smartscreen"))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;

    // Initialize logging to file
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(api = %config.api_url, delay_ms = config.update_delay.as_millis() as u64, "starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (dispatcher, action_rx) = Dispatcher::channel();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(
        ApiClient::new(config.api_url.clone()),
        dispatcher,
        config.update_delay,
    );
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(config.api_url.clone(), net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, action_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.input_mode, current_state.show_help)
                {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }

        // Let the actors run between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
