// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Downbeat.
//!
//! A terminal-based music download manager.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all view state
//!   and renders the UI.
//! * A **Background Worker** owns the backend gateway and carries out
//!   download, delete, export and settings requests.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of an error. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod commander;
mod components;
mod config;
mod events;
mod gateway;
mod logging;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::{Deserialize, Serialize};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info, warn};

use crate::{
    commander::Commander,
    components::{DownloadsView, LibraryView, SettingsModal},
    config::AppConfig,
    events::{AppEvent, StatusLine, process_events},
    gateway::LoggingGateway,
    model::{library::Library, sample::sample_tracks, settings::Settings},
    tasks::{AppTask, spawn_task_worker},
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MainView {
    #[default]
    Downloads,
    Library,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,
    pub sidebar_open: bool,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub settings: Settings,

    pub downloads_view: DownloadsView,
    pub library_view: LibraryView,
    pub settings_modal: SettingsModal,

    pub commander: Commander,
    pub status: Option<StatusLine>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let settings = Settings::default();

        Self {
            theme: Theme::for_appearance(settings.appearance),
            main_view: config.start_view,
            sidebar_open: config.sidebar_open,
            config,
            event_tx,
            event_rx,
            task_tx,
            settings,
            downloads_view: DownloadsView::new(),
            library_view: LibraryView::new(Library::new(sample_tracks())),
            settings_modal: SettingsModal::new(),
            commander: Commander::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, sets up the communication
/// channels and application state, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let _log_guard = logging::init_logging(&config).context("Failed to initialise logging")?;

    if let Some(e) = config_error {
        warn!(error = %format!("{e:#}"), "Using default configuration");
    }
    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?app.config,
        "Starting"
    );

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!(error = %format!("{e:#}"), "Application error");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the current theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables bracketed paste, so pasted text arrives as a single event.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();

    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the terminal's own colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut stdout, &hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(terminal.backend_mut()).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker that owns the backend gateway and processes [`AppTask`]s.
/// * An input thread to read terminal key and paste events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to carry out backend requests.
    let task_event_tx = app.event_tx.clone();
    spawn_task_worker(Box::new(LoggingGateway::new()), task_rx, task_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Paste(text)) => AppEvent::Paste(text),
                Ok(_) => continue,
                Err(e) => {
                    error!(error = %e, "Failed to read terminal input");
                    break;
                }
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
