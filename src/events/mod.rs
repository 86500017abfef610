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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Every state change happens on the main thread, in response
//! to exactly one [`AppEvent`] taken from the event channel: terminal input,
//! a periodic tick, a command from the command line, or a report from the
//! task worker. The user interface is redrawn after each event.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{debug, info};

use crate::{App, MainView, commander::Command, render::draw, tasks::AppTask};

/// Number of ticks a status message stays visible.
const STATUS_TICKS: u16 = 24;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Paste(String),

    Tick,

    SetMainView(MainView),
    ToggleSidebar,
    OpenSettings,

    Command(Command),
    AddUrls(String),

    Notice(String),
    Error(String),

    ExitApplication,
}

/// Implemented by views that take keyboard input.
pub(crate) trait AppEventProcessor {
    /// Processes a terminal event, returning whether the view consumed it.
    fn process_event(
        &mut self,
        event: &Event,
        task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Notice,
    Error,
}

/// The message shown in the status line, until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLine {
    pub(crate) kind: StatusKind,
    pub(crate) message: String,
    ticks_left: u16,
}

impl StatusLine {
    pub(crate) fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            ticks_left: STATUS_TICKS,
        }
    }

    /// Counts down one tick, returning `false` once the message has expired.
    fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left > 0
    }
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            info!("Exit requested");
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    if !matches!(event, AppEvent::Tick | AppEvent::Key(_)) {
        debug!(?event, "Handling event");
    }

    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Paste(text) => process_paste(app, &text),
        AppEvent::Tick => handle_tick(app),
        AppEvent::SetMainView(view) => handle_set_main_view(app, view),
        AppEvent::ToggleSidebar => handle_toggle_sidebar(app),
        AppEvent::OpenSettings => handle_open_settings(app),
        AppEvent::Command(command) => handle_command(app, command)?,
        AppEvent::AddUrls(text) => handle_add_urls(app, &text)?,
        AppEvent::Notice(message) => handle_status(app, StatusKind::Notice, message),
        AppEvent::Error(message) => handle_status(app, StatusKind::Error, message),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests;
