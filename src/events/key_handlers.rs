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

//! Keyboard and paste routing.
//!
//! Input goes to the first interested party, in this order: the settings
//! modal (while open), the command line, the active main view, and finally
//! the global key bindings. A view with a focused text input consumes every
//! key, so typing never triggers a global binding.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App, MainView,
    events::{AppEvent, AppEventProcessor, handlers::handle_settings_action},
};

/// Maps keyboard input to application actions.
///
/// # Arguments
///
/// * `app` - A mutable reference to the application state.
/// * `key` - The key event captured from the terminal backend.
///
/// # Errors
///
/// Returns an error if an event or task fails to send.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if app.settings_modal.is_open() {
        if let Some(action) = app.settings_modal.process_key(key) {
            handle_settings_action(app, action)?;
        }
        return Ok(());
    }

    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    let handled = match app.main_view {
        MainView::Downloads => app
            .downloads_view
            .process_event(&event, &app.task_tx, &app.event_tx)?,
        MainView::Library => app
            .library_view
            .process_event(&event, &app.task_tx, &app.event_tx)?,
    };
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('1') => app
            .event_tx
            .send(AppEvent::SetMainView(MainView::Downloads))?,
        KeyCode::Char('2') => app.event_tx.send(AppEvent::SetMainView(MainView::Library))?,

        KeyCode::Char(',') => app.event_tx.send(AppEvent::OpenSettings)?,
        KeyCode::Char('b') => app.event_tx.send(AppEvent::ToggleSidebar)?,

        _ => {}
    }

    Ok(())
}

/// Sends pasted text to whichever text input should receive it.
///
/// On the downloads view a paste focuses the URL box, so URLs can be pasted
/// without opening it first.
pub(super) fn process_paste(app: &mut App, text: &str) {
    if app.settings_modal.is_open() {
        app.settings_modal.insert_text(text);
        return;
    }

    if app.commander.insert_text(text) {
        return;
    }

    match app.main_view {
        MainView::Downloads => app.downloads_view.insert_text(text),
        MainView::Library => {
            app.library_view.insert_text(text);
        }
    }
}
