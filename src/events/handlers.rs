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

use anyhow::Result;
use tracing::debug;

use crate::{
    App, MainView,
    commander::Command,
    components::SettingsAction,
    events::{AppEvent, StatusKind, StatusLine},
    tasks::AppTask,
    theme::Theme,
    util::format::count_label,
};

pub(super) fn handle_tick(app: &mut App) {
    let expired = app.status.as_mut().is_some_and(|status| !status.tick());
    if expired {
        app.status = None;
    }
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    app.main_view = main_view;
}

pub(super) fn handle_toggle_sidebar(app: &mut App) {
    app.sidebar_open = !app.sidebar_open;
}

pub(super) fn handle_open_settings(app: &mut App) {
    app.settings_modal.open(&app.settings);
}

pub(super) fn handle_status(app: &mut App, kind: StatusKind, message: String) {
    debug!(?kind, %message, "Status changed");
    app.status = Some(StatusLine::new(kind, message));
}

pub(super) fn handle_command(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::Quit => app.event_tx.send(AppEvent::ExitApplication)?,

        Command::ShowView(view) => handle_set_main_view(app, view),
        Command::OpenSettings => handle_open_settings(app),

        Command::AddUrls(text) => handle_add_urls(app, &text)?,
        Command::ClearInvalid => {
            let removed = app.downloads_view.clear_invalid();
            let message = format!("Removed {}", count_label(removed, "invalid URL"));
            handle_status(app, StatusKind::Notice, message);
        }
        Command::ClearQueue => app.downloads_view.clear(),
        Command::Download => handle_download(app)?,

        Command::Sort(field) => {
            app.library_view.sort_by(field);
            handle_set_main_view(app, MainView::Library);
        }
        Command::ToggleSource(source) => {
            app.library_view.toggle_source(source);
            handle_set_main_view(app, MainView::Library);
        }
        Command::ToggleGenre(genre) => {
            app.library_view.toggle_genre(genre);
            handle_set_main_view(app, MainView::Library);
        }
        Command::ToggleViewMode => {
            app.library_view.toggle_view_mode();
            handle_set_main_view(app, MainView::Library);
        }
        Command::ClearFilters => {
            app.library_view.clear_filters();
            handle_set_main_view(app, MainView::Library);
        }
    }

    Ok(())
}

/// Adds URLs to the download queue, starting the download straight away if
/// the user asked for that.
pub(super) fn handle_add_urls(app: &mut App, text: &str) -> Result<()> {
    handle_set_main_view(app, MainView::Downloads);

    let added = app.downloads_view.add_urls(text);
    if added == 0 {
        return Ok(());
    }

    let message = format!("Added {} to the queue", count_label(added, "URL"));
    handle_status(app, StatusKind::Notice, message);

    if app.settings.auto_start && app.downloads_view.queue.valid_count() > 0 {
        handle_download(app)?;
    }

    Ok(())
}

pub(super) fn handle_download(app: &mut App) -> Result<()> {
    let count = app.downloads_view.start_download(&app.task_tx)?;
    if count == 0 {
        handle_status(app, StatusKind::Error, "No valid URLs to download".to_string());
    }

    Ok(())
}

pub(super) fn handle_settings_action(app: &mut App, action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Close => app.settings_modal.close(),

        SettingsAction::Save(settings) => {
            // Keep the modal open so the user can fix the draft
            if let Err(e) = settings.validate() {
                handle_status(app, StatusKind::Error, e.to_string());
                return Ok(());
            }

            app.theme = Theme::for_appearance(settings.appearance);
            app.settings = settings.clone();
            app.task_tx.send(AppTask::SaveSettings(settings))?;
            app.settings_modal.close();
        }
    }

    Ok(())
}
