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

//! Event routing for the library view.
//!
//! While the search box has focus every key goes to it. Otherwise the view
//! handles its own filter, sort and bulk action keys and passes anything
//! else to the track table.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::LibraryView,
    events::{AppEvent, AppEventProcessor},
    model::{Source, TrackField},
    tasks::AppTask,
};

impl AppEventProcessor for LibraryView {
    fn process_event(
        &mut self,
        event: &Event,
        task_tx: &Sender<AppTask>,
        _event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.searching {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter => self.searching = false,
                _ => {
                    self.search.handle_event(event);
                    self.apply_search();
                }
            }
            return Ok(true);
        }

        match key_event.code {
            KeyCode::Char('/') => self.searching = true,

            KeyCode::Char('S') => self.toggle_source(Source::Spotify),
            KeyCode::Char('Y') => self.toggle_source(Source::YouTube),

            KeyCode::Char('P') => self.toggle_genre("Pop"),
            KeyCode::Char('R') => self.toggle_genre("Rock"),
            KeyCode::Char('E') => self.toggle_genre("Electronic"),

            KeyCode::Char('t') => self.sort_by(TrackField::Title),
            KeyCode::Char('r') => self.sort_by(TrackField::Artist),
            KeyCode::Char('l') => self.sort_by(TrackField::Album),
            KeyCode::Char('u') => self.sort_by(TrackField::Duration),
            KeyCode::Char('z') => self.sort_by(TrackField::FileSize),
            KeyCode::Char('w') => self.sort_by(TrackField::DownloadDate),

            KeyCode::Char('v') => self.toggle_view_mode(),
            KeyCode::Char('c') => self.clear_filters(),

            KeyCode::Char('x') | KeyCode::Delete => {
                self.delete_selected(task_tx)?;
            }
            KeyCode::Char('e') => {
                self.export_selected(task_tx)?;
            }

            _ => return Ok(self.track_table().process_event(event)),
        }

        Ok(true)
    }
}
