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

//! Event routing for the download queue view.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    commander::Command,
    components::DownloadsView,
    events::{AppEvent, AppEventProcessor},
    tasks::AppTask,
};

impl AppEventProcessor for DownloadsView {
    fn process_event(
        &mut self,
        event: &Event,
        _task_tx: &Sender<AppTask>,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.editing {
            match key_event.code {
                KeyCode::Esc => self.editing = false,
                KeyCode::Enter => {
                    self.submit_input(event_tx)?;
                    self.editing = false;
                }
                _ => {
                    self.input.handle_event(event);
                }
            }
            return Ok(true);
        }

        match key_event.code {
            KeyCode::Char('i') | KeyCode::Enter => self.editing = true,

            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),

            KeyCode::Char('d') | KeyCode::Delete => {
                self.remove_current();
            }
            KeyCode::Char('c') => {
                self.clear_invalid();
            }
            KeyCode::Char('C') => self.clear(),
            KeyCode::Char('D') => event_tx.send(AppEvent::Command(Command::Download))?,

            _ => return Ok(false),
        }

        Ok(true)
    }
}
