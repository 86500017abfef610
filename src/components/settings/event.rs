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

//! Input handling for the settings modal.
//!
//! The modal takes every key while it is open. Keys either edit the draft in
//! place or end the modal with a [`SettingsAction`].

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{SettingsAction, SettingsModal, SettingsSection},
    model::settings::SettingsField,
};

impl SettingsModal {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<SettingsAction> {
        if self.path_input.is_some() {
            match key.code {
                KeyCode::Enter => self.finish_path_edit(),
                KeyCode::Esc => self.path_input = None,
                _ => {
                    if let Some(input) = self.path_input.as_mut() {
                        input.handle_event(&Event::Key(key));
                    }
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(SettingsAction::Close),
            KeyCode::Char('s') => return Some(SettingsAction::Save(self.draft.clone())),

            KeyCode::Tab => self.section = self.section.next(),
            KeyCode::BackTab => self.section = self.section.previous(),

            _ if self.section == SettingsSection::General => self.process_general_key(key),

            _ => {}
        }

        None
    }

    fn process_general_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Char('k') | KeyCode::Up => self.focus = self.focus.previous(),

            KeyCode::Char('h') | KeyCode::Left => self.draft.adjust(self.focus, false),
            KeyCode::Char('l') | KeyCode::Right => self.draft.adjust(self.focus, true),

            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.focus == SettingsField::DownloadDir {
                    self.start_path_edit();
                } else {
                    self.draft.adjust(self.focus, true);
                }
            }

            _ => {}
        }
    }
}
