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

//! Settings modal.
//!
//! The modal edits a draft copy of the current [`Settings`]. Nothing changes
//! until the user saves, at which point the draft is returned to the
//! application as a [`SettingsAction::Save`]. Closing the modal discards the
//! draft.

mod event;
mod render;

use tui_input::{Input, InputRequest};

use crate::model::settings::{Settings, SettingsField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SettingsSection {
    #[default]
    General,
    Integrations,
    About,
}

impl SettingsSection {
    pub(crate) const ALL: [SettingsSection; 3] = [
        SettingsSection::General,
        SettingsSection::Integrations,
        SettingsSection::About,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            SettingsSection::General => "General",
            SettingsSection::Integrations => "Integrations",
            SettingsSection::About => "About",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|section| *section == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum SettingsAction {
    Save(Settings),
    Close,
}

#[derive(Default)]
pub(crate) struct SettingsModal {
    open: bool,
    pub(crate) section: SettingsSection,
    pub(crate) focus: SettingsField,
    pub(crate) draft: Settings,

    // Present while the download location is being edited
    pub(crate) path_input: Option<Input>,
}

impl SettingsModal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the modal on the General section with a fresh draft of
    /// `current`.
    pub(crate) fn open(&mut self, current: &Settings) {
        *self = Self {
            open: true,
            draft: current.clone(),
            ..Self::default()
        };
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
        self.path_input = None;
    }

    /// Inserts pasted text into the download location box, if it is being
    /// edited.
    pub(crate) fn insert_text(&mut self, text: &str) -> bool {
        let Some(input) = self.path_input.as_mut() else {
            return false;
        };
        for c in text.chars().filter(|c| !c.is_control()) {
            input.handle(InputRequest::InsertChar(c));
        }
        true
    }

    fn start_path_edit(&mut self) {
        self.path_input = Some(Input::new(self.draft.download_dir.display().to_string()));
    }

    fn finish_path_edit(&mut self) {
        if let Some(input) = self.path_input.take() {
            self.draft.set_download_dir(input.value());
        }
    }
}

#[cfg(test)]
mod tests;
