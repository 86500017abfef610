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

//! Library browser view.
//!
//! This module coordinates the [`Library`] (filter, sort and selection
//! state), the search input and the track table cursor. Bulk actions on the
//! checked tracks are handed to the task worker.

mod event;
mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use ratatui::widgets::TableState;
use tracing::debug;
use tui_input::{Input, InputRequest};

use crate::{
    components::{TrackTable, track_table::clamp_cursor},
    model::{Source, TrackField, library::Library},
    tasks::AppTask,
};

pub(crate) struct LibraryView {
    pub(crate) library: Library,
    pub(crate) search: Input,
    pub(crate) searching: bool,
    pub(crate) table_state: TableState,
}

impl LibraryView {
    pub(crate) fn new(library: Library) -> Self {
        let mut view = Self {
            library,
            search: Input::default(),
            searching: false,
            table_state: TableState::default(),
        };
        view.sync_cursor();
        view
    }

    pub(crate) fn track_table(&mut self) -> TrackTable<'_> {
        TrackTable::new(&mut self.library, &mut self.table_state)
    }

    pub(crate) fn sort_by(&mut self, field: TrackField) {
        self.library.sort_by(field);
        debug!(order = ?self.library.sort_order(), "Library sort changed");
    }

    pub(crate) fn toggle_source(&mut self, source: Source) {
        self.library.toggle_source(source);
        self.sync_cursor();
    }

    pub(crate) fn toggle_genre(&mut self, genre: &str) {
        self.library.toggle_genre(genre);
        self.sync_cursor();
    }

    /// Clears the search text and every facet.
    pub(crate) fn clear_filters(&mut self) {
        self.search.reset();
        self.library.clear_filters();
        self.sync_cursor();
    }

    pub(crate) fn toggle_view_mode(&mut self) {
        self.library.toggle_view_mode();
    }

    /// Requests deletion of the checked tracks and clears the selection.
    ///
    /// Returns the number of tracks requested, zero when nothing is checked.
    pub(crate) fn delete_selected(&mut self, task_tx: &Sender<AppTask>) -> Result<usize> {
        let ids = self.library.take_selection();
        if ids.is_empty() {
            return Ok(0);
        }
        let count = ids.len();
        task_tx.send(AppTask::DeleteTracks(ids))?;
        Ok(count)
    }

    /// Requests export of the checked tracks and clears the selection.
    pub(crate) fn export_selected(&mut self, task_tx: &Sender<AppTask>) -> Result<usize> {
        let ids = self.library.take_selection();
        if ids.is_empty() {
            return Ok(0);
        }
        let count = ids.len();
        task_tx.send(AppTask::ExportTracks(ids))?;
        Ok(count)
    }

    /// Inserts pasted text into the search box, if it has focus.
    pub(crate) fn insert_text(&mut self, text: &str) -> bool {
        if !self.searching {
            return false;
        }
        for c in text.chars() {
            let c = if c.is_control() { ' ' } else { c };
            self.search.handle(InputRequest::InsertChar(c));
        }
        self.apply_search();
        true
    }

    fn apply_search(&mut self) {
        self.library.set_query(self.search.value());
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        clamp_cursor(&mut self.table_state, self.library.visible_len());
    }
}
