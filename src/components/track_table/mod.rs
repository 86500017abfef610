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

//! Interactive track table widget.
//!
//! This module provides the component that displays the library's visible
//! tracks and moves a cursor over them. The table does not own any state:
//! [`TrackTable`] is a short-lived view borrowing the [`Library`] (which owns
//! the checked tracks) and the [`TableState`] (which owns the cursor and
//! scroll offset), created whenever an event is processed or a frame drawn.
//!
//! The same cursor is shared by the table and the card grid layouts.

mod event;
mod grid;
mod render;

use ratatui::widgets::TableState;

use crate::model::library::Library;

pub(crate) struct TrackTable<'a> {
    library: &'a mut Library,
    table_state: &'a mut TableState,
}

impl<'a> TrackTable<'a> {
    pub(crate) fn new(library: &'a mut Library, table_state: &'a mut TableState) -> Self {
        Self {
            library,
            table_state,
        }
    }

    fn goto_next(&mut self) {
        let len = self.library.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.library.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if self.library.visible_len() > 0 {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        let len = self.library.visible_len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    fn toggle_select_current(&mut self) {
        let current = self
            .table_state
            .selected()
            .and_then(|i| self.library.visible_track(i))
            .map(|track| track.id.clone());

        if let Some(id) = current {
            self.library.toggle_select(&id);
        }
    }

    fn toggle_select_all(&mut self) {
        self.library.toggle_select_all();
    }
}

/// Keeps the cursor on a visible row after the number of rows changed.
pub(crate) fn clamp_cursor(table_state: &mut TableState, len: usize) {
    match table_state.selected() {
        _ if len == 0 => table_state.select(None),
        Some(i) if i >= len => table_state.select(Some(len - 1)),
        None => table_state.select(Some(0)),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests;
