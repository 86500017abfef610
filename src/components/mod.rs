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

//! Stateful view components.
//!
//! Each component owns the state behind one part of the screen, processes
//! the key events routed to it and knows how to draw itself.

mod downloads;
mod library;
mod settings;
mod track_table;

pub(crate) use downloads::DownloadsView;
pub(crate) use library::LibraryView;
pub(crate) use settings::{SettingsAction, SettingsModal, SettingsSection};
pub(crate) use track_table::TrackTable;
