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

//! Unicode and Emoji symbols for the TUI.
//!
//! This module contains standardized icons used across the interface to
//! represent track sources and item status. These are selected for
//! compatibility with most modern terminal emulators and fonts.

use crate::model::Source;

pub(crate) const ICON_SPOTIFY: &str = "\u{1F3B5}";
pub(crate) const ICON_YOUTUBE: &str = "\u{1F4FA}";
pub(crate) const ICON_APPLE_MUSIC: &str = "\u{1F34E}";

pub(crate) const ICON_VALID: &str = "\u{2713}";
pub(crate) const ICON_INVALID: &str = "\u{2717}";
pub(crate) const ICON_WARNING: &str = "\u{26A0}";

pub(crate) const ICON_SORT_ASCENDING: &str = "\u{2191}";
pub(crate) const ICON_SORT_DESCENDING: &str = "\u{2193}";

pub(crate) const CHECKBOX_ON: &str = "[x]";
pub(crate) const CHECKBOX_OFF: &str = "[ ]";

pub(crate) fn source_icon(source: Source) -> &'static str {
    match source {
        Source::Spotify => ICON_SPOTIFY,
        Source::YouTube => ICON_YOUTUBE,
    }
}

pub(crate) fn checkbox(checked: bool) -> &'static str {
    if checked { CHECKBOX_ON } else { CHECKBOX_OFF }
}
