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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palettes, one per
//! [`Appearance`], and provides a utility for converting colors to the
//! hexadecimal strings used for terminal emulator styling.

use ratatui::style::Color;

use crate::model::{Source, settings::Appearance};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) panel_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    pub(crate) valid_colour: Color,
    pub(crate) invalid_colour: Color,
    pub(crate) warning_colour: Color,

    pub(crate) spotify_colour: Color,
    pub(crate) youtube_colour: Color,

    pub(crate) commander_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Picks the palette for an appearance preference.
    ///
    /// The terminal gives no reliable way to ask for the system preference,
    /// so `System` uses the dark palette.
    pub(crate) const fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark | Appearance::System => Self::dark(),
        }
    }

    pub(crate) const fn dark() -> Self {
        Self {
            background_colour: Color::Rgb(17, 24, 39),
            panel_colour: Color::Rgb(31, 41, 55),
            text_colour: Color::Rgb(243, 244, 246),
            muted_colour: Color::Rgb(156, 163, 175),
            accent_colour: Color::Rgb(168, 85, 247),
            border_colour: Color::Rgb(75, 85, 99),
            highlight_bg: Color::Rgb(88, 28, 135),
            highlight_fg: Color::Rgb(255, 255, 255),

            valid_colour: Color::Rgb(74, 222, 128),
            invalid_colour: Color::Rgb(248, 113, 113),
            warning_colour: Color::Rgb(250, 204, 21),

            spotify_colour: Color::Rgb(30, 215, 96),
            youtube_colour: Color::Rgb(255, 78, 69),

            commander_colour: Color::Rgb(250, 189, 47),
        }
    }

    pub(crate) const fn light() -> Self {
        Self {
            background_colour: Color::Rgb(249, 250, 251),
            panel_colour: Color::Rgb(255, 255, 255),
            text_colour: Color::Rgb(17, 24, 39),
            muted_colour: Color::Rgb(107, 114, 128),
            accent_colour: Color::Rgb(124, 58, 237),
            border_colour: Color::Rgb(209, 213, 219),
            highlight_bg: Color::Rgb(237, 233, 254),
            highlight_fg: Color::Rgb(76, 29, 149),

            valid_colour: Color::Rgb(22, 163, 74),
            invalid_colour: Color::Rgb(220, 38, 38),
            warning_colour: Color::Rgb(202, 138, 4),

            spotify_colour: Color::Rgb(21, 128, 61),
            youtube_colour: Color::Rgb(185, 28, 28),

            commander_colour: Color::Rgb(124, 58, 237),
        }
    }

    pub(crate) fn source_colour(&self, source: Source) -> Color {
        match source {
            Source::Spotify => self.spotify_colour,
            Source::YouTube => self.youtube_colour,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background color via
    /// escape sequences. Returns `None` for anything other than an `Rgb`
    /// colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
            _ => None,
        }
    }
}
