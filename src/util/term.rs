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

//! Terminal environment and styling utilities.
//!
//! These functions change the terminal emulator's background colour with OSC
//! (Operating System Command) escape sequences, so the application colours
//! reach the edges of the window. Terminals that do not understand the
//! sequences ignore them.

use std::io::{self, Write};

/// Sets the terminal background colour (OSC 11).
///
/// # Arguments
///
/// * `out` - Where to write the escape sequence, normally stdout.
/// * `hex_colour` - A colour such as `"#1e1e1e"`.
pub(crate) fn set_terminal_bg(out: &mut impl Write, hex_colour: &str) -> io::Result<()> {
    write!(out, "\x1b]11;{hex_colour}\x07")?;
    out.flush()
}

/// Resets the terminal background to the user's configured colour (OSC 111).
pub(crate) fn reset_terminal_bg(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\x1b]111\x07")?;
    out.flush()
}
