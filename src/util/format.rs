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

/// Returns `"s"` unless `count` is exactly one.
pub(crate) fn plural_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Formats a count together with a noun, pluralising the noun as needed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(count_label(1, "song"), "1 song");
/// assert_eq!(count_label(3, "item"), "3 items");
/// ```
pub(crate) fn count_label(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_suffix(count))
}

/// Turns `\r\n` and bare `\r` line breaks into `\n`.
///
/// Terminals differ in which of these they send inside a bracketed paste.
pub(crate) fn normalise_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests;
