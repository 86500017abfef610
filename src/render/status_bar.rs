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

//! Render the status bar.
//!
//! Shows the latest notice or error while it lasts, otherwise the key
//! bindings of the active view.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::{
    App, MainView,
    events::StatusKind,
    render::icons::{ICON_INVALID, ICON_VALID},
};

const DOWNLOADS_HINTS: &str =
    "i add URLs  j/k move  d remove  c clear invalid  C clear all  D download  q quit";
const LIBRARY_HINTS: &str =
    "/ search  space select  t/r/l/u/z/w sort  S/Y source  v view  x delete  e export  q quit";

pub(crate) fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let (text, colour) = match &app.status {
        Some(status) => {
            let (icon, colour) = match status.kind {
                StatusKind::Notice => (ICON_VALID, theme.valid_colour),
                StatusKind::Error => (ICON_INVALID, theme.invalid_colour),
            };
            (format!("{icon} {}", status.message), colour)
        }
        None => {
            let hints = match app.main_view {
                MainView::Downloads => DOWNLOADS_HINTS,
                MainView::Library => LIBRARY_HINTS,
            };
            (hints.to_string(), theme.muted_colour)
        }
    };

    let area = Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(colour).bg(theme.background_colour)),
        area,
    );
}
