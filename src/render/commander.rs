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

//! Render the command-line interface.
//!
//! This module renders the visual representation of the command-line, the
//! current text and the cursor.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const PROMPT: &str = ":";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let [container] = Layout::horizontal([Constraint::Min(1)])
        .horizontal_margin(1)
        .areas(area);

    let width = container.width.saturating_sub(PROMPT.len() as u16) as usize;
    let scroll = commander.input.visual_scroll(width);

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(app.theme.accent_colour)),
        Span::raw(commander.input.value()),
    ]);
    f.render_widget(
        Paragraph::new(line)
            .scroll((0, scroll as u16))
            .style(
                Style::default()
                    .fg(app.theme.commander_colour)
                    .bg(app.theme.panel_colour),
            ),
        container,
    );

    let cursor = commander.input.visual_cursor().saturating_sub(scroll);
    let cursor_x = container.x + (PROMPT.len() + cursor) as u16;
    f.set_cursor_position((cursor_x.min(container.right().saturating_sub(1)), container.y));
}
