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

//! Render the navigation sidebar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
};

use crate::{App, MainView};

const ENTRIES: [(MainView, &str, &str); 2] = [
    (MainView::Downloads, "Downloads", "1"),
    (MainView::Library, "Library", "2"),
];

pub(crate) fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border_colour))
        .style(Style::default().bg(theme.panel_colour))
        .padding(Padding::new(1, 1, 1, 0));

    let label_width = (area.width as usize).saturating_sub(6);
    let items: Vec<ListItem> = ENTRIES
        .iter()
        .map(|(_, label, shortcut)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{label:<label_width$}")),
                Span::styled(*shortcut, Style::default().fg(theme.muted_colour)),
            ]))
        })
        .collect();

    let selected = ENTRIES.iter().position(|(view, _, _)| *view == app.main_view);
    let mut state = ListState::default().with_selected(selected);

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.text_colour))
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.highlight_fg)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut state);
}
