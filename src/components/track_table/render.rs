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

//! UI rendering logic for the track table.
//!
//! This module handles the visual representation of track data, including
//! column layout, sort indicators, checked rows and cursor highlighting.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::TrackTable,
    model::{
        Track, TrackField,
        library::{SortDirection, SortOrder, ViewMode},
    },
    render::{
        Render,
        icons::{ICON_SORT_ASCENDING, ICON_SORT_DESCENDING, checkbox, source_icon},
    },
    theme::Theme,
};

const COLUMNS: [(TrackField, Constraint); 9] = [
    (TrackField::Title, Constraint::Percentage(22)),
    (TrackField::Artist, Constraint::Percentage(16)),
    (TrackField::Album, Constraint::Percentage(16)),
    (TrackField::Duration, Constraint::Length(9)),
    (TrackField::FileSize, Constraint::Length(8)),
    (TrackField::Source, Constraint::Length(11)),
    (TrackField::Format, Constraint::Length(7)),
    (TrackField::Genre, Constraint::Length(11)),
    (TrackField::DownloadDate, Constraint::Length(12)),
];

impl Render for TrackTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        match self.library.view_mode() {
            ViewMode::Table => self.draw_table(f, area, theme),
            ViewMode::Grid => self.draw_grid(f, area, theme),
        }
    }
}

impl TrackTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.library.visible_tracks().map(|track| {
            let selected = self.library.is_selected(&track.id);
            let checkbox_style = if selected {
                Style::default().fg(theme.accent_colour)
            } else {
                Style::default().fg(theme.muted_colour)
            };

            let mut cells = vec![Cell::from(Line::from(checkbox(selected)).style(checkbox_style))];
            cells.extend(COLUMNS.iter().map(|(field, _)| field_cell(track, *field, theme)));
            Row::new(cells)
        });

        let all_checked = self.library.visible_len() > 0 && self.library.all_selected();
        let sort = self.library.sort_order();

        let mut header = vec![Cell::from(checkbox(all_checked))];
        header.extend(COLUMNS.iter().map(|(field, _)| Cell::from(header_label(*field, sort))));

        let mut widths = vec![Constraint::Length(3)];
        widths.extend(COLUMNS.iter().map(|(_, width)| *width));

        let table = Table::new(rows, widths)
            .header(
                Row::new(header)
                    .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
                    .bottom_margin(1),
            )
            .column_spacing(1)
            .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
            .block(Block::default());

        f.render_stateful_widget(table, area, self.table_state);
    }
}

fn header_label(field: TrackField, sort: Option<SortOrder>) -> String {
    match sort {
        Some(order) if order.field == field => {
            let arrow = match order.direction {
                SortDirection::Ascending => ICON_SORT_ASCENDING,
                SortDirection::Descending => ICON_SORT_DESCENDING,
            };
            format!("{} {arrow}", field.label())
        }
        _ => field.label().to_string(),
    }
}

fn field_cell<'a>(track: &'a Track, field: TrackField, theme: &Theme) -> Cell<'a> {
    let text = Style::default().fg(theme.text_colour);
    let muted = Style::default().fg(theme.muted_colour);

    match field {
        TrackField::Title => Cell::from(Span::styled(
            track.title.as_str(),
            text.add_modifier(Modifier::BOLD),
        )),
        TrackField::Artist => Cell::from(Span::styled(track.artist.as_str(), text)),
        TrackField::Album => Cell::from(Span::styled(track.album.as_str(), muted)),
        TrackField::Duration => Cell::from(Span::styled(track.duration.as_str(), muted)),
        TrackField::FileSize => Cell::from(Span::styled(track.file_size.as_str(), muted)),
        TrackField::Source => Cell::from(Span::styled(
            format!("{} {}", source_icon(track.source), track.source),
            Style::default().fg(theme.source_colour(track.source)),
        )),
        TrackField::Format => Cell::from(Span::styled(track.format.as_str(), text)),
        TrackField::Genre => Cell::from(Span::styled(track.genre.as_deref().unwrap_or("-"), muted)),
        TrackField::DownloadDate => Cell::from(Span::styled(track.download_date.as_str(), muted)),
    }
}
