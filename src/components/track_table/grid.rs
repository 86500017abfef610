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

//! Card grid layout for the track table.
//!
//! Tracks are laid out left to right in fixed-size cards. The grid scrolls
//! by whole rows so that the card under the cursor is always visible.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    components::TrackTable,
    render::icons::{checkbox, source_icon},
    theme::Theme,
};

const CARD_WIDTH: u16 = 32;
const CARD_HEIGHT: u16 = 6;

impl TrackTable<'_> {
    pub(super) fn draw_grid(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = (area.width / CARD_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let card_width = area.width / columns as u16;

        let cursor = self.table_state.selected();
        let first_row = cursor
            .map(|i| (i / columns).saturating_sub(visible_rows - 1))
            .unwrap_or(0);

        let first = first_row * columns;
        let cards = self
            .library
            .visible_tracks()
            .enumerate()
            .skip(first)
            .take(visible_rows * columns);

        for (position, track) in cards {
            let offset = position - first;
            let card = Rect {
                x: area.x + (offset % columns) as u16 * card_width,
                y: area.y + (offset / columns) as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            }
            .intersection(area);

            let selected = self.library.is_selected(&track.id);
            let under_cursor = cursor == Some(position);

            let border_style = if under_cursor {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.border_colour)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(format!(" {} ", checkbox(selected)));

            let lines = vec![
                Line::from(Span::styled(
                    track.title.as_str(),
                    Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    track.artist.as_str(),
                    Style::default().fg(theme.text_colour),
                )),
                Line::from(Span::styled(
                    track.album.as_str(),
                    Style::default().fg(theme.muted_colour),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("{} {}", source_icon(track.source), track.source),
                        Style::default().fg(theme.source_colour(track.source)),
                    ),
                    Span::styled(
                        format!("  {}  {}  {}", track.format, track.duration, track.file_size),
                        Style::default().fg(theme.muted_colour),
                    ),
                ]),
            ];

            f.render_widget(Paragraph::new(lines).block(block), card);
        }
    }
}
