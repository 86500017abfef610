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

//! UI rendering logic for the library view.
//!
//! The view is a header with the track and selection counts, the search box,
//! the facet chips, and then either the track table (or grid) or an empty
//! state message.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::LibraryView,
    model::{Source, library::GENRES},
    render::Render,
    theme::Theme,
    util::format::count_label,
};

const SEARCH_PLACEHOLDER: &str = "Search by title, artist or album";

impl LibraryView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        self.draw_header(f, chunks[0], theme);
        self.draw_search(f, chunks[1], theme);
        self.draw_facets(f, chunks[2], theme);

        if self.library.visible_len() == 0 {
            self.draw_empty_state(f, chunks[4], theme);
        } else {
            self.track_table().draw(f, chunks[4], theme);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut spans = vec![
            Span::styled(
                "Library",
                Style::default()
                    .fg(theme.text_colour)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" | {}", count_label(self.library.visible_len(), "track")),
                Style::default().fg(theme.muted_colour),
            ),
        ];

        let selected = self.library.selected_count();
        if selected > 0 {
            spans.push(Span::styled(
                format!(" | {selected} selected  (x delete, e export)"),
                Style::default().fg(theme.accent_colour),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(header_block), area);
    }

    fn draw_search(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.searching {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Search (/) ");

        let value = self.search.value();
        let text = if value.is_empty() && !self.searching {
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.muted_colour))
        } else {
            Span::styled(value, Style::default().fg(theme.text_colour))
        };

        let inner = block.inner(area);
        f.render_widget(Paragraph::new(Line::from(text)).block(block), area);

        if self.searching {
            let cursor_x = inner.x + self.search.visual_cursor() as u16;
            f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    fn draw_facets(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let filter = self.library.filter();

        let chip = |label: String, active: bool| {
            let style = if active {
                Style::default().fg(theme.highlight_fg).bg(theme.accent_colour)
            } else {
                Style::default().fg(theme.muted_colour)
            };
            Span::styled(format!(" {label} "), style)
        };

        let mut spans = vec![Span::styled(" Source: ", Style::default().fg(theme.text_colour))];
        for source in Source::ALL {
            let key = source.name().chars().next().unwrap_or(' ');
            spans.push(chip(format!("{source} ({key})"), filter.sources.contains(&source)));
        }

        spans.push(Span::styled("   Genre: ", Style::default().fg(theme.text_colour)));
        for genre in GENRES {
            let key = genre.chars().next().unwrap_or(' ');
            spans.push(chip(format!("{genre} ({key})"), filter.genres.contains(genre)));
        }

        if filter.is_active() {
            spans.push(Span::styled("   c clear", Style::default().fg(theme.muted_colour)));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_empty_state(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (title, hint) = if self.library.filter().is_active() {
            ("No tracks found", "Try adjusting your search or filters")
        } else {
            ("Your library is empty", "Start downloading music to build your library")
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                title,
                Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(hint, Style::default().fg(theme.muted_colour))),
        ];

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
