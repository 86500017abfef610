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

//! UI rendering logic for the download queue view.
//!
//! From top to bottom: the URL input box, the queue summary with its valid
//! and invalid badges, an alert when rejected URLs are queued, the queued
//! items themselves and the download button.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{
    components::DownloadsView,
    render::icons::{ICON_INVALID, ICON_VALID, ICON_WARNING},
    theme::Theme,
    util::format::{count_label, plural_suffix},
};

const INPUT_PLACEHOLDER: &str = "Paste Spotify or YouTube URLs (press i to type)";
const INPUT_HINT: &str = "Separate multiple URLs with commas or new lines";

impl DownloadsView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(self.alert_height()),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));
        let header = Paragraph::new(Span::styled(
            "Downloads",
            Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD),
        ))
        .block(header_block);
        f.render_widget(header, chunks[0]);

        self.draw_input(f, chunks[1], theme);

        f.render_widget(
            Paragraph::new(Span::styled(
                format!(" {INPUT_HINT}"),
                Style::default().fg(theme.muted_colour),
            )),
            chunks[2],
        );

        if self.queue.is_empty() {
            draw_empty_state(f, chunks[6], theme);
            return;
        }

        self.draw_summary(f, chunks[4], theme);
        self.draw_alert(f, chunks[5], theme);
        self.draw_items(f, chunks[6], theme);
        self.draw_download_button(f, chunks[7], theme);
    }

    fn alert_height(&self) -> u16 {
        if self.queue.invalid_count() > 0 { 1 } else { 0 }
    }

    fn draw_input(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.editing {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Add URLs ");

        let value = self.input.value();
        let text = if value.is_empty() && !self.editing {
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(theme.muted_colour))
        } else {
            Span::styled(value, Style::default().fg(theme.text_colour))
        };

        let inner = block.inner(area);
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        f.render_widget(
            Paragraph::new(Line::from(text))
                .scroll((0, scroll as u16))
                .block(block),
            area,
        );

        if self.editing {
            let cursor_x = inner.x + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_summary(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let valid = self.queue.valid_count();
        let invalid = self.queue.invalid_count();

        let mut spans = vec![Span::styled(
            format!(" {} in queue  ", count_label(self.queue.len(), "item")),
            Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD),
        )];

        if valid > 0 {
            spans.push(Span::styled(
                format!(" {valid} valid "),
                Style::default().fg(theme.background_colour).bg(theme.valid_colour),
            ));
            spans.push(Span::raw(" "));
        }
        if invalid > 0 {
            spans.push(Span::styled(
                format!(" {invalid} invalid "),
                Style::default().fg(theme.background_colour).bg(theme.invalid_colour),
            ));
            spans.push(Span::styled("  c clear invalid", Style::default().fg(theme.muted_colour)));
        }
        spans.push(Span::styled("  C clear all", Style::default().fg(theme.muted_colour)));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn draw_alert(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let invalid = self.queue.invalid_count();
        if invalid == 0 {
            return;
        }

        let alert = format!(
            " {ICON_WARNING} {invalid} invalid URL{} detected. Only valid URLs will be downloaded.",
            plural_suffix(invalid)
        );
        f.render_widget(
            Paragraph::new(Span::styled(alert, Style::default().fg(theme.warning_colour))),
            area,
        );
    }

    fn draw_items(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self
            .queue
            .items()
            .iter()
            .map(|item| {
                let (icon, colour) = if item.is_valid() {
                    (ICON_VALID, theme.valid_colour)
                } else {
                    (ICON_INVALID, theme.invalid_colour)
                };

                let mut lines = vec![Line::from(vec![
                    Span::styled(format!("{icon} "), Style::default().fg(colour)),
                    Span::styled(item.url.as_str(), Style::default().fg(theme.text_colour)),
                ])];

                if let Some(error) = item.error() {
                    lines.push(Line::from(Span::styled(
                        format!("  {error}"),
                        Style::default().fg(theme.invalid_colour),
                    )));
                }

                ListItem::new(Text::from(lines))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().padding(Padding::horizontal(1)))
            .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg));

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_download_button(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let valid = self.queue.valid_count();
        let label = format!(" Download {} (D) ", count_label(valid, "Song"));

        let style = if valid > 0 {
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.accent_colour)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_colour).bg(theme.panel_colour)
        };

        f.render_widget(
            Paragraph::new(Span::styled(label, style)).alignment(Alignment::Right),
            area,
        );
    }
}

fn draw_empty_state(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No songs in queue",
            Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Add some URLs above to get started",
            Style::default().fg(theme.muted_colour),
        )),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
