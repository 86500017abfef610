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

//! UI rendering logic for the settings modal.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Tabs},
};

use crate::{
    components::{SettingsModal, SettingsSection},
    model::settings::SettingsField,
    render::{
        centered_rect,
        icons::{ICON_APPLE_MUSIC, ICON_SPOTIFY, ICON_YOUTUBE},
    },
    theme::Theme,
};

const APP_NAME: &str = "Downbeat";
const APP_DESCRIPTION: &str = "A terminal music download manager for Spotify and YouTube.";

const FOCUS_MARKER: &str = "> ";
const LABEL_WIDTH: usize = 26;

impl SettingsModal {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent_colour))
            .title(" Settings ")
            .style(Style::default().bg(theme.panel_colour).fg(theme.text_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let tabs = Tabs::new(SettingsSection::ALL.iter().map(|section| section.label()))
            .select(self.section.index())
            .style(Style::default().fg(theme.muted_colour))
            .highlight_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .divider(" | ");
        f.render_widget(tabs, chunks[0]);

        match self.section {
            SettingsSection::General => self.draw_general(f, chunks[1], theme),
            SettingsSection::Integrations => draw_integrations(f, chunks[1], theme),
            SettingsSection::About => draw_about(f, chunks[1], theme),
        }

        let hints = match self.section {
            SettingsSection::General if self.path_input.is_some() => "Enter apply  Esc cancel",
            SettingsSection::General => {
                "Tab section  j/k move  h/l change  Enter edit  s save  Esc close"
            }
            _ => "Tab section  s save  Esc close",
        };
        f.render_widget(
            Paragraph::new(Span::styled(hints, Style::default().fg(theme.muted_colour))),
            chunks[2],
        );
    }

    fn draw_general(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Vec::new();

        for field in SettingsField::ALL {
            let focused = field == self.focus;
            let marker = if focused { FOCUS_MARKER } else { "  " };
            let label_style = if focused {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_colour)
            };

            let value = match (&self.path_input, field) {
                (Some(input), SettingsField::DownloadDir) => input.value().to_string(),
                _ => self.draft.value_label(field),
            };

            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), label_style),
                Span::styled(value, Style::default().fg(theme.accent_colour)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", field.description()),
                Style::default().fg(theme.muted_colour),
            )));
        }

        f.render_widget(Paragraph::new(lines), area);

        if let Some(input) = &self.path_input {
            let row = SettingsField::ALL
                .iter()
                .position(|field| *field == SettingsField::DownloadDir)
                .unwrap_or(0) as u16
                * 2;
            let x = area.x + (FOCUS_MARKER.len() + LABEL_WIDTH + input.visual_cursor()) as u16;
            f.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y + row));
        }
    }
}

fn draw_integrations(f: &mut Frame, area: Rect, theme: &Theme) {
    let row = |icon: &str, name: &str, status: &'static str| {
        Line::from(vec![
            Span::raw(format!("{icon} ")),
            Span::styled(
                format!("{name:<16}"),
                Style::default()
                    .fg(theme.text_colour)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status, Style::default().fg(theme.muted_colour)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "Connect streaming accounts to download from your playlists.",
            Style::default().fg(theme.muted_colour),
        )),
        Line::from(""),
        row(ICON_SPOTIFY, "Spotify", "Not configured"),
        row(ICON_YOUTUBE, "YouTube", "Not configured"),
        row(ICON_APPLE_MUSIC, "Apple Music", "Coming soon"),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_about(f: &mut Frame, area: Rect, theme: &Theme) {
    let label = Style::default().fg(theme.muted_colour);
    let value = Style::default().fg(theme.text_colour);

    let lines = vec![
        Line::from(Span::styled(
            APP_NAME,
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(APP_DESCRIPTION, value)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Version   ", label),
            Span::styled(env!("CARGO_PKG_VERSION"), value),
        ]),
        Line::from(vec![
            Span::styled("Platform  ", label),
            Span::styled(
                format!("{} ({})", std::env::consts::OS, std::env::consts::ARCH),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("License   ", label),
            Span::styled(env!("CARGO_PKG_LICENSE"), value),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
