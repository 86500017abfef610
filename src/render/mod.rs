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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event to provide a reactive user interface.

mod commander;
pub(crate) mod icons;
mod sidebar;
mod status_bar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App, MainView,
    render::{commander::draw_commander, sidebar::draw_sidebar, status_bar::draw_status_bar},
    theme::Theme,
};

const SIDEBAR_WIDTH: u16 = 22;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// This function calculates the layout constraints and populates the frame
/// with widgets based on the current state of the [`App`].
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the top bar, sidebar, content
///   and the bottom line.
/// * **State Mapping**: Delegating the content area to the active view, and
///   overlaying the settings modal when it is open.
/// * **Styling**: Applying colors defined in the application theme.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like list scroll
///   positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(app.theme.background_colour)
                .fg(app.theme.text_colour),
        ),
        area,
    );

    // Outer layout: top bar, main, bottom line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_top_bar(f, outer[0], &app.theme);

    // Main layout: sidebar, content
    let sidebar_width = if app.sidebar_open { SIDEBAR_WIDTH } else { 0 };
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(outer[1]);

    if app.sidebar_open {
        draw_sidebar(f, main[0], app);
    }

    match app.main_view {
        MainView::Downloads => app.downloads_view.draw(f, main[1], &app.theme),
        MainView::Library => app.library_view.draw(f, main[1], &app.theme),
    }

    if app.commander.active() {
        draw_commander(f, outer[2], app);
    } else {
        draw_status_bar(f, outer[2], app);
    }

    if app.settings_modal.is_open() {
        app.settings_modal.draw(f, area, &app.theme);
    }
}

fn draw_top_bar(f: &mut Frame, area: Rect, theme: &Theme) {
    let [title_area, hints_area] = Layout::horizontal([Constraint::Min(0), Constraint::Length(32)])
        .horizontal_margin(1)
        .areas(area);

    let title = Line::from(vec![
        Span::styled(
            "Downbeat",
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  music downloads", Style::default().fg(theme.muted_colour)),
    ]);
    f.render_widget(Paragraph::new(title), title_area);

    let hints = Line::from(", settings  b sidebar  : command").right_aligned();
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme.muted_colour)),
        hints_area,
    );
}

/// Returns a rectangle of the given percentage size, centred in `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests;
