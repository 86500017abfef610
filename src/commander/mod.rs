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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line: a text input that, when a
//! command is submitted, parses it into a [`Command`] and hands it to the
//! application as an event. Parse failures are reported as error events so
//! they show up in the status line.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tracing::debug;
use tui_input::{Input, InputRequest, backend::crossterm::EventHandler};

use crate::{
    MainView,
    events::AppEvent,
    model::{Source, TrackField, library::canonical_genre},
    util::format::normalise_line_breaks,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    ShowView(MainView),
    OpenSettings,
    AddUrls(String),
    ClearInvalid,
    ClearQueue,
    Download,
    Sort(TrackField),
    ToggleSource(Source),
    ToggleGenre(&'static str),
    ToggleViewMode,
    ClearFilters,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("unknown sort field: {0}")]
    UnknownField(String),

    #[error("unknown source: {0}")]
    UnknownSource(String),

    #[error("unknown genre: {0}")]
    UnknownGenre(String),
}

/// Parses a submitted command line.
///
/// The first word names the command, the rest of the line (trimmed) is its
/// argument.
pub(crate) fn parse_command(buffer: &str) -> Result<Command, CommandError> {
    let buffer = buffer.trim();
    let (name, args) = match buffer.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (buffer, ""),
    };

    let argument = |command: &'static str| {
        if args.is_empty() {
            Err(CommandError::MissingArgument(command))
        } else {
            Ok(args)
        }
    };

    match name {
        "q" => Ok(Command::Quit),

        "dl" => Ok(Command::ShowView(MainView::Downloads)),
        "lib" => Ok(Command::ShowView(MainView::Library)),
        "set" => Ok(Command::OpenSettings),

        "add" => argument("add").map(|urls| Command::AddUrls(separate_urls(urls))),
        "ci" => Ok(Command::ClearInvalid),
        "ca" => Ok(Command::ClearQueue),
        "download" => Ok(Command::Download),

        "sort" => {
            let field = argument("sort")?;
            TrackField::parse(field)
                .map(Command::Sort)
                .ok_or_else(|| CommandError::UnknownField(field.to_string()))
        }
        "source" => {
            let source = argument("source")?;
            Source::parse(source)
                .map(Command::ToggleSource)
                .ok_or_else(|| CommandError::UnknownSource(source.to_string()))
        }
        "genre" => {
            let genre = argument("genre")?;
            canonical_genre(genre)
                .map(Command::ToggleGenre)
                .ok_or_else(|| CommandError::UnknownGenre(genre.to_string()))
        }
        "view" => Ok(Command::ToggleViewMode),
        "clear" => Ok(Command::ClearFilters),

        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Rejoins the URLs given to `add` with commas, so URLs separated only by
/// whitespace stay separate queue entries.
fn separate_urls(args: &str) -> String {
    args.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|url| !url.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning whether the command line consumed
    /// it.
    ///
    /// While active every key event is consumed. While inactive only `:` is,
    /// which activates the command line.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        event_tx: &Sender<AppEvent>,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => self.deactivate(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.deactivate();

                if !buffer.is_empty() {
                    debug!(command = %buffer, "Running command");
                    let event = match parse_command(&buffer) {
                        Ok(command) => AppEvent::Command(command),
                        Err(e) => AppEvent::Error(e.to_string()),
                    };
                    event_tx.send(event)?;
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    /// Inserts pasted text at the cursor, returning `false` if the command
    /// line is not active.
    pub(crate) fn insert_text(&mut self, text: &str) -> bool {
        if !self.active {
            return false;
        }
        // Pasted lines become separate arguments
        let text = normalise_line_breaks(text.trim_end()).replace('\n', " ");
        for c in text.chars().filter(|c| !c.is_control()) {
            self.input.handle(InputRequest::InsertChar(c));
        }
        true
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

#[cfg(test)]
mod tests;
