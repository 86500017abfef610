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

//! Download queue view.
//!
//! This module coordinates the URL input box, the [`DownloadQueue`] and the
//! cursor over the queued items. Submitted input is handed to the
//! application as an [`AppEvent::AddUrls`] so that URLs typed here and URLs
//! added from the command line take the same path.

mod event;
mod render;

use std::sync::mpsc::Sender;

use anyhow::Result;
use ratatui::widgets::ListState;
use tui_input::{Input, InputRequest};

use crate::{
    events::AppEvent,
    model::queue::{DownloadQueue, QueueItem},
    tasks::AppTask,
    util::format::normalise_line_breaks,
};

pub(crate) struct DownloadsView {
    pub(crate) queue: DownloadQueue,
    pub(crate) input: Input,
    pub(crate) editing: bool,
    pub(crate) list_state: ListState,
}

impl DownloadsView {
    pub(crate) fn new() -> Self {
        Self {
            queue: DownloadQueue::new(),
            input: Input::default(),
            editing: false,
            list_state: ListState::default(),
        }
    }

    /// Validates and appends every URL in `text`, returning how many were
    /// added.
    pub(crate) fn add_urls(&mut self, text: &str) -> usize {
        let added = self.queue.add_input(text);
        self.sync_cursor();
        added
    }

    /// Hands the input box contents to the application and clears it.
    ///
    /// Blank input is ignored.
    pub(crate) fn submit_input(&mut self, event_tx: &Sender<AppEvent>) -> Result<()> {
        let value = self.input.value();
        if value.trim().is_empty() {
            return Ok(());
        }

        event_tx.send(AppEvent::AddUrls(value.to_string()))?;
        self.input.reset();
        Ok(())
    }

    pub(crate) fn remove_current(&mut self) -> Option<QueueItem> {
        let removed = self.list_state.selected().and_then(|i| self.queue.remove(i));
        self.sync_cursor();
        removed
    }

    pub(crate) fn clear_invalid(&mut self) -> usize {
        let removed = self.queue.clear_invalid();
        self.sync_cursor();
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.queue.clear();
        self.sync_cursor();
    }

    /// Requests download of every accepted URL and empties the queue.
    ///
    /// Does nothing, and returns zero, when no queued URL was accepted.
    pub(crate) fn start_download(&mut self, task_tx: &Sender<AppTask>) -> Result<usize> {
        let urls = self.queue.take_valid();
        if urls.is_empty() {
            return Ok(0);
        }

        let count = urls.len();
        task_tx.send(AppTask::SubmitDownloads(urls))?;
        self.sync_cursor();
        Ok(count)
    }

    /// Inserts pasted text into the URL box, giving it focus.
    ///
    /// Line breaks are kept as separators between URLs.
    pub(crate) fn insert_text(&mut self, text: &str) {
        self.editing = true;

        let text = normalise_line_breaks(text.trim_end());
        for c in text.chars() {
            if c == '\n' {
                self.input.handle(InputRequest::InsertChar(','));
                self.input.handle(InputRequest::InsertChar(' '));
            } else if !c.is_control() {
                self.input.handle(InputRequest::InsertChar(c));
            }
        }
    }

    fn goto_next(&mut self) {
        let len = self.queue.len();
        if len > 0 {
            let i = self.list_state.selected().map_or(0, |i| (i + 1).min(len - 1));
            self.list_state.select(Some(i));
        }
    }

    fn goto_previous(&mut self) {
        if self.queue.len() > 0 {
            let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
            self.list_state.select(Some(i));
        }
    }

    fn sync_cursor(&mut self) {
        let len = self.queue.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }
}
