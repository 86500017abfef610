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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep backend requests
//! off the main UI thread. It provides a dedicated worker loop that owns the
//! [`DownloadGateway`], translates [`AppTask`] requests into gateway calls,
//! and reports the outcome back to the application via [`AppEvent`]s.
//!
//! Only requests that cross the backend boundary are tasks. Everything else
//! is a plain state change handled by events.

mod handlers;
use handlers::*;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};
use tracing::{debug, warn};

use crate::{
    events::AppEvent,
    gateway::DownloadGateway,
    model::{TrackId, settings::Settings},
};

#[derive(Debug)]
pub(crate) enum AppTask {
    SubmitDownloads(Vec<String>),
    DeleteTracks(Vec<TrackId>),
    ExportTracks(Vec<TrackId>),
    SaveSettings(Settings),
}

/// Spawns a background thread to process application tasks.
///
/// The worker takes ownership of the gateway and processes tasks in the
/// order they were sent. It exits when every task sender has been dropped.
///
/// # Arguments
///
/// * `gateway` - The backend boundary that tasks are dispatched to.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for reporting outcomes.
pub(crate) fn spawn_task_worker(
    gateway: Box<dyn DownloadGateway>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || run_task_worker(gateway, task_rx, event_tx))
}

fn run_task_worker(
    mut gateway: Box<dyn DownloadGateway>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    while let Ok(task) = task_rx.recv() {
        debug!(?task, "Processing task");

        let mut ctx = TaskContext {
            gateway: gateway.as_mut(),
            event_tx: &event_tx,
        };

        if let Err(e) = handle_task(task, &mut ctx) {
            warn!(error = %format!("{e:#}"), "Task failed");
            let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
        }
    }

    debug!("Task channel closed, worker exiting");
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    gateway: &'a mut dyn DownloadGateway,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::SubmitDownloads(urls) => submit_downloads(ctx, urls),
        AppTask::DeleteTracks(ids) => delete_tracks(ctx, ids),
        AppTask::ExportTracks(ids) => export_tracks(ctx, ids),
        AppTask::SaveSettings(settings) => save_settings(ctx, settings),
    }
}
