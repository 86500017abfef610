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

use anyhow::{Context, Result};

use crate::{
    events::AppEvent,
    model::{TrackId, settings::Settings},
    tasks::TaskContext,
    util::format::count_label,
};

pub(super) fn submit_downloads(ctx: &mut TaskContext, urls: Vec<String>) -> Result<()> {
    ctx.gateway
        .submit_downloads(&urls)
        .context("Failed to start downloads")?;

    let notice = format!("Started downloading {}", count_label(urls.len(), "song"));
    ctx.event_tx.send(AppEvent::Notice(notice))?;

    Ok(())
}

pub(super) fn delete_tracks(ctx: &mut TaskContext, ids: Vec<TrackId>) -> Result<()> {
    ctx.gateway
        .delete_tracks(&ids)
        .context("Failed to delete tracks")?;

    let notice = format!("Requested deletion of {}", count_label(ids.len(), "track"));
    ctx.event_tx.send(AppEvent::Notice(notice))?;

    Ok(())
}

pub(super) fn export_tracks(ctx: &mut TaskContext, ids: Vec<TrackId>) -> Result<()> {
    ctx.gateway
        .export_tracks(&ids)
        .context("Failed to export tracks")?;

    let notice = format!("Requested export of {}", count_label(ids.len(), "track"));
    ctx.event_tx.send(AppEvent::Notice(notice))?;

    Ok(())
}

pub(super) fn save_settings(ctx: &mut TaskContext, settings: Settings) -> Result<()> {
    ctx.gateway
        .save_settings(&settings)
        .context("Failed to save settings")?;

    ctx.event_tx
        .send(AppEvent::Notice("Settings saved".to_string()))?;

    Ok(())
}
