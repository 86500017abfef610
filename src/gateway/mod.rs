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

//! Backend boundary.
//!
//! Everything that would do real work (downloading audio, deleting or
//! exporting library files, storing settings) is requested through the
//! [`DownloadGateway`] trait. The gateway is owned by the task worker, so
//! implementations may block without stalling the user interface.
//!
//! [`LoggingGateway`] is the only implementation today: it records each
//! request in the log and reports success.

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;
use tracing::info;

use crate::model::{
    TrackId,
    settings::{Settings, SettingsError},
};

#[derive(Debug, Error)]
pub(crate) enum GatewayError {
    #[error("nothing to {0}")]
    EmptyRequest(&'static str),

    #[error("settings rejected")]
    InvalidSettings(#[from] SettingsError),
}

pub(crate) trait DownloadGateway: Send {
    /// Starts downloading the given URLs.
    fn submit_downloads(&mut self, urls: &[String]) -> Result<(), GatewayError>;

    /// Deletes the given tracks from the library.
    fn delete_tracks(&mut self, ids: &[TrackId]) -> Result<(), GatewayError>;

    /// Exports the given tracks.
    fn export_tracks(&mut self, ids: &[TrackId]) -> Result<(), GatewayError>;

    /// Stores the user's download preferences.
    fn save_settings(&mut self, settings: &Settings) -> Result<(), GatewayError>;
}

#[derive(Debug, Default)]
pub(crate) struct LoggingGateway;

impl LoggingGateway {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl DownloadGateway for LoggingGateway {
    fn submit_downloads(&mut self, urls: &[String]) -> Result<(), GatewayError> {
        if urls.is_empty() {
            return Err(GatewayError::EmptyRequest("download"));
        }
        info!(count = urls.len(), ?urls, "Download requested");
        Ok(())
    }

    fn delete_tracks(&mut self, ids: &[TrackId]) -> Result<(), GatewayError> {
        if ids.is_empty() {
            return Err(GatewayError::EmptyRequest("delete"));
        }
        info!(count = ids.len(), ?ids, "Track deletion requested");
        Ok(())
    }

    fn export_tracks(&mut self, ids: &[TrackId]) -> Result<(), GatewayError> {
        if ids.is_empty() {
            return Err(GatewayError::EmptyRequest("export"));
        }
        info!(count = ids.len(), ?ids, "Track export requested");
        Ok(())
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), GatewayError> {
        settings.validate()?;
        info!(?settings, "Settings save requested");
        Ok(())
    }
}
