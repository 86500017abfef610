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

//! Gateway test double.

use std::sync::{Arc, Mutex};

use crate::{
    gateway::{DownloadGateway, GatewayError},
    model::{TrackId, settings::Settings},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Request {
    Download(Vec<String>),
    Delete(Vec<TrackId>),
    Export(Vec<TrackId>),
    SaveSettings(Settings),
}

/// Records every request; clones share the same log.
///
/// Requests for an empty set of URLs or tracks are refused, like the
/// logging gateway does.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingGateway {
    requests: Arc<Mutex<Vec<Request>>>,
}

impl RecordingGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: Request) {
        self.requests.lock().unwrap().push(request);
    }
}

impl DownloadGateway for RecordingGateway {
    fn submit_downloads(&mut self, urls: &[String]) -> Result<(), GatewayError> {
        if urls.is_empty() {
            return Err(GatewayError::EmptyRequest("download"));
        }
        self.record(Request::Download(urls.to_vec()));
        Ok(())
    }

    fn delete_tracks(&mut self, ids: &[TrackId]) -> Result<(), GatewayError> {
        if ids.is_empty() {
            return Err(GatewayError::EmptyRequest("delete"));
        }
        self.record(Request::Delete(ids.to_vec()));
        Ok(())
    }

    fn export_tracks(&mut self, ids: &[TrackId]) -> Result<(), GatewayError> {
        if ids.is_empty() {
            return Err(GatewayError::EmptyRequest("export"));
        }
        self.record(Request::Export(ids.to_vec()));
        Ok(())
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), GatewayError> {
        settings.validate()?;
        self.record(Request::SaveSettings(settings.clone()));
        Ok(())
    }
}
