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

//! Application configuration.
//!
//! This module manages the application configuration file. Only settings
//! about the program itself live here (logging, layout on startup); download
//! preferences are handed to the backend gateway instead.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::MainView;

const CONFIG_NAME: &str = "downbeat";
const LOG_DIR_NAME: &str = "logs";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) log_level: String,
    pub(crate) log_dir: Option<PathBuf>,
    pub(crate) sidebar_open: bool,
    pub(crate) start_view: MainView,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            log_level: "info".to_string(),
            log_dir: None,
            sidebar_open: true,
            start_view: MainView::Downloads,
        }
    }
}

/// Loads the configuration, creating the file with defaults if it does not
/// exist yet.
pub(crate) fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;
    load_config_from(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

pub(crate) fn load_config_from(path: impl AsRef<Path>) -> Result<AppConfig, confy::ConfyError> {
    confy::load_path(path)
}

fn config_file_path() -> Result<PathBuf> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .context("Failed to locate configuration file")
}

/// Directory that log files are written to.
///
/// This is the configured `log_dir`, or a `logs` directory next to the
/// configuration file.
pub(crate) fn log_dir(config: &AppConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.log_dir {
        return Ok(dir.clone());
    }

    let config_file = config_file_path()?;
    let config_dir = config_file
        .parent()
        .context("Configuration file has no parent directory")?;

    Ok(config_dir.join(LOG_DIR_NAME))
}

#[cfg(test)]
mod tests;
