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

//! Download preferences.
//!
//! This module defines the settings edited in the settings modal, their
//! defaults and validation, and the small set of edits the modal can apply.
//! Settings are not stored locally, saving hands them to the backend
//! gateway.

use std::path::PathBuf;

use thiserror::Error;

pub(crate) const MIN_CONCURRENT_DOWNLOADS: u8 = 1;
pub(crate) const MAX_CONCURRENT_DOWNLOADS: u8 = 10;
pub(crate) const DEFAULT_CONCURRENT_DOWNLOADS: u8 = 3;

const DOWNLOAD_DIR_NAME: &str = "Downbeat";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AudioFormat {
    #[default]
    Mp3High,
    Mp3Medium,
    Mp3Low,
    Flac,
    Aac,
}

impl AudioFormat {
    pub(crate) const ALL: [AudioFormat; 5] = [
        AudioFormat::Mp3High,
        AudioFormat::Mp3Medium,
        AudioFormat::Mp3Low,
        AudioFormat::Flac,
        AudioFormat::Aac,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            AudioFormat::Mp3High => "MP3 (320kbps)",
            AudioFormat::Mp3Medium => "MP3 (256kbps)",
            AudioFormat::Mp3Low => "MP3 (192kbps)",
            AudioFormat::Flac => "FLAC",
            AudioFormat::Aac => "AAC",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|format| *format == self).unwrap_or(0)
    }

    pub(crate) fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub(crate) fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

/// User interface colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Appearance {
    Light,
    #[default]
    Dark,
    System,
}

impl Appearance {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Appearance::Light => "Light",
            Appearance::Dark => "Dark",
            Appearance::System => "System",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::System,
            Appearance::System => Appearance::Light,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum SettingsError {
    #[error("download location must not be empty")]
    EmptyDownloadDir,

    #[error("concurrent downloads must be between 1 and 10, got {0}")]
    ConcurrencyOutOfRange(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) download_dir: PathBuf,
    pub(crate) audio_format: AudioFormat,
    pub(crate) concurrent_downloads: u8,
    pub(crate) auto_organize: bool,
    pub(crate) auto_start: bool,
    pub(crate) notifications: bool,
    pub(crate) appearance: Appearance,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            download_dir: default_download_dir(),
            audio_format: AudioFormat::default(),
            concurrent_downloads: DEFAULT_CONCURRENT_DOWNLOADS,
            auto_organize: false,
            auto_start: false,
            notifications: false,
            appearance: Appearance::default(),
        }
    }
}

/// `<music dir>/Downbeat`, falling back to `<home>/Music/Downbeat`.
pub(crate) fn default_download_dir() -> PathBuf {
    dirs::audio_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Music")))
        .unwrap_or_else(|| PathBuf::from("Music"))
        .join(DOWNLOAD_DIR_NAME)
}

impl Settings {
    pub(crate) fn validate(&self) -> Result<(), SettingsError> {
        if self.download_dir.as_os_str().is_empty() {
            return Err(SettingsError::EmptyDownloadDir);
        }

        let limits = MIN_CONCURRENT_DOWNLOADS..=MAX_CONCURRENT_DOWNLOADS;
        if !limits.contains(&self.concurrent_downloads) {
            return Err(SettingsError::ConcurrencyOutOfRange(self.concurrent_downloads));
        }

        Ok(())
    }

    pub(crate) fn set_download_dir(&mut self, path: &str) {
        self.download_dir = PathBuf::from(path.trim());
    }

    pub(crate) fn increase_concurrency(&mut self) {
        self.concurrent_downloads = self
            .concurrent_downloads
            .saturating_add(1)
            .min(MAX_CONCURRENT_DOWNLOADS);
    }

    pub(crate) fn decrease_concurrency(&mut self) {
        self.concurrent_downloads = self
            .concurrent_downloads
            .saturating_sub(1)
            .max(MIN_CONCURRENT_DOWNLOADS);
    }

    /// Applies a left (`forward == false`) or right adjustment to `field`.
    ///
    /// Flags toggle in either direction. The download location is edited as
    /// text and is left unchanged here.
    pub(crate) fn adjust(&mut self, field: SettingsField, forward: bool) {
        match field {
            SettingsField::DownloadDir => {}
            SettingsField::AudioFormat => {
                self.audio_format = if forward {
                    self.audio_format.next()
                } else {
                    self.audio_format.previous()
                };
            }
            SettingsField::ConcurrentDownloads => {
                if forward {
                    self.increase_concurrency();
                } else {
                    self.decrease_concurrency();
                }
            }
            SettingsField::AutoOrganize => self.auto_organize = !self.auto_organize,
            SettingsField::AutoStart => self.auto_start = !self.auto_start,
            SettingsField::Notifications => self.notifications = !self.notifications,
            SettingsField::Appearance => self.appearance = self.appearance.next(),
        }
    }

    /// Display value of `field`.
    pub(crate) fn value_label(&self, field: SettingsField) -> String {
        let on_off = |flag: bool| (if flag { "On" } else { "Off" }).to_string();

        match field {
            SettingsField::DownloadDir => self.download_dir.display().to_string(),
            SettingsField::AudioFormat => self.audio_format.label().to_string(),
            SettingsField::ConcurrentDownloads => self.concurrent_downloads.to_string(),
            SettingsField::AutoOrganize => on_off(self.auto_organize),
            SettingsField::AutoStart => on_off(self.auto_start),
            SettingsField::Notifications => on_off(self.notifications),
            SettingsField::Appearance => self.appearance.label().to_string(),
        }
    }
}

/// The editable rows of the general settings page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SettingsField {
    #[default]
    DownloadDir,
    AudioFormat,
    ConcurrentDownloads,
    AutoOrganize,
    AutoStart,
    Notifications,
    Appearance,
}

impl SettingsField {
    pub(crate) const ALL: [SettingsField; 7] = [
        SettingsField::DownloadDir,
        SettingsField::AudioFormat,
        SettingsField::ConcurrentDownloads,
        SettingsField::AutoOrganize,
        SettingsField::AutoStart,
        SettingsField::Notifications,
        SettingsField::Appearance,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            SettingsField::DownloadDir => "Download Location",
            SettingsField::AudioFormat => "Default Audio Format",
            SettingsField::ConcurrentDownloads => "Concurrent downloads",
            SettingsField::AutoOrganize => "Auto-organize by Artist",
            SettingsField::AutoStart => "Auto-start downloads",
            SettingsField::Notifications => "Desktop notifications",
            SettingsField::Appearance => "Theme",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            SettingsField::DownloadDir => "Choose where downloaded music will be saved",
            SettingsField::AudioFormat => "Audio quality and format for downloads",
            SettingsField::ConcurrentDownloads => "Number of simultaneous downloads (1-10)",
            SettingsField::AutoOrganize => "Automatically create folders for each artist",
            SettingsField::AutoStart => "Automatically start downloads when added to queue",
            SettingsField::Notifications => "Show notifications when downloads complete",
            SettingsField::Appearance => "Light, dark, or follow the system",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub(crate) fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub(crate) fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}
