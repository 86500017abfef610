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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: the tracks
//! shown in the library, the URLs waiting in the download queue, and the
//! user's download settings.

pub(crate) mod library;
pub(crate) mod queue;
pub(crate) mod sample;
pub(crate) mod settings;

use std::{cmp::Ordering, fmt};

/// Opaque track identifier, unique within the in-memory library.
pub(crate) type TrackId = String;

/// The streaming service a track was downloaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Source {
    Spotify,
    YouTube,
}

impl Source {
    pub(crate) const ALL: [Source; 2] = [Source::Spotify, Source::YouTube];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Source::Spotify => "Spotify",
            Source::YouTube => "YouTube",
        }
    }

    /// Case-insensitive lookup by service name.
    pub(crate) fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|source| source.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) id: TrackId,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    pub(crate) duration: String,
    pub(crate) file_size: String,
    pub(crate) download_date: String,
    pub(crate) source: Source,
    pub(crate) format: String,
    pub(crate) genre: Option<String>,
}

impl Track {
    /// Returns `true` if the title, artist or album contains `needle`.
    ///
    /// The needle must already be lower-cased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.artist.to_lowercase().contains(needle)
            || self.album.to_lowercase().contains(needle)
    }

    /// Compares two tracks on a single field using the natural ordering of
    /// that field's value.
    pub(crate) fn compare_by(&self, other: &Track, field: TrackField) -> Ordering {
        match field {
            TrackField::Title => self.title.cmp(&other.title),
            TrackField::Artist => self.artist.cmp(&other.artist),
            TrackField::Album => self.album.cmp(&other.album),
            TrackField::Duration => self.duration.cmp(&other.duration),
            TrackField::FileSize => self.file_size.cmp(&other.file_size),
            TrackField::DownloadDate => self.download_date.cmp(&other.download_date),
            TrackField::Source => self.source.name().cmp(other.source.name()),
            TrackField::Format => self.format.cmp(&other.format),
            TrackField::Genre => self.genre.cmp(&other.genre),
        }
    }
}

/// The sortable fields of a [`Track`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TrackField {
    Title,
    Artist,
    Album,
    Duration,
    FileSize,
    DownloadDate,
    Source,
    Format,
    Genre,
}

impl TrackField {
    pub(crate) const ALL: [TrackField; 9] = [
        TrackField::Title,
        TrackField::Artist,
        TrackField::Album,
        TrackField::Duration,
        TrackField::FileSize,
        TrackField::DownloadDate,
        TrackField::Source,
        TrackField::Format,
        TrackField::Genre,
    ];

    /// Column heading used by the table view.
    pub(crate) fn label(self) -> &'static str {
        match self {
            TrackField::Title => "Title",
            TrackField::Artist => "Artist",
            TrackField::Album => "Album",
            TrackField::Duration => "Duration",
            TrackField::FileSize => "Size",
            TrackField::DownloadDate => "Downloaded",
            TrackField::Source => "Source",
            TrackField::Format => "Format",
            TrackField::Genre => "Genre",
        }
    }

    /// Parses a field from its column heading, or one of a few aliases.
    pub(crate) fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "time" => return Some(TrackField::Duration),
            "filesize" | "file_size" => return Some(TrackField::FileSize),
            "date" | "download_date" => return Some(TrackField::DownloadDate),
            _ => {}
        }

        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(&name))
    }
}
