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

//! Built-in library contents.
//!
//! There is no library storage yet, so the library view is populated from
//! this fixed set of tracks at startup.

use crate::model::{Source, Track};

pub(crate) fn sample_tracks() -> Vec<Track> {
    vec![
        track(
            "1",
            "Summer Breeze",
            "The Artists",
            "Best Hits",
            "3:45",
            "5.2 MB",
            "2024-12-04",
            Source::Spotify,
            "MP3",
            "Pop",
        ),
        track(
            "2",
            "Midnight Dreams",
            "Luna Echo",
            "Night Sessions",
            "4:12",
            "6.1 MB",
            "2024-12-03",
            Source::YouTube,
            "MP3",
            "Electronic",
        ),
        track(
            "3",
            "Electric Storm",
            "Voltage",
            "High Energy",
            "3:28",
            "4.8 MB",
            "2024-12-02",
            Source::Spotify,
            "FLAC",
            "Rock",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration: &str,
    file_size: &str,
    download_date: &str,
    source: Source,
    format: &str,
    genre: &str,
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        duration: duration.to_string(),
        file_size: file_size.to_string(),
        download_date: download_date.to_string(),
        source,
        format: format.to_string(),
        genre: Some(genre.to_string()),
    }
}
