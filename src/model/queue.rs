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

//! Download queue management.
//!
//! This module provides state for the download queue: the URLs a user has
//! pasted, each classified once on insertion as either accepted or rejected.
//!
//! Classification only checks that a fragment parses as an absolute URL and
//! that its host contains one of [`SUPPORTED_DOMAINS`]. The host check is a
//! plain substring match, so a look-alike host such as
//! `notspotify.com.evil.tld` is accepted.

use thiserror::Error;
use url::Url;

/// Host substrings accepted by the queue.
pub(crate) const SUPPORTED_DOMAINS: [&str; 5] = [
    "open.spotify.com",
    "spotify.com",
    "youtube.com",
    "youtu.be",
    "music.youtube.com",
];

/// Why a queued URL was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum UrlRejection {
    #[error("Invalid URL format")]
    InvalidFormat,

    #[error("Only Spotify and YouTube URLs are supported")]
    UnsupportedDomain,
}

/// Classifies a single, already trimmed, URL.
pub(crate) fn validate_url(url: &str) -> Result<(), UrlRejection> {
    let parsed = Url::parse(url).map_err(|_| UrlRejection::InvalidFormat)?;
    let host = parsed.host_str().unwrap_or_default();

    // FIXME substring match accepts look-alike hosts, decide whether this
    // should become a suffix match on the registrable domain
    if SUPPORTED_DOMAINS.iter().any(|domain| host.contains(domain)) {
        Ok(())
    } else {
        Err(UrlRejection::UnsupportedDomain)
    }
}

/// Splits pasted text on commas and newlines, dropping blank fragments.
pub(crate) fn split_urls(input: &str) -> impl Iterator<Item = &str> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueueItem {
    pub(crate) url: String,
    pub(crate) rejection: Option<UrlRejection>,
}

impl QueueItem {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let rejection = validate_url(&url).err();
        Self { url, rejection }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    pub(crate) fn error(&self) -> Option<String> {
        self.rejection.map(|rejection| rejection.to_string())
    }
}

/// Classifies every fragment of a pasted text block, in input order.
pub(crate) fn parse_queue_input(input: &str) -> Vec<QueueItem> {
    split_urls(input).map(QueueItem::new).collect()
}

#[derive(Debug, Default)]
pub(crate) struct DownloadQueue {
    items: Vec<QueueItem>,
}

impl DownloadQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn items(&self) -> &[QueueItem] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn valid_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_valid()).count()
    }

    pub(crate) fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// Appends every URL found in `input`, returning how many were added.
    pub(crate) fn add_input(&mut self, input: &str) -> usize {
        let items = parse_queue_input(input);
        let added = items.len();
        self.items.extend(items);
        added
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<QueueItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes every rejected item, returning how many were removed.
    pub(crate) fn clear_invalid(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(QueueItem::is_valid);
        before - self.items.len()
    }

    /// Takes the accepted URLs, in queue order, and empties the queue.
    ///
    /// The queue is left untouched when it holds no accepted URL.
    pub(crate) fn take_valid(&mut self) -> Vec<String> {
        if self.valid_count() == 0 {
            return vec![];
        }

        self.items
            .drain(..)
            .filter(QueueItem::is_valid)
            .map(|item| item.url)
            .collect()
    }
}
