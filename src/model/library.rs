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

//! Library track list state.
//!
//! This module owns the search query, the source and genre facets, the sort
//! order and the set of checked tracks, and derives from them the filtered,
//! ordered list of tracks that the library view shows.
//!
//! Every mutation recomputes the visible list, so readers never observe a
//! stale view. The underlying track collection is never modified.

use std::collections::{BTreeSet, HashSet};

use crate::model::{Source, Track, TrackField, TrackId};

/// Genre facet choices offered by the library view.
pub(crate) const GENRES: [&str; 3] = ["Pop", "Rock", "Electronic"];

/// Finds the facet spelling of a genre, ignoring case.
pub(crate) fn canonical_genre(name: &str) -> Option<&'static str> {
    GENRES
        .into_iter()
        .find(|genre| genre.eq_ignore_ascii_case(name.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub(crate) fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SortOrder {
    pub(crate) field: TrackField,
    pub(crate) direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ViewMode {
    #[default]
    Table,
    Grid,
}

/// Search text plus facet selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TrackFilter {
    pub(crate) query: String,
    pub(crate) sources: BTreeSet<Source>,
    pub(crate) genres: BTreeSet<String>,
}

impl TrackFilter {
    pub(crate) fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.sources.is_empty() || !self.genres.is_empty()
    }

    pub(crate) fn matches(&self, track: &Track) -> bool {
        let matches_text = track.matches_text(&self.query.to_lowercase());

        let matches_source = self.sources.is_empty() || self.sources.contains(&track.source);

        let matches_genre = self.genres.is_empty()
            || track
                .genre
                .as_ref()
                .is_some_and(|genre| self.genres.contains(genre));

        matches_text && matches_source && matches_genre
    }
}

#[derive(Debug)]
pub(crate) struct Library {
    tracks: Vec<Track>,
    filter: TrackFilter,
    sort: Option<SortOrder>,
    selection: HashSet<TrackId>,
    view_mode: ViewMode,

    // Indices into `tracks`, filtered then sorted
    visible: Vec<usize>,
}

impl Library {
    pub(crate) fn new(tracks: Vec<Track>) -> Self {
        let mut library = Self {
            tracks,
            filter: TrackFilter::default(),
            sort: None,
            selection: HashSet::new(),
            view_mode: ViewMode::default(),
            visible: vec![],
        };
        library.refresh();
        library
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(crate) fn filter(&self) -> &TrackFilter {
        &self.filter
    }

    pub(crate) fn sort_order(&self) -> Option<SortOrder> {
        self.sort
    }

    pub(crate) fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub(crate) fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub(crate) fn visible_tracks(&self) -> impl Iterator<Item = &Track> {
        self.visible.iter().map(|&index| &self.tracks[index])
    }

    pub(crate) fn visible_track(&self, position: usize) -> Option<&Track> {
        self.visible.get(position).map(|&index| &self.tracks[index])
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        if self.filter.query != query {
            self.filter.query = query.to_string();
            self.refresh();
        }
    }

    pub(crate) fn toggle_source(&mut self, source: Source) {
        if !self.filter.sources.remove(&source) {
            self.filter.sources.insert(source);
        }
        self.refresh();
    }

    pub(crate) fn toggle_genre(&mut self, genre: &str) {
        if !self.filter.genres.remove(genre) {
            self.filter.genres.insert(genre.to_string());
        }
        self.refresh();
    }

    pub(crate) fn clear_filters(&mut self) {
        self.filter = TrackFilter::default();
        self.refresh();
    }

    /// Sorts on `field`, flipping the direction if it is already the sort
    /// field and starting ascending otherwise.
    pub(crate) fn sort_by(&mut self, field: TrackField) {
        self.sort = Some(match self.sort {
            Some(order) if order.field == field => SortOrder {
                field,
                direction: order.direction.flipped(),
            },
            _ => SortOrder {
                field,
                direction: SortDirection::Ascending,
            },
        });
        self.refresh();
    }

    pub(crate) fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Table => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Table,
        };
    }

    pub(crate) fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub(crate) fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Returns `true` when every visible track is checked.
    pub(crate) fn all_selected(&self) -> bool {
        self.selection.len() == self.visible.len()
    }

    pub(crate) fn toggle_select(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Checks every visible track, or unchecks everything if they already
    /// are.
    pub(crate) fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selection.clear();
        } else {
            self.selection = self
                .visible
                .iter()
                .map(|&index| self.tracks[index].id.clone())
                .collect();
        }
    }

    /// Checked track ids, in visible order.
    pub(crate) fn selected_ids(&self) -> Vec<TrackId> {
        self.visible_tracks()
            .filter(|track| self.selection.contains(&track.id))
            .map(|track| track.id.clone())
            .collect()
    }

    /// Returns the checked track ids and clears the selection.
    pub(crate) fn take_selection(&mut self) -> Vec<TrackId> {
        let ids = self.selected_ids();
        self.selection.clear();
        ids
    }

    fn refresh(&mut self) {
        let mut visible: Vec<usize> = self
            .tracks
            .iter()
            .enumerate()
            .filter(|(_, track)| self.filter.matches(track))
            .map(|(index, _)| index)
            .collect();

        if let Some(order) = self.sort {
            let tracks = &self.tracks;
            visible.sort_by(|&a, &b| {
                let ordering = tracks[a].compare_by(&tracks[b], order.field);
                match order.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        self.visible = visible;

        let tracks = &self.tracks;
        let visible_ids: HashSet<&str> = self
            .visible
            .iter()
            .map(|&index| tracks[index].id.as_str())
            .collect();
        self.selection.retain(|id| visible_ids.contains(id.as_str()));
    }
}

#[cfg(test)]
mod tests;
