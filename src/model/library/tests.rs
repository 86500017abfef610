use super::*;
use crate::model::sample::sample_tracks;

fn titles(library: &Library) -> Vec<&str> {
    library.visible_tracks().map(|track| track.title.as_str()).collect()
}

fn sample_library() -> Library {
    Library::new(sample_tracks())
}

#[test]
fn unfiltered_library_shows_everything_in_original_order() {
    let library = sample_library();
    assert_eq!(titles(&library), vec!["Summer Breeze", "Midnight Dreams", "Electric Storm"]);
    assert!(!library.filter().is_active());
}

#[test]
fn search_is_case_insensitive_over_title_artist_and_album() {
    let mut library = sample_library();

    library.set_query("storm");
    assert_eq!(titles(&library), vec!["Electric Storm"]);

    library.set_query("LUNA");
    assert_eq!(titles(&library), vec!["Midnight Dreams"]);

    library.set_query("best hits");
    assert_eq!(titles(&library), vec!["Summer Breeze"]);

    library.set_query("no such thing");
    assert_eq!(library.visible_len(), 0);
}

#[test]
fn source_facet_removes_other_sources() {
    let mut library = sample_library();

    library.toggle_source(Source::Spotify);
    assert_eq!(titles(&library), vec!["Summer Breeze", "Electric Storm"]);

    library.toggle_source(Source::Spotify);
    assert_eq!(library.visible_len(), 3);
}

#[test]
fn search_then_source_facet() {
    let mut library = sample_library();

    library.set_query("storm");
    library.toggle_source(Source::Spotify);
    assert_eq!(titles(&library), vec!["Electric Storm"]);

    library.toggle_source(Source::Spotify);
    library.toggle_source(Source::YouTube);
    assert_eq!(library.visible_len(), 0);
}

#[test]
fn genre_facet_excludes_tracks_without_genre() {
    let mut tracks = sample_tracks();
    tracks[0].genre = None;
    let mut library = Library::new(tracks);

    library.toggle_genre("Pop");
    assert_eq!(library.visible_len(), 0);

    library.toggle_genre("Rock");
    assert_eq!(titles(&library), vec!["Electric Storm"]);

    library.clear_filters();
    assert_eq!(library.visible_len(), 3);
}

#[test]
fn filtering_is_idempotent() {
    let filter = TrackFilter {
        query: "e".to_string(),
        sources: BTreeSet::from([Source::Spotify]),
        genres: BTreeSet::from(["Rock".to_string(), "Pop".to_string()]),
    };

    let keep = |tracks: &[Track]| -> Vec<Track> {
        tracks.iter().filter(|track| filter.matches(track)).cloned().collect()
    };

    let once = keep(&sample_tracks());
    let twice = keep(&once);

    assert_eq!(once, twice);
}

#[test]
fn sorting_same_field_twice_reverses() {
    let mut library = sample_library();

    library.sort_by(TrackField::Title);
    assert_eq!(titles(&library), vec!["Electric Storm", "Midnight Dreams", "Summer Breeze"]);
    assert_eq!(library.sort_order().unwrap().direction, SortDirection::Ascending);

    library.sort_by(TrackField::Title);
    assert_eq!(titles(&library), vec!["Summer Breeze", "Midnight Dreams", "Electric Storm"]);
    assert_eq!(library.sort_order().unwrap().direction, SortDirection::Descending);
}

#[test]
fn sorting_new_field_resets_to_ascending() {
    let mut library = sample_library();

    library.sort_by(TrackField::Title);
    library.sort_by(TrackField::Title);
    library.sort_by(TrackField::DownloadDate);

    let order = library.sort_order().unwrap();
    assert_eq!(order.field, TrackField::DownloadDate);
    assert_eq!(order.direction, SortDirection::Ascending);
    assert_eq!(titles(&library), vec!["Electric Storm", "Midnight Dreams", "Summer Breeze"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let mut library = sample_library();

    library.sort_by(TrackField::Format);
    assert_eq!(titles(&library), vec!["Electric Storm", "Summer Breeze", "Midnight Dreams"]);

    library.sort_by(TrackField::Source);
    assert_eq!(titles(&library), vec!["Summer Breeze", "Electric Storm", "Midnight Dreams"]);
}

#[test]
fn select_all_twice_clears_selection() {
    let mut library = sample_library();

    library.toggle_select_all();
    assert_eq!(library.selected_count(), 3);
    assert!(library.all_selected());

    library.toggle_select_all();
    assert_eq!(library.selected_count(), 0);
}

#[test]
fn select_all_only_covers_filtered_tracks() {
    let mut library = sample_library();

    library.toggle_source(Source::Spotify);
    library.toggle_select_all();

    assert_eq!(library.selected_ids(), vec!["1".to_string(), "3".to_string()]);
    assert!(!library.is_selected("2"));
}

#[test]
fn partial_selection_then_select_all_selects_everything_visible() {
    let mut library = sample_library();

    library.toggle_select("2");
    library.toggle_select_all();
    assert_eq!(library.selected_count(), 3);
}

#[test]
fn toggle_select_adds_and_removes_one_id() {
    let mut library = sample_library();

    library.toggle_select("1");
    assert!(library.is_selected("1"));
    assert_eq!(library.selected_count(), 1);

    library.toggle_select("1");
    assert!(!library.is_selected("1"));
    assert_eq!(library.selected_count(), 0);
}

#[test]
fn hidden_tracks_leave_the_selection() {
    let mut library = sample_library();

    library.toggle_select_all();
    library.set_query("storm");

    assert_eq!(library.selected_ids(), vec!["3".to_string()]);

    library.set_query("");
    assert_eq!(library.selected_count(), 1);
}

#[test]
fn take_selection_clears_but_keeps_tracks() {
    let mut library = sample_library();

    library.sort_by(TrackField::Title);
    library.toggle_select("1");
    library.toggle_select("3");

    assert_eq!(library.take_selection(), vec!["3".to_string(), "1".to_string()]);
    assert_eq!(library.selected_count(), 0);
    assert_eq!(library.visible_len(), 3);
}

#[test]
fn view_mode_toggles_between_table_and_grid() {
    let mut library = sample_library();
    assert_eq!(library.view_mode(), ViewMode::Table);

    library.toggle_view_mode();
    assert_eq!(library.view_mode(), ViewMode::Grid);

    library.toggle_view_mode();
    assert_eq!(library.view_mode(), ViewMode::Table);
}

#[test]
fn genre_names_are_matched_case_insensitively() {
    assert_eq!(canonical_genre("electronic"), Some("Electronic"));
    assert_eq!(canonical_genre(" ROCK "), Some("Rock"));
    assert_eq!(canonical_genre("jazz"), None);
}
