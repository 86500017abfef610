use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;

use super::*;
use crate::model::{Source, sample::sample_tracks};

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn cursor_wraps_around_the_visible_tracks() {
    let mut library = Library::new(sample_tracks());
    let mut state = TableState::default();
    let mut table = TrackTable::new(&mut library, &mut state);

    table.process_event(&key('j'));
    assert_eq!(table.table_state.selected(), Some(0));

    table.process_event(&key('G'));
    assert_eq!(table.table_state.selected(), Some(2));

    table.process_event(&key('j'));
    assert_eq!(table.table_state.selected(), Some(0));

    table.process_event(&key('k'));
    assert_eq!(table.table_state.selected(), Some(2));

    table.process_event(&key('g'));
    assert_eq!(table.table_state.selected(), Some(0));
}

#[test]
fn space_checks_the_current_track_and_moves_on() {
    let mut library = Library::new(sample_tracks());
    let mut state = TableState::default().with_selected(Some(0));

    let consumed = TrackTable::new(&mut library, &mut state).process_event(&key(' '));

    assert!(consumed);
    assert_eq!(library.selected_ids(), vec!["1".to_string()]);
    assert_eq!(state.selected(), Some(1));
}

#[test]
fn select_all_covers_only_filtered_tracks() {
    let mut library = Library::new(sample_tracks());
    library.toggle_source(Source::Spotify);
    let mut state = TableState::default().with_selected(Some(0));

    TrackTable::new(&mut library, &mut state).process_event(&key('a'));
    assert_eq!(library.selected_ids(), vec!["1".to_string(), "3".to_string()]);

    TrackTable::new(&mut library, &mut state).process_event(&key('a'));
    assert_eq!(library.selected_count(), 0);
}

#[test]
fn unknown_keys_are_not_consumed() {
    let mut library = Library::new(sample_tracks());
    let mut state = TableState::default();

    assert!(!TrackTable::new(&mut library, &mut state).process_event(&key('q')));
}

#[test]
fn empty_table_has_no_cursor() {
    let mut library = Library::new(vec![]);
    let mut state = TableState::default();

    let mut table = TrackTable::new(&mut library, &mut state);
    table.process_event(&key('j'));
    table.process_event(&key(' '));
    assert_eq!(state.selected(), None);
}

#[test]
fn clamping_keeps_the_cursor_in_range() {
    let mut state = TableState::default().with_selected(Some(2));

    clamp_cursor(&mut state, 1);
    assert_eq!(state.selected(), Some(0));

    clamp_cursor(&mut state, 0);
    assert_eq!(state.selected(), None);

    clamp_cursor(&mut state, 3);
    assert_eq!(state.selected(), Some(0));
}
