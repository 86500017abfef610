use std::sync::mpsc;

use crossterm::event::{KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(commander: &mut Commander, text: &str, event_tx: &Sender<AppEvent>) {
    for c in text.chars() {
        commander.handle_event(&key(KeyCode::Char(c)), event_tx).unwrap();
    }
}

#[test]
fn parses_navigation_commands() {
    assert_eq!(parse_command("q"), Ok(Command::Quit));
    assert_eq!(parse_command("dl"), Ok(Command::ShowView(MainView::Downloads)));
    assert_eq!(parse_command(" lib "), Ok(Command::ShowView(MainView::Library)));
    assert_eq!(parse_command("set"), Ok(Command::OpenSettings));
}

#[test]
fn parses_queue_commands() {
    assert_eq!(
        parse_command("add https://youtu.be/a, https://youtu.be/b"),
        Ok(Command::AddUrls("https://youtu.be/a, https://youtu.be/b".to_string()))
    );
    assert_eq!(parse_command("ci"), Ok(Command::ClearInvalid));
    assert_eq!(parse_command("ca"), Ok(Command::ClearQueue));
    assert_eq!(parse_command("download"), Ok(Command::Download));
}

#[test]
fn parses_library_commands() {
    assert_eq!(parse_command("sort artist"), Ok(Command::Sort(TrackField::Artist)));
    assert_eq!(parse_command("sort size"), Ok(Command::Sort(TrackField::FileSize)));
    assert_eq!(parse_command("source youtube"), Ok(Command::ToggleSource(Source::YouTube)));
    assert_eq!(parse_command("genre rock"), Ok(Command::ToggleGenre("Rock")));
    assert_eq!(parse_command("view"), Ok(Command::ToggleViewMode));
    assert_eq!(parse_command("clear"), Ok(Command::ClearFilters));
}

#[test]
fn reports_bad_commands() {
    assert_eq!(parse_command("play"), Err(CommandError::Unknown("play".to_string())));
    assert_eq!(parse_command("add   "), Err(CommandError::MissingArgument("add")));
    assert_eq!(parse_command("sort bpm"), Err(CommandError::UnknownField("bpm".to_string())));
    assert_eq!(
        parse_command("source vimeo"),
        Err(CommandError::UnknownSource("vimeo".to_string()))
    );
    assert_eq!(parse_command("genre jazz"), Err(CommandError::UnknownGenre("jazz".to_string())));

    assert_eq!(CommandError::MissingArgument("sort").to_string(), "sort needs an argument");
}

#[test]
fn colon_activates_and_enter_submits() {
    let (event_tx, event_rx) = mpsc::channel();
    let mut commander = Commander::new();

    assert!(!commander.handle_event(&key(KeyCode::Char('x')), &event_tx).unwrap());
    assert!(commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap());
    assert!(commander.active());

    type_text(&mut commander, "lib", &event_tx);
    assert_eq!(commander.input.value(), "lib");

    assert!(commander.handle_event(&key(KeyCode::Enter), &event_tx).unwrap());
    assert!(!commander.active());
    assert_eq!(commander.input.value(), "");

    let event = event_rx.try_recv().unwrap();
    assert!(matches!(event, AppEvent::Command(Command::ShowView(MainView::Library))));
}

#[test]
fn invalid_command_is_reported_as_an_error() {
    let (event_tx, event_rx) = mpsc::channel();
    let mut commander = Commander::new();

    commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap();
    type_text(&mut commander, "bogus", &event_tx);
    commander.handle_event(&key(KeyCode::Enter), &event_tx).unwrap();

    match event_rx.try_recv().unwrap() {
        AppEvent::Error(message) => assert_eq!(message, "unknown command: bogus"),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn escape_discards_the_command() {
    let (event_tx, event_rx) = mpsc::channel();
    let mut commander = Commander::new();

    commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap();
    type_text(&mut commander, "q", &event_tx);
    commander.handle_event(&key(KeyCode::Esc), &event_tx).unwrap();

    assert!(!commander.active());
    assert_eq!(commander.input.value(), "");
    assert!(event_rx.try_recv().is_err());
}

#[test]
fn pasting_only_reaches_an_active_command_line() {
    let (event_tx, _event_rx) = mpsc::channel();
    let mut commander = Commander::new();

    assert!(!commander.insert_text("add x"));

    commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap();
    assert!(commander.insert_text("add https://youtu.be/a\n"));
    assert_eq!(commander.input.value(), "add https://youtu.be/a");
}

#[test]
fn add_accepts_urls_separated_by_spaces() {
    assert_eq!(
        parse_command("add https://open.spotify.com/track/a https://youtu.be/b"),
        Ok(Command::AddUrls(
            "https://open.spotify.com/track/a, https://youtu.be/b".to_string()
        ))
    );
    assert_eq!(
        parse_command("add https://youtu.be/a ,  https://youtu.be/b,"),
        Ok(Command::AddUrls("https://youtu.be/a, https://youtu.be/b".to_string()))
    );
}

#[test]
fn pasted_lines_stay_separate_arguments() {
    let (event_tx, event_rx) = mpsc::channel();
    let mut commander = Commander::new();

    commander.handle_event(&key(KeyCode::Char(':')), &event_tx).unwrap();
    commander.insert_text("add https://open.spotify.com/track/a\rhttps://youtu.be/b\r");
    commander.handle_event(&key(KeyCode::Enter), &event_tx).unwrap();

    match event_rx.try_recv().unwrap() {
        AppEvent::Command(Command::AddUrls(urls)) => {
            assert_eq!(urls, "https://open.spotify.com/track/a, https://youtu.be/b")
        }
        other => panic!("unexpected event {other:?}"),
    }
}
