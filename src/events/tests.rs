use std::sync::mpsc::{self, Receiver};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::{
    config::AppConfig,
    model::{
        TrackField,
        library::{SortDirection, SortOrder},
        settings::{Appearance, Settings},
    },
    theme::Theme,
};

const VALID_URL: &str = "https://open.spotify.com/track/abc";

fn new_app() -> (App, Receiver<AppTask>) {
    let (task_tx, task_rx) = mpsc::channel();
    (App::new(AppConfig::default(), task_tx), task_rx)
}

/// Handles `event` and every event it causes, returning whether the
/// application was asked to exit.
fn run(app: &mut App, event: AppEvent) -> bool {
    let mut next = Some(event);
    while let Some(event) = next {
        if matches!(event, AppEvent::ExitApplication) {
            return true;
        }
        handle_event(app, event).unwrap();
        next = app.event_rx.try_recv().ok();
    }
    false
}

fn key(app: &mut App, code: KeyCode) -> bool {
    run(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn command(app: &mut App, text: &str) -> bool {
    key(app, KeyCode::Char(':'));
    type_text(app, text);
    key(app, KeyCode::Enter)
}

fn status(app: &App) -> Option<(StatusKind, &str)> {
    app.status
        .as_ref()
        .map(|status| (status.kind, status.message.as_str()))
}

#[test]
fn q_quits_unless_text_is_being_edited() {
    let (mut app, _task_rx) = new_app();

    key(&mut app, KeyCode::Char('i'));
    assert!(app.downloads_view.editing);
    assert!(!key(&mut app, KeyCode::Char('q')));
    assert_eq!(app.downloads_view.input.value(), "q");

    key(&mut app, KeyCode::Esc);
    assert!(key(&mut app, KeyCode::Char('q')));
}

#[test]
fn ctrl_c_quits_even_while_editing() {
    let (mut app, _task_rx) = new_app();
    key(&mut app, KeyCode::Char('i'));

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(run(&mut app, AppEvent::Key(ctrl_c)));
}

#[test]
fn global_keys_switch_views_and_toggle_the_sidebar() {
    let (mut app, _task_rx) = new_app();
    assert_eq!(app.main_view, MainView::Downloads);
    assert!(app.sidebar_open);

    key(&mut app, KeyCode::Char('2'));
    assert_eq!(app.main_view, MainView::Library);

    key(&mut app, KeyCode::Char('1'));
    assert_eq!(app.main_view, MainView::Downloads);

    key(&mut app, KeyCode::Char('b'));
    assert!(!app.sidebar_open);
}

#[test]
fn startup_view_and_sidebar_come_from_the_configuration() {
    let (task_tx, _task_rx) = mpsc::channel();
    let config = AppConfig {
        start_view: MainView::Library,
        sidebar_open: false,
        ..AppConfig::default()
    };

    let app = App::new(config, task_tx);

    assert_eq!(app.main_view, MainView::Library);
    assert!(!app.sidebar_open);
}

#[test]
fn add_command_queues_urls_and_reports_them() {
    let (mut app, _task_rx) = new_app();
    key(&mut app, KeyCode::Char('2'));

    command(&mut app, &format!("add {VALID_URL}, not-a-url"));

    assert_eq!(app.main_view, MainView::Downloads);
    assert_eq!(app.downloads_view.queue.valid_count(), 1);
    assert_eq!(app.downloads_view.queue.invalid_count(), 1);
    assert_eq!(
        status(&app),
        Some((StatusKind::Notice, "Added 2 URLs to the queue"))
    );

    command(&mut app, "ci");
    assert_eq!(app.downloads_view.queue.len(), 1);
    assert_eq!(
        status(&app),
        Some((StatusKind::Notice, "Removed 1 invalid URL"))
    );
}

#[test]
fn download_without_valid_urls_is_an_error() {
    let (mut app, task_rx) = new_app();
    command(&mut app, "add nonsense");

    command(&mut app, "download");

    assert_eq!(
        status(&app),
        Some((StatusKind::Error, "No valid URLs to download"))
    );
    assert!(task_rx.try_recv().is_err());
    assert_eq!(app.downloads_view.queue.len(), 1);
}

#[test]
fn download_key_submits_the_valid_urls() {
    let (mut app, task_rx) = new_app();
    run(&mut app, AppEvent::AddUrls(format!("{VALID_URL}, bogus")));

    key(&mut app, KeyCode::Char('D'));

    match task_rx.try_recv() {
        Ok(AppTask::SubmitDownloads(urls)) => assert_eq!(urls, vec![VALID_URL.to_string()]),
        other => panic!("unexpected task: {other:?}"),
    }
    assert!(app.downloads_view.queue.is_empty());
}

#[test]
fn download_key_without_valid_urls_is_an_error() {
    let (mut app, task_rx) = new_app();
    run(&mut app, AppEvent::AddUrls("bogus".to_string()));

    key(&mut app, KeyCode::Char('D'));

    assert_eq!(
        status(&app),
        Some((StatusKind::Error, "No valid URLs to download"))
    );
    assert!(task_rx.try_recv().is_err());
}

#[test]
fn add_command_splits_urls_on_spaces() {
    let (mut app, _task_rx) = new_app();

    command(&mut app, "add https://open.spotify.com/track/a https://youtu.be/b");

    assert_eq!(app.downloads_view.queue.len(), 2);
    assert_eq!(app.downloads_view.queue.valid_count(), 2);
}

#[test]
fn auto_start_downloads_as_soon_as_urls_are_added() {
    let (mut app, task_rx) = new_app();
    app.settings.auto_start = true;

    run(&mut app, AppEvent::AddUrls(VALID_URL.to_string()));

    assert!(matches!(task_rx.try_recv(), Ok(AppTask::SubmitDownloads(_))));
    assert!(app.downloads_view.queue.is_empty());
}

#[test]
fn unknown_commands_are_reported() {
    let (mut app, _task_rx) = new_app();

    command(&mut app, "frobnicate");

    assert_eq!(
        status(&app),
        Some((StatusKind::Error, "unknown command: frobnicate"))
    );
}

#[test]
fn library_commands_show_the_library() {
    let (mut app, _task_rx) = new_app();

    command(&mut app, "sort title");

    assert_eq!(app.main_view, MainView::Library);
    assert_eq!(
        app.library_view.library.sort_order(),
        Some(SortOrder {
            field: TrackField::Title,
            direction: SortDirection::Ascending,
        })
    );
}

#[test]
fn settings_modal_takes_every_key_while_open() {
    let (mut app, _task_rx) = new_app();

    key(&mut app, KeyCode::Char(','));
    assert!(app.settings_modal.is_open());

    assert!(!key(&mut app, KeyCode::Char('q')));
    assert!(!key(&mut app, KeyCode::Char('2')));
    assert_eq!(app.main_view, MainView::Downloads);

    key(&mut app, KeyCode::Esc);
    assert!(!app.settings_modal.is_open());
}

#[test]
fn saving_settings_applies_them_and_asks_the_backend_to_store_them() {
    let (mut app, task_rx) = new_app();
    key(&mut app, KeyCode::Char(','));

    // Move to the appearance row and step Dark -> System -> Light
    for _ in 0..6 {
        key(&mut app, KeyCode::Char('j'));
    }
    key(&mut app, KeyCode::Char('l'));
    key(&mut app, KeyCode::Char('l'));
    key(&mut app, KeyCode::Char('s'));

    assert!(!app.settings_modal.is_open());
    assert_eq!(app.settings.appearance, Appearance::Light);
    assert_eq!(app.theme, Theme::light());
    match task_rx.try_recv() {
        Ok(AppTask::SaveSettings(settings)) => assert_eq!(settings, app.settings),
        other => panic!("unexpected task: {other:?}"),
    }
}

#[test]
fn invalid_settings_keep_the_modal_open() {
    let (mut app, task_rx) = new_app();
    key(&mut app, KeyCode::Char(','));
    app.settings_modal.draft.set_download_dir("   ");

    key(&mut app, KeyCode::Char('s'));

    assert!(app.settings_modal.is_open());
    assert_eq!(
        status(&app),
        Some((StatusKind::Error, "download location must not be empty"))
    );
    assert!(task_rx.try_recv().is_err());
}

#[test]
fn closing_settings_discards_the_draft() {
    let (mut app, task_rx) = new_app();
    key(&mut app, KeyCode::Char(','));
    key(&mut app, KeyCode::Char('j'));
    key(&mut app, KeyCode::Char('l'));

    key(&mut app, KeyCode::Esc);

    assert_eq!(app.settings, Settings::default());
    assert!(task_rx.try_recv().is_err());
}

#[test]
fn paste_goes_to_the_focused_input() {
    let (mut app, _task_rx) = new_app();

    run(&mut app, AppEvent::Paste(format!("{VALID_URL}\nbogus")));
    assert!(app.downloads_view.editing);
    assert_eq!(
        app.downloads_view.input.value(),
        format!("{VALID_URL}, bogus")
    );

    key(&mut app, KeyCode::Esc);
    key(&mut app, KeyCode::Char(':'));
    run(&mut app, AppEvent::Paste("sort".to_string()));
    assert_eq!(app.commander.input.value(), "sort");
    key(&mut app, KeyCode::Esc);

    key(&mut app, KeyCode::Char('2'));
    key(&mut app, KeyCode::Char('/'));
    run(&mut app, AppEvent::Paste("night".to_string()));
    assert_eq!(app.library_view.search.value(), "night");
}

#[test]
fn status_messages_expire_after_a_while() {
    let (mut app, _task_rx) = new_app();
    run(&mut app, AppEvent::Notice("Settings saved".to_string()));
    assert_eq!(status(&app), Some((StatusKind::Notice, "Settings saved")));

    for _ in 0..STATUS_TICKS - 1 {
        run(&mut app, AppEvent::Tick);
    }
    assert!(app.status.is_some());

    run(&mut app, AppEvent::Tick);
    assert!(app.status.is_none());
}

#[test]
fn errors_from_the_task_worker_are_shown() {
    let (mut app, _task_rx) = new_app();

    run(
        &mut app,
        AppEvent::Error("Failed to delete tracks: nothing to delete".to_string()),
    );

    assert_eq!(
        status(&app),
        Some((StatusKind::Error, "Failed to delete tracks: nothing to delete"))
    );
}
