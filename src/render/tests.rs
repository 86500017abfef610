use std::sync::mpsc;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use super::*;
use crate::{
    config::AppConfig,
    events::{StatusKind, StatusLine},
};

fn new_app() -> App {
    let (task_tx, _task_rx) = mpsc::channel();
    App::new(AppConfig::default(), task_tx)
}

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    screen_text(terminal.backend().buffer())
}

fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn centered_rect_is_centred() {
    let area = Rect::new(0, 0, 100, 40);

    let centred = centered_rect(50, 50, area);

    assert_eq!(centred, Rect::new(25, 10, 50, 20));
}

#[test]
fn draws_the_chrome_around_the_active_view() {
    let mut app = new_app();

    let screen = render(&mut app);

    assert!(screen.contains("Downbeat"));
    assert!(screen.contains("Library"));
    assert!(screen.contains("D download"));
}

#[test]
fn hidden_sidebar_is_not_drawn() {
    let mut app = new_app();
    app.sidebar_open = false;
    app.main_view = MainView::Library;

    let screen = render(&mut app);

    assert!(!screen.contains("Downloads   "));
    assert!(screen.contains("/ search"));
}

#[test]
fn status_message_replaces_the_key_hints() {
    let mut app = new_app();
    app.status = Some(StatusLine::new(StatusKind::Error, "No valid URLs to download"));

    let screen = render(&mut app);

    assert!(screen.contains("No valid URLs to download"));
    assert!(!screen.contains("D download"));
}

#[test]
fn settings_modal_is_drawn_on_top() {
    let mut app = new_app();
    app.settings_modal.open(&app.settings);

    let screen = render(&mut app);

    assert!(screen.contains("Settings"));
    assert!(screen.contains("Download Location"));
}
