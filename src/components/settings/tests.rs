use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::model::settings::{AudioFormat, Appearance};

fn press(modal: &mut SettingsModal, code: KeyCode) -> Option<SettingsAction> {
    modal.process_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn opened() -> SettingsModal {
    let mut modal = SettingsModal::new();
    modal.open(&Settings::default());
    modal
}

#[test]
fn opening_starts_a_fresh_draft() {
    let mut modal = opened();
    press(&mut modal, KeyCode::Tab);
    press(&mut modal, KeyCode::Tab);

    let mut current = Settings::default();
    current.concurrent_downloads = 7;
    modal.open(&current);

    assert!(modal.is_open());
    assert_eq!(modal.section, SettingsSection::General);
    assert_eq!(modal.focus, SettingsField::DownloadDir);
    assert_eq!(modal.draft, current);
}

#[test]
fn edits_change_only_the_draft_until_saved() {
    let mut modal = opened();

    press(&mut modal, KeyCode::Char('j'));
    press(&mut modal, KeyCode::Char('l'));
    assert_eq!(modal.draft.audio_format, AudioFormat::Mp3Medium);

    press(&mut modal, KeyCode::Char('j'));
    press(&mut modal, KeyCode::Right);
    press(&mut modal, KeyCode::Right);
    assert_eq!(modal.draft.concurrent_downloads, 5);

    let mut expected = Settings::default();
    expected.audio_format = AudioFormat::Mp3Medium;
    expected.concurrent_downloads = 5;

    assert_eq!(press(&mut modal, KeyCode::Char('s')), Some(SettingsAction::Save(expected)));
}

#[test]
fn escape_closes_without_saving() {
    let mut modal = opened();
    press(&mut modal, KeyCode::Char('k'));
    assert_eq!(modal.focus, SettingsField::Appearance);

    press(&mut modal, KeyCode::Enter);
    assert_eq!(modal.draft.appearance, Appearance::System);

    assert_eq!(press(&mut modal, KeyCode::Esc), Some(SettingsAction::Close));
}

#[test]
fn tab_cycles_sections_and_only_general_takes_field_keys() {
    let mut modal = opened();

    press(&mut modal, KeyCode::Tab);
    assert_eq!(modal.section, SettingsSection::Integrations);

    press(&mut modal, KeyCode::Char('j'));
    assert_eq!(modal.focus, SettingsField::DownloadDir);

    press(&mut modal, KeyCode::Tab);
    press(&mut modal, KeyCode::Tab);
    assert_eq!(modal.section, SettingsSection::General);

    press(&mut modal, KeyCode::BackTab);
    assert_eq!(modal.section, SettingsSection::About);
}

#[test]
fn download_location_is_edited_as_text() {
    let mut modal = opened();

    press(&mut modal, KeyCode::Enter);
    assert!(modal.path_input.is_some());

    if let Some(input) = modal.path_input.as_mut() {
        input.reset();
    }
    assert!(modal.insert_text(" /srv/music"));

    // 's' is text while editing, not save
    assert_eq!(press(&mut modal, KeyCode::Char('s')), None);
    press(&mut modal, KeyCode::Enter);

    assert!(modal.path_input.is_none());
    assert_eq!(modal.draft.download_dir, std::path::PathBuf::from("/srv/musics"));
}

#[test]
fn cancelling_a_location_edit_keeps_the_old_value() {
    let mut modal = opened();
    let before = modal.draft.download_dir.clone();

    press(&mut modal, KeyCode::Char(' '));
    press(&mut modal, KeyCode::Char('x'));
    press(&mut modal, KeyCode::Esc);

    assert!(modal.path_input.is_none());
    assert!(modal.is_open());
    assert_eq!(modal.draft.download_dir, before);
}

#[test]
fn pasting_needs_an_active_location_edit() {
    let mut modal = opened();
    assert!(!modal.insert_text("/tmp"));
}
