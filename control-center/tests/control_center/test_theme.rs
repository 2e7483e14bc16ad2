//! Theme persistence across restarts

use super::common::*;
use control_center::app::{Action, NotificationLevel, Page, Theme};
use control_center::preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, PREFERENCES_FILE, THEME_KEY,
};
use std::time::Instant;
use tempfile::TempDir;

#[test]
fn test_no_stored_theme_starts_dark() {
    let app = app_on(Page::Home);
    assert_eq!(app.view.theme, Theme::Dark);
}

#[test]
fn test_toggle_stores_light_and_reload_keeps_it() {
    let store = MemoryPreferenceStore::new();
    let mut app = app_with_store(Page::Home, Box::new(store.clone()));

    app.dispatch(Action::ToggleTheme, Instant::now());
    assert_eq!(app.view.theme, Theme::Light);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

    let reloaded = app_with_store(Page::Home, Box::new(store));
    assert_eq!(reloaded.view.theme, Theme::Light);
}

#[test]
fn test_each_toggle_writes_exactly_once() {
    let store = MemoryPreferenceStore::new();
    let mut app = app_with_store(Page::Dashboard, Box::new(store.clone()));

    for _ in 0..3 {
        app.dispatch(Action::ToggleTheme, Instant::now());
    }
    let values: Vec<String> = store.writes().into_iter().map(|(_, v)| v).collect();
    assert_eq!(values, vec!["light", "dark", "light"]);
}

#[test]
fn test_file_store_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut app = app_with_store(Page::Home, Box::new(FilePreferenceStore::in_dir(dir.path())));
    app.dispatch(Action::ToggleTheme, Instant::now());
    assert!(dir.path().join(PREFERENCES_FILE).exists());

    let restarted = app_with_store(Page::Home, Box::new(FilePreferenceStore::in_dir(dir.path())));
    assert_eq!(restarted.view.theme, Theme::Light);
}

#[test]
fn test_corrupt_value_falls_back_to_dark() {
    let store = MemoryPreferenceStore::with_entry(THEME_KEY, "purple");
    let app = app_with_store(Page::Home, Box::new(store));
    assert_eq!(app.view.theme, Theme::Dark);
}

#[test]
fn test_corrupt_file_falls_back_to_dark() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(PREFERENCES_FILE), "[1, 2").unwrap();

    let app = app_with_store(Page::Home, Box::new(FilePreferenceStore::in_dir(dir.path())));
    assert_eq!(app.view.theme, Theme::Dark);
}

#[test]
fn test_toggle_raises_notification() {
    let mut app = app_on(Page::Settings);
    app.dispatch(Action::ToggleTheme, Instant::now());
    let latest = app.notifications.latest().unwrap();
    assert_eq!(latest.level, NotificationLevel::Success);
    assert!(latest.message.contains("light"));
}
