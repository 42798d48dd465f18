//! Preference workflows: toggling, saving and reloading from disk.

use folio::preferences::{ColorScheme, Language, Preferences, PreferencesStore};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_toggles_survive_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let store = PreferencesStore::new(&path);
    let mut prefs = store.load_or_default();
    prefs.theme = prefs.theme.toggled();
    prefs.language = prefs.language.toggled();
    store.save(&prefs).unwrap();

    let reopened = PreferencesStore::new(&path).load_or_default();
    assert_eq!(reopened.theme, ColorScheme::Light);
    assert_eq!(reopened.language, Language::Vi);
    assert!(reopened.custom_cursor);
}

#[test]
fn test_external_edit_is_picked_up_on_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let store = PreferencesStore::new(&path);
    store.save(&Preferences::default()).unwrap();

    fs::write(&path, r#"{"theme": "light", "language": "en", "custom_cursor": false}"#).unwrap();

    let reloaded = store.load().unwrap();
    assert_ne!(reloaded, Preferences::default());
    assert!(!reloaded.custom_cursor);
}

#[test]
fn test_double_toggle_is_identity() {
    let prefs = Preferences::default();
    assert_eq!(prefs.theme.toggled().toggled(), prefs.theme);
    assert_eq!(prefs.language.toggled().toggled(), prefs.language);
}
