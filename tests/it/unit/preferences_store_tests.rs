//! Unit tests for the preference store.

use folio::preferences::{
    ColorScheme, Language, Preferences, PreferencesError, PreferencesStore,
    default_preferences_path,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_path() {
    let path = default_preferences_path();
    assert!(path.is_some() || cfg!(target_os = "unknown"));
}

#[test]
fn test_round_trip() {
    let dir = tempdir().unwrap();
    let store = PreferencesStore::new(dir.path().join("preferences.json"));
    let prefs = Preferences {
        theme: ColorScheme::Light,
        language: Language::Vi,
        custom_cursor: true,
    };

    store.save(&prefs).unwrap();
    assert_eq!(store.load().unwrap(), prefs);
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"language": "vi"}"#).unwrap();

    let prefs = PreferencesStore::new(&path).load().unwrap();
    assert_eq!(prefs.theme, ColorScheme::Dark);
    assert_eq!(prefs.language, Language::Vi);
    assert!(prefs.custom_cursor);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json").unwrap();

    let store = PreferencesStore::new(&path);
    assert!(matches!(store.load(), Err(PreferencesError::Json(_))));
    assert_eq!(store.load_or_default(), Preferences::default());
    // Left in place for the user to fix
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_partially_invalid_file_keeps_valid_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(
        &path,
        r#"{"theme": "sepia", "language": "vi", "custom_cursor": false}"#,
    )
    .unwrap();

    let store = PreferencesStore::new(&path);
    let prefs = store.load().unwrap();
    assert_eq!(prefs.theme, ColorScheme::Dark);
    assert_eq!(prefs.language, Language::Vi);
    assert!(!prefs.custom_cursor);
    assert_eq!(store.load_or_default(), prefs);
}

#[test]
fn test_invalid_key_does_not_clobber_others_on_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"theme": 42, "language": "vi"}"#).unwrap();

    let store = PreferencesStore::new(&path);
    let mut prefs = store.load_or_default();
    prefs.theme = prefs.theme.toggled();
    store.save(&prefs).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.theme, ColorScheme::Light);
    assert_eq!(reloaded.language, Language::Vi);
}

#[test]
fn test_save_overwrites_and_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    let store = PreferencesStore::new(dir.path().join("preferences.json"));

    store.save(&Preferences::default()).unwrap();
    let mut prefs = Preferences::default();
    prefs.custom_cursor = false;
    store.save(&prefs).unwrap();

    assert_eq!(store.load().unwrap(), prefs);
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}
