//! User preferences - color scheme, language and the custom cursor toggle.
//!
//! Preferences are loaded once at startup, handed to the view tree as an
//! explicit value and written back whenever a toggle changes them.
//!
//! ## Modules
//!
//! - `error` - Error type for preference I/O
//! - `store` - JSON file store with atomic writes
//! - `watcher` - File watcher for hot-reload of external edits

mod error;
mod store;
mod watcher;

pub use error::{PreferencesError, PreferencesResult};
pub use store::{PreferencesStore, default_preferences_path};
pub use watcher::{PreferencesEvent, PreferencesWatcher};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Vi,
            Self::Vi => Self::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Parse one field, keeping `fallback` when the stored value is invalid.
fn parse_or<T: DeserializeOwned>(value: serde_json::Value, fallback: T) -> T {
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(%value, "Ignoring invalid preference value: {}", e);
            fallback
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_or(value, T::default()))
}

fn lenient_custom_cursor<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_or(value, default_true()))
}

/// Persisted preference record.
///
/// Each field falls back to its default on its own, so one bad value does
/// not discard the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient")]
    pub theme: ColorScheme,
    #[serde(default, deserialize_with = "lenient")]
    pub language: Language,
    /// Draw the custom cursor overlay instead of the system cursor
    #[serde(default = "default_true", deserialize_with = "lenient_custom_cursor")]
    pub custom_cursor: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ColorScheme::default(),
            language: Language::default(),
            custom_cursor: true,
        }
    }
}
