//! JSON preference store.
//!
//! The file lives at `<config_dir>/folio/preferences.json` unless the
//! `FOLIO_PREFERENCES` environment variable points elsewhere. Writes go to a
//! temporary file in the same directory and are renamed into place.

use super::{Preferences, PreferencesError, PreferencesResult};
use crate::constants::{APP_DIR_NAME, PREFERENCES_FILE_NAME, PREFERENCES_PATH_ENV};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Location of the preference file, honoring the environment override.
pub fn default_preferences_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(PREFERENCES_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(PREFERENCES_FILE_NAME))
}

/// Directory containing `path`; bare file names resolve to the working directory.
pub(super) fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open_default() -> PreferencesResult<Self> {
        default_preferences_path()
            .map(Self::new)
            .ok_or(PreferencesError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read preferences. A missing file yields the defaults.
    pub fn load(&self) -> PreferencesResult<Preferences> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No preference file, using defaults");
                Ok(Preferences::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read preferences, falling back to defaults on any error.
    /// A corrupt file is left in place so the user can fix it.
    pub fn load_or_default(&self) -> Preferences {
        match self.load() {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %self.path.display(), "Failed to load preferences: {}", e);
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> PreferencesResult<()> {
        let dir = parent_dir(&self.path);
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, prefs)?;
        file.write_all(b"\n")?;
        file.flush()?;
        file.persist(&self.path)?;

        debug!(path = %self.path.display(), ?prefs, "Preferences saved");
        Ok(())
    }
}
