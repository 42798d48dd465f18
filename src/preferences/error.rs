//! Error types for preference operations

use thiserror::Error;

/// Errors that can occur while loading or saving preferences
#[derive(Error, Debug)]
pub enum PreferencesError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic write could not replace the target file
    #[error("Failed to persist preferences: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// No platform config directory and no override path
    #[error("No configuration directory available")]
    NoConfigDir,

    /// File watcher error
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for preference operations
pub type PreferencesResult<T> = Result<T, PreferencesError>;
