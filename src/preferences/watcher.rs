//! Preference file watcher for hot-reload.
//!
//! Watches the directory containing the preference file (so atomic renames
//! are seen) and reports events for that file only.

use super::PreferencesResult;
use super::store::parent_dir;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferencesEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct PreferencesWatcher {
    // Kept alive for as long as events are wanted
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    file_name: Option<OsString>,
}

impl PreferencesWatcher {
    pub fn new(path: PathBuf) -> PreferencesResult<Self> {
        let dir = parent_dir(&path).to_path_buf();
        fs::create_dir_all(&dir)?;

        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            // Receiver gone means the watcher is being dropped
            let _ = tx.send(res);
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(dir = %dir.display(), "Watching preferences");

        let file_name = path.file_name().map(|name| name.to_os_string());
        Ok(Self {
            _watcher: watcher,
            rx,
            file_name,
        })
    }

    /// Drain pending notifications and return the most recent relevant one.
    pub fn poll(&mut self) -> Option<PreferencesEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(mapped) = self.classify(&event) {
                        latest = Some(mapped);
                    }
                }
                Ok(Err(e)) => latest = Some(PreferencesEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }

    fn classify(&self, event: &Event) -> Option<PreferencesEvent> {
        let touches_file = event
            .paths
            .iter()
            .any(|p| p.file_name().map(|n| n.to_os_string()) == self.file_name);
        if !touches_file {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some(PreferencesEvent::Created),
            EventKind::Modify(_) => Some(PreferencesEvent::Modified),
            EventKind::Remove(_) => Some(PreferencesEvent::Deleted),
            _ => None,
        }
    }
}
