//! Application lifecycle - initialization, preference reload and teardown.

use super::{CursorLayer, PageState, Portfolio, SystemState, apply_color_scheme};
use crate::constants::PREFERENCES_POLL_INTERVAL;
use crate::cursor::{InteractiveRegions, PointerTracker};
use crate::perf::FrameStats;
use crate::preferences::{PreferencesEvent, PreferencesStore, PreferencesWatcher};
use gpui::*;

impl Portfolio {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = match PreferencesStore::open_default() {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Preferences will not be persisted: {}", e);
                None
            }
        };
        let preferences = store
            .as_ref()
            .map(|store| store.load_or_default())
            .unwrap_or_default();
        tracing::info!(
            theme = ?preferences.theme,
            language = preferences.language.code(),
            custom_cursor = preferences.custom_cursor,
            "Preferences loaded"
        );

        let watcher = store.as_ref().and_then(|store| {
            PreferencesWatcher::new(store.path().to_path_buf())
                .inspect_err(|e| tracing::warn!("Preference hot-reload disabled: {}", e))
                .ok()
        });

        apply_color_scheme(preferences.theme, Some(window), cx);

        let mut tracker = PointerTracker::new();
        tracker.set_color_scheme(preferences.theme);

        let mut this = Self {
            preferences,
            cursor: CursorLayer {
                tracker,
                regions: InteractiveRegions::shared(),
                frame_requested: false,
                frame_stats: FrameStats::new(),
            },
            page: PageState {
                scroll: ScrollHandle::new(),
                active_section: None,
            },
            system: SystemState {
                store,
                watcher,
                viewport_width: f32::from(window.viewport_size().width),
            },
        };
        this.sync_cursor_mount();

        // Listeners go away with the view; the tracker must not outlive them mounted
        cx.on_release(|this, _cx| {
            this.cursor.tracker.unmount();
        })
        .detach();

        if this.system.watcher.is_some() {
            cx.spawn_in(window, async move |this, cx| {
                loop {
                    cx.background_executor()
                        .timer(PREFERENCES_POLL_INTERVAL)
                        .await;
                    let alive = this.update_in(cx, |this, window, cx| {
                        this.check_preferences_reload(window, cx);
                    });
                    if alive.is_err() {
                        break;
                    }
                }
            })
            .detach();
        }

        this
    }

    /// Check for preference file changes and apply them if needed.
    pub fn check_preferences_reload(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(event) = self.system.watcher.as_mut().and_then(|w| w.poll()) else {
            return;
        };

        match event {
            PreferencesEvent::Modified | PreferencesEvent::Created => {
                let Some(store) = self.system.store.as_ref() else {
                    return;
                };
                let reloaded = match store.load() {
                    Ok(prefs) => prefs,
                    Err(e) => {
                        tracing::warn!("Ignoring unreadable preference change: {}", e);
                        return;
                    }
                };
                // Our own saves come back through the watcher too
                if reloaded == self.preferences {
                    return;
                }
                tracing::info!("Preference file changed, reloading...");
                self.preferences = reloaded;
                self.apply_preferences(window, cx);
            }
            PreferencesEvent::Deleted => {
                tracing::warn!("Preference file deleted");
            }
            PreferencesEvent::Error(e) => {
                tracing::error!("Preference watch error: {}", e);
            }
        }
    }

    /// Push the current preferences into the theme and the cursor layer.
    pub(super) fn apply_preferences(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        apply_color_scheme(self.preferences.theme, Some(window), cx);
        self.cursor.tracker.set_color_scheme(self.preferences.theme);
        self.sync_cursor_mount();
        cx.notify();
    }
}
