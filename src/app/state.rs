//! Application state - the Portfolio struct definition and sub-structs.

use crate::cursor::{PointerTracker, SharedRegions};
use crate::i18n::Section;
use crate::perf::FrameStats;
use crate::preferences::{Preferences, PreferencesStore, PreferencesWatcher};
use gpui::ScrollHandle;

/// Cursor overlay state - tracker, hover regions and frame scheduling
pub struct CursorLayer {
    /// Pointer state machine and marker springs
    pub tracker: PointerTracker,
    /// Interactive element bounds, refilled every frame during prepaint
    pub regions: SharedRegions,
    /// A next-frame callback is outstanding
    pub frame_requested: bool,
    /// Intervals between animation frames
    pub frame_stats: FrameStats,
}

/// Page scroll state
pub struct PageState {
    /// Scroll handle of the section list
    pub scroll: ScrollHandle,
    /// Section last navigated to from the header
    pub active_section: Option<Section>,
}

/// Background plumbing - preference persistence and window metrics
pub struct SystemState {
    /// Where preferences are saved; None when no config dir exists
    pub store: Option<PreferencesStore>,
    /// Hot-reload watcher for the preference file
    pub watcher: Option<PreferencesWatcher>,
    /// Last known viewport width, for the cursor breakpoint
    pub viewport_width: f32,
}

/// Root view of the application.
pub struct Portfolio {
    /// Theme, language and cursor preference, passed explicitly to render code
    pub preferences: Preferences,
    pub cursor: CursorLayer,
    pub page: PageState,
    pub system: SystemState,
}
