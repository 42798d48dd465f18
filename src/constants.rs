//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

use std::time::Duration;

// ============================================================================
// Pointer Tracking
// ============================================================================

/// Maximum number of positions kept in the cursor trail
pub const TRAIL_CAPACITY: usize = 8;

/// How long the click pulse variant stays active after a pointer down
pub const CLICK_PULSE: Duration = Duration::from_millis(200);

/// Peak opacity of the newest trail marker
pub const TRAIL_MAX_OPACITY: f32 = 0.3;

// ============================================================================
// Springs
// ============================================================================

/// Outer ring spring: (stiffness, damping, mass)
pub const RING_SPRING: (f32, f32, f32) = (200.0, 15.0, 0.1);

/// Inner dot spring: (stiffness, damping, mass)
pub const DOT_SPRING: (f32, f32, f32) = (300.0, 20.0, 0.05);

/// Largest single integration step, in seconds.
/// Longer frames are split into sub-steps of at most this size.
pub const MAX_SPRING_STEP: f32 = 1.0 / 240.0;

/// Frame gaps above this are treated as a stall, in seconds
pub const MAX_FRAME_DT: f32 = 0.1;

/// Distance from target (in pixels) under which a spring counts as settled
pub const SPRING_POSITION_EPSILON: f32 = 0.25;

/// Velocity (pixels per second) under which a spring counts as settled
pub const SPRING_VELOCITY_EPSILON: f32 = 2.0;

// ============================================================================
// Marker Geometry
// ============================================================================

/// Ring diameter before scaling
pub const RING_SIZE: f32 = 32.0;

/// Dot diameter before scaling
pub const DOT_SIZE: f32 = 8.0;

/// Trail marker diameter
pub const TRAIL_DOT_SIZE: f32 = 4.0;

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 64.0;

/// Minimum viewport width for the custom cursor (the `lg` breakpoint)
pub const CURSOR_MIN_VIEWPORT_WIDTH: f32 = 1024.0;

/// Default window size on launch
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1280.0, 800.0);

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Accent used by the hover and click variants
pub const CURSOR_ACCENT: u32 = 0x22d3ee;

/// Cursor foreground on dark backgrounds
pub const CURSOR_FOREGROUND_DARK: u32 = 0xffffff;

/// Cursor foreground on light backgrounds
pub const CURSOR_FOREGROUND_LIGHT: u32 = 0x0f172a;

// ============================================================================
// Preferences
// ============================================================================

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "folio";

/// File name of the preference store
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Environment variable that overrides the preference file location
pub const PREFERENCES_PATH_ENV: &str = "FOLIO_PREFERENCES";

/// How often the view polls the preference watcher
pub const PREFERENCES_POLL_INTERVAL: Duration = Duration::from_millis(500);
