//! Performance monitoring utilities.
//!
//! Frame timing for the cursor animation loop plus scoped timers for hot
//! paths (frame flush, overlay render).
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! folio = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn flush() {
//!     profile_scope!("flush_frame");
//!     // ... work ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, warn};

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of samples to keep for rolling averages
const SAMPLE_COUNT: usize = 60;

/// Threshold multiplier for warning (e.g., 2.0 = warn if frame takes 2x target)
const WARN_THRESHOLD: f64 = 2.0;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, 1.0);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

// ============================================================================
// Frame Statistics
// ============================================================================

/// Rolling statistics over the intervals between animation frames.
pub struct FrameStats {
    /// Recent frame intervals in milliseconds
    intervals: VecDeque<f64>,
    last_frame: Option<Instant>,
    slow_frame_count: u64,
    total_frames: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            intervals: VecDeque::with_capacity(SAMPLE_COUNT),
            last_frame: None,
            slow_frame_count: 0,
            total_frames: 0,
        }
    }

    /// Record a frame at `now`. Returns the interval since the previous
    /// frame in milliseconds, or None for the first frame of a run.
    pub fn record_frame(&mut self, now: Instant) -> Option<f64> {
        let interval = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f64() * 1000.0);
        self.last_frame = Some(now);

        let ms = interval?;
        if self.intervals.len() >= SAMPLE_COUNT {
            self.intervals.pop_front();
        }
        self.intervals.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frame_count += 1;
            debug!("Slow cursor frame: {:.2}ms", ms);
        }
        Some(ms)
    }

    /// Forget the previous frame so an idle gap is not counted as slow.
    pub fn end_run(&mut self) {
        self.last_frame = None;
    }

    pub fn average_frame_time(&self) -> f64 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        self.intervals.iter().sum::<f64>() / self.intervals.len() as f64
    }

    pub fn max_frame_time(&self) -> f64 {
        self.intervals.iter().copied().fold(0.0, f64::max)
    }

    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        self.slow_frame_count as f64 / self.total_frames as f64 * 100.0
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_frame_time();
        if avg > 0.0 { 1000.0 / avg } else { 0.0 }
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs duration on drop when it exceeds its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!("[PERF] {} took {:.2}ms", self.name, elapsed_ms);
        }
    }
}
