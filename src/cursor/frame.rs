//! Frame scheduling helpers.
//!
//! Pointer moves can arrive many times per frame. `FrameCoalescer` keeps one
//! pending value and lets the host request a single next-frame callback;
//! later values in the same frame replace the pending one instead of queuing.

use crate::constants::MAX_FRAME_DT;
use std::time::Instant;

/// Single-slot, last-writer-wins buffer flushed once per frame.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    scheduled: bool,
    superseded: u64,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            scheduled: false,
            superseded: 0,
        }
    }

    /// Store `value` for the next frame.
    ///
    /// Returns true when the caller must request a frame callback; false when
    /// one is already outstanding and the value simply replaced the pending one.
    pub fn schedule(&mut self, value: T) -> bool {
        if self.pending.replace(value).is_some() {
            self.superseded += 1;
        }
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    /// Take the pending value at frame time and re-arm scheduling.
    pub fn take(&mut self) -> Option<T> {
        self.scheduled = false;
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Number of values dropped because a newer one arrived in the same frame
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }

    /// Drop any pending value, e.g. on unmount.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.scheduled = false;
    }
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Measures elapsed time between animation frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick, capped at `MAX_FRAME_DT`.
    /// The first tick after a reset returns zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_frame = Some(now);
        dt.min(MAX_FRAME_DT)
    }

    pub fn reset(&mut self) {
        self.last_frame = None;
    }
}
