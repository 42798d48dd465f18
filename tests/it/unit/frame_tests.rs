//! Unit tests for per-frame coalescing and the frame clock.

use folio::constants::MAX_FRAME_DT;
use folio::cursor::{FrameClock, FrameCoalescer};
use std::time::{Duration, Instant};

#[test]
fn test_first_schedule_requests_frame() {
    let mut coalescer = FrameCoalescer::new();
    assert!(coalescer.schedule(1));
    assert!(coalescer.is_scheduled());
}

#[test]
fn test_burst_requests_one_frame_and_keeps_latest() {
    let mut coalescer = FrameCoalescer::new();
    let requested: Vec<bool> = (0..5).map(|i| coalescer.schedule(i)).collect();

    assert_eq!(requested, vec![true, false, false, false, false]);
    assert_eq!(coalescer.superseded_count(), 4);
    assert_eq!(coalescer.take(), Some(4));
    assert_eq!(coalescer.take(), None);
}

#[test]
fn test_take_rearms_scheduling() {
    let mut coalescer = FrameCoalescer::new();
    coalescer.schedule("a");
    coalescer.take();
    assert!(!coalescer.is_scheduled());
    assert!(coalescer.schedule("b"));
}

#[test]
fn test_cancel_drops_pending() {
    let mut coalescer = FrameCoalescer::new();
    coalescer.schedule(7);
    coalescer.cancel();
    assert!(!coalescer.has_pending());
    assert!(!coalescer.is_scheduled());
    assert_eq!(coalescer.take(), None);
}

#[test]
fn test_clock_first_tick_is_zero() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(Instant::now()), 0.0);
}

#[test]
fn test_clock_measures_and_caps() {
    let start = Instant::now();
    let mut clock = FrameClock::new();
    clock.tick(start);

    let dt = clock.tick(start + Duration::from_millis(16));
    assert!((dt - 0.016).abs() < 1e-4);

    let stalled = clock.tick(start + Duration::from_secs(3));
    assert_eq!(stalled, MAX_FRAME_DT);
}

#[test]
fn test_clock_reset() {
    let start = Instant::now();
    let mut clock = FrameClock::new();
    clock.tick(start);
    clock.reset();
    assert_eq!(clock.tick(start + Duration::from_millis(50)), 0.0);
}
