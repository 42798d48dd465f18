//! Unit tests for frame statistics.

use folio::perf::{FrameStats, ScopedTimer, TARGET_FRAME_MS};
use std::time::{Duration, Instant};

#[test]
fn test_empty_stats() {
    let stats = FrameStats::new();
    assert_eq!(stats.average_frame_time(), 0.0);
    assert_eq!(stats.estimated_fps(), 0.0);
    assert_eq!(stats.slow_frame_percentage(), 0.0);
}

#[test]
fn test_slow_frames_counted() {
    let start = Instant::now();
    let mut stats = FrameStats::new();
    stats.record_frame(start);
    stats.record_frame(start + Duration::from_millis(16));
    stats.record_frame(start + Duration::from_millis(116));

    assert_eq!(stats.total_frames(), 2);
    assert!((stats.slow_frame_percentage() - 50.0).abs() < 0.01);
    assert!((stats.max_frame_time() - 100.0).abs() < 0.01);
}

#[test]
fn test_rolling_window_forgets_old_samples() {
    let start = Instant::now();
    let mut stats = FrameStats::new();
    let mut now = start;
    stats.record_frame(now);
    now += Duration::from_millis(200);
    stats.record_frame(now);
    for _ in 0..60 {
        now += Duration::from_millis(10);
        stats.record_frame(now);
    }
    assert!((stats.max_frame_time() - 10.0).abs() < 0.01);
    assert_eq!(stats.total_frames(), 61);
}

#[test]
fn test_scoped_timer_elapsed() {
    let timer = ScopedTimer::new("test", TARGET_FRAME_MS);
    assert!(timer.elapsed_ms() < TARGET_FRAME_MS * 100.0);
}
