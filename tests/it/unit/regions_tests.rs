//! Unit tests for the interactive region index.

use folio::cursor::{InteractiveRegions, Position, TargetId};
use gpui::{Bounds, point, px, size};

#[test]
fn test_empty_index_has_no_target() {
    let regions = InteractiveRegions::new();
    assert!(regions.is_empty());
    assert_eq!(regions.target_at(Position::new(10.0, 10.0)), None);
}

#[test]
fn test_point_inside_region() {
    let mut regions = InteractiveRegions::new();
    regions.register(TargetId(1), (100.0, 100.0), (80.0, 30.0));

    assert_eq!(regions.target_at(Position::new(120.0, 110.0)), Some(TargetId(1)));
    assert_eq!(regions.target_at(Position::new(99.0, 110.0)), None);
    assert_eq!(regions.target_at(Position::new(181.0, 110.0)), None);
}

#[test]
fn test_edges_are_inclusive() {
    let mut regions = InteractiveRegions::new();
    regions.register(TargetId(1), (0.0, 0.0), (10.0, 10.0));
    assert_eq!(regions.target_at(Position::new(10.0, 10.0)), Some(TargetId(1)));
}

#[test]
fn test_topmost_wins_on_overlap() {
    let mut regions = InteractiveRegions::new();
    regions.register(TargetId(1), (0.0, 0.0), (200.0, 200.0));
    regions.register(TargetId(2), (50.0, 50.0), (20.0, 20.0));

    assert_eq!(regions.target_at(Position::new(60.0, 60.0)), Some(TargetId(2)));
    assert_eq!(regions.target_at(Position::new(10.0, 10.0)), Some(TargetId(1)));
}

#[test]
fn test_reregister_moves_region() {
    let mut regions = InteractiveRegions::new();
    regions.register(TargetId(1), (0.0, 0.0), (10.0, 10.0));
    regions.register(TargetId(1), (100.0, 0.0), (10.0, 10.0));

    assert_eq!(regions.len(), 1);
    assert_eq!(regions.target_at(Position::new(5.0, 5.0)), None);
    assert_eq!(regions.target_at(Position::new(105.0, 5.0)), Some(TargetId(1)));
}

#[test]
fn test_zero_size_ignored() {
    let mut regions = InteractiveRegions::new();
    regions.register(TargetId(1), (0.0, 0.0), (0.0, 10.0));
    assert!(regions.is_empty());
}

#[test]
fn test_begin_frame_clears() {
    let mut regions = InteractiveRegions::new();
    regions.register(TargetId(1), (0.0, 0.0), (10.0, 10.0));
    regions.begin_frame();
    assert!(regions.is_empty());
    assert_eq!(regions.target_at(Position::new(5.0, 5.0)), None);
}

#[test]
fn test_element_scrolled_under_header_does_not_shadow_it() {
    let mut regions = InteractiveRegions::new();
    let header_button = Bounds::new(point(px(600.0), px(12.0)), size(px(80.0), px(40.0)));
    let viewport = Bounds::new(point(px(0.0), px(0.0)), size(px(1280.0), px(800.0)));
    regions.register_clipped(TargetId(1), header_button, viewport);

    // Section list starts below the 64px header; the heading scrolled above it
    let section_clip = Bounds::new(point(px(0.0), px(64.0)), size(px(1280.0), px(736.0)));
    let heading = Bounds::new(point(px(48.0), px(-20.0)), size(px(400.0), px(60.0)));
    regions.register_clipped(TargetId(2), heading, section_clip);

    assert_eq!(regions.target_at(Position::new(100.0, 20.0)), None);
    assert_eq!(regions.target_at(Position::new(620.0, 30.0)), Some(TargetId(1)));
    assert_eq!(regions.len(), 1);
}

#[test]
fn test_partially_visible_element_keeps_visible_part() {
    let mut regions = InteractiveRegions::new();
    let clip = Bounds::new(point(px(0.0), px(64.0)), size(px(1280.0), px(736.0)));
    let heading = Bounds::new(point(px(48.0), px(40.0)), size(px(400.0), px(60.0)));
    regions.register_clipped(TargetId(2), heading, clip);

    assert_eq!(regions.target_at(Position::new(100.0, 50.0)), None);
    assert_eq!(regions.target_at(Position::new(100.0, 80.0)), Some(TargetId(2)));
}
