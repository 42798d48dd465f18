//! Unit tests for spring physics.

use folio::constants::{SPRING_POSITION_EPSILON, SPRING_VELOCITY_EPSILON};
use folio::cursor::{Position, Spring, SpringConfig, SpringPoint};

fn run(spring: &mut Spring, seconds: f32) {
    let frames = (seconds / 0.016).round() as usize;
    for _ in 0..frames {
        spring.advance(0.016);
    }
}

#[test]
fn test_ring_and_dot_constants_differ() {
    assert_ne!(SpringConfig::ring(), SpringConfig::dot());
}

#[test]
fn test_dot_is_stiffer_than_ring() {
    assert!(SpringConfig::dot().natural_frequency() > SpringConfig::ring().natural_frequency());
}

#[test]
fn test_spring_converges() {
    for config in [SpringConfig::ring(), SpringConfig::dot()] {
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(100.0);
        run(&mut spring, 2.0);

        assert!((spring.value() - 100.0).abs() < SPRING_POSITION_EPSILON);
        assert!(spring.velocity().abs() < SPRING_VELOCITY_EPSILON);
        assert!(spring.is_settled());
    }
}

#[test]
fn test_spring_moves_toward_target_without_overshoot() {
    let mut spring = Spring::new(SpringConfig::ring(), 0.0);
    spring.set_target(50.0);
    let mut previous = 0.0;
    for _ in 0..120 {
        spring.advance(0.016);
        assert!(spring.value() >= previous - 1e-3);
        assert!(spring.value() <= 50.0 + SPRING_POSITION_EPSILON);
        previous = spring.value();
    }
}

#[test]
fn test_dot_leads_ring() {
    let mut ring = Spring::new(SpringConfig::ring(), 0.0);
    let mut dot = Spring::new(SpringConfig::dot(), 0.0);
    ring.set_target(100.0);
    dot.set_target(100.0);

    ring.advance(0.1);
    dot.advance(0.1);

    assert!(dot.value() > ring.value());
    assert!(ring.value() > 0.0);
}

#[test]
fn test_long_frame_is_stable() {
    let mut spring = Spring::new(SpringConfig::dot(), 0.0);
    spring.set_target(1000.0);
    spring.advance(0.1);
    assert!(spring.value().is_finite());
    assert!(spring.value() <= 1000.0 + SPRING_POSITION_EPSILON);
}

#[test]
fn test_snap_settles_immediately() {
    let mut spring = Spring::new(SpringConfig::ring(), 0.0);
    spring.set_target(40.0);
    spring.snap_to(25.0);
    assert_eq!(spring.value(), 25.0);
    assert_eq!(spring.target(), 25.0);
    assert!(spring.is_settled());
}

#[test]
fn test_spring_point_tracks_both_axes() {
    let mut point = SpringPoint::new(SpringConfig::dot(), Position::new(0.0, 0.0));
    point.set_target(Position::new(30.0, -30.0));
    for _ in 0..120 {
        point.advance(0.016);
    }
    let value = point.value();
    assert!((value.x - 30.0).abs() < SPRING_POSITION_EPSILON);
    assert!((value.y + 30.0).abs() < SPRING_POSITION_EPSILON);
    assert!(point.is_settled());
}

#[test]
fn test_dot_settles_before_ring() {
    fn frames_to_settle(config: SpringConfig) -> usize {
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(100.0);
        let mut frames = 0;
        while !spring.is_settled() && frames < 1000 {
            spring.advance(0.016);
            frames += 1;
        }
        frames
    }

    let ring = frames_to_settle(SpringConfig::ring());
    let dot = frames_to_settle(SpringConfig::dot());
    assert!(ring < 1000);
    assert!(dot <= ring);
}
