//! Spring physics for the cursor markers.
//!
//! RK4-integrated damped springs. The ring and the dot each get their own
//! configuration so the dot catches up faster and the two layers visibly lag.

use super::state::Position;
use crate::constants::{
    DOT_SPRING, MAX_FRAME_DT, MAX_SPRING_STEP, RING_SPRING, SPRING_POSITION_EPSILON,
    SPRING_VELOCITY_EPSILON,
};

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Outer ring: softer, trails behind the dot
    pub const fn ring() -> Self {
        Self::new(RING_SPRING.0, RING_SPRING.1, RING_SPRING.2)
    }

    /// Inner dot: stiffer and lighter
    pub const fn dot() -> Self {
        Self::new(DOT_SPRING.0, DOT_SPRING.1, DOT_SPRING.2)
    }

    /// Undamped angular frequency, in radians per second
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

/// One-dimensional spring chasing a target value.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with no motion.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SPRING_POSITION_EPSILON
            && self.velocity.abs() < SPRING_VELOCITY_EPSILON
    }

    /// Advance by `dt` seconds, split into stable sub-steps.
    pub fn advance(&mut self, dt: f32) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);
        while remaining > 0.0 {
            let step = remaining.min(MAX_SPRING_STEP);
            self.step(step);
            remaining -= step;
        }
    }

    /// Step the spring simulation using RK4 integration
    fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

/// A pair of springs moving a marker across the viewport.
#[derive(Clone, Copy, Debug)]
pub struct SpringPoint {
    x: Spring,
    y: Spring,
}

impl SpringPoint {
    pub fn new(config: SpringConfig, initial: Position) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
        }
    }

    pub fn value(&self) -> Position {
        Position::new(self.x.value(), self.y.value())
    }

    pub fn target(&self) -> Position {
        Position::new(self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, target: Position) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap_to(&mut self, position: Position) {
        self.x.snap_to(position.x);
        self.y.snap_to(position.y);
    }

    pub fn advance(&mut self, dt: f32) {
        self.x.advance(dt);
        self.y.advance(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}
