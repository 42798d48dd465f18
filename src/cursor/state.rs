//! Pointer state - the single stateful entity behind the cursor overlay.
//!
//! ## Variant Transitions
//!
//! ```text
//! Default -> Hover     (pointer enters an interactive element)
//! Hover   -> Default   (pointer leaves it)
//! Any     -> Click     (pointer down)
//! Click   -> Hover/Default  (pulse expires; follows the live hover flag)
//! ```
//!
//! The variant is derived from two flags rather than stored, so it can never
//! drift out of the three allowed values.

use crate::constants::TRAIL_CAPACITY;
use gpui::{Pixels, Point};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;

/// A pointer location in window (viewport) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point<Pixels>> for Position {
    fn from(point: Point<Pixels>) -> Self {
        Self {
            x: f32::from(point.x),
            y: f32::from(point.y),
        }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Named visual state of the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
    Click,
}

impl CursorVariant {
    pub const ALL: [CursorVariant; 3] = [Self::Default, Self::Hover, Self::Click];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Click => "click",
        }
    }
}

/// Bounded, chronological history of recent pointer positions.
///
/// Oldest entries are evicted once the capacity is exceeded.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Position>,
    capacity: usize,
}

impl Trail {
    pub fn new() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, position: Position) {
        if self.capacity == 0 {
            return;
        }
        self.points.push_back(position);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<Position> {
        self.points.iter().copied().collect()
    }

    pub fn newest(&self) -> Option<Position> {
        self.points.back().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

/// Last known pointer location, trail and the flags the variant is derived from.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    position: Position,
    trail: Trail,
    hovering: bool,
    /// Deadline of the active click pulse
    click_until: Option<Instant>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_click_active(&self) -> bool {
        self.click_until.is_some()
    }

    pub fn click_deadline(&self) -> Option<Instant> {
        self.click_until
    }

    pub fn variant(&self) -> CursorVariant {
        if self.click_until.is_some() {
            CursorVariant::Click
        } else if self.hovering {
            CursorVariant::Hover
        } else {
            CursorVariant::Default
        }
    }

    /// Record a new current position and append it to the trail.
    /// Coordinates are taken as-is; no clamping to the viewport.
    pub fn record_position(&mut self, position: Position) {
        self.position = position;
        self.trail.push(position);
    }

    /// Returns true if the hover flag changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }

    /// Start (or restart) the click pulse, ending at `deadline`.
    pub fn start_click(&mut self, deadline: Instant) {
        self.click_until = Some(deadline);
    }

    /// Clear the click pulse if its deadline has passed.
    /// Returns true if the pulse ended.
    pub fn expire_click(&mut self, now: Instant) -> bool {
        match self.click_until {
            Some(deadline) if now >= deadline => {
                self.click_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
