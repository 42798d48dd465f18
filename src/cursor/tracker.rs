//! Pointer tracker - turns raw pointer events into a renderable cursor frame.
//!
//! The tracker is host-agnostic: the view forwards gpui events into it and
//! asks it for a [`CursorFrame`] at render time. Time is always passed in, so
//! the click pulse and spring animation are deterministic under test.
//!
//! ## Lifecycle
//!
//! ```text
//! Detached -> Mounted    (mount: state reset, events accepted)
//! Mounted  -> Detached   (unmount: pending frame and pulse dropped)
//! ```
//!
//! While detached every event operation is a no-op that returns `false`/`None`.

use super::frame::{FrameClock, FrameCoalescer};
use super::regions::{InteractiveRegions, TargetId};
use super::spring::{Spring, SpringConfig, SpringPoint};
use super::state::{CursorVariant, PointerState, Position};
use super::visuals::{CursorStyle, trail_anchor, trail_opacity};
use crate::constants::{CLICK_PULSE, DOT_SIZE, RING_SIZE};
use crate::preferences::ColorScheme;
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Detached,
    Mounted,
}

/// Result of flushing one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// A coalesced pointer move was applied this frame
    pub applied_move: bool,
    /// The variant differs from the previous frame
    pub variant_changed: bool,
    /// Springs moved during this frame
    pub animated: bool,
    /// Springs are still moving or a pulse is active
    pub needs_another_frame: bool,
}

impl FrameOutcome {
    /// Anything visible changed, so the overlay must be painted again.
    pub fn needs_repaint(&self) -> bool {
        self.applied_move || self.variant_changed || self.animated
    }
}

/// Resolved geometry of one marker for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerFrame {
    /// Top-left corner of the scaled marker
    pub origin: Position,
    pub size: f32,
    pub opacity: f32,
    pub color: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailMarker {
    pub origin: Position,
    pub opacity: f32,
}

/// Everything the overlay needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorFrame {
    pub variant: CursorVariant,
    pub ring: MarkerFrame,
    pub dot: MarkerFrame,
    /// Oldest first
    pub trail: Vec<TrailMarker>,
}

/// A spring-driven marker: anchor position plus rendered diameter.
#[derive(Debug, Clone, Copy)]
struct AnimatedMarker {
    anchor: SpringPoint,
    size: Spring,
    base_size: f32,
}

impl AnimatedMarker {
    fn new(config: SpringConfig, base_size: f32) -> Self {
        Self {
            anchor: SpringPoint::new(config, Position::default()),
            size: Spring::new(config, base_size),
            base_size,
        }
    }

    fn retarget(&mut self, anchor: Position, scale: f32) {
        self.anchor.set_target(anchor);
        self.size.set_target(self.base_size * scale);
    }

    fn advance(&mut self, dt: f32) {
        self.anchor.advance(dt);
        self.size.advance(dt);
    }

    fn is_settled(&self) -> bool {
        self.anchor.is_settled() && self.size.is_settled()
    }

    /// Scaling happens around the center of the unscaled box.
    fn origin(&self) -> Position {
        let anchor = self.anchor.value();
        let inset = (self.base_size - self.size.value()) / 2.0;
        Position::new(anchor.x + inset, anchor.y + inset)
    }
}

pub struct PointerTracker {
    lifecycle: Lifecycle,
    state: PointerState,
    moves: FrameCoalescer<Position>,
    clock: FrameClock,
    hover_target: Option<TargetId>,
    last_variant: CursorVariant,
    scheme: ColorScheme,
    ring: AnimatedMarker,
    dot: AnimatedMarker,
}

impl PointerTracker {
    pub fn new() -> Self {
        let mut tracker = Self {
            lifecycle: Lifecycle::Detached,
            state: PointerState::new(),
            moves: FrameCoalescer::new(),
            clock: FrameClock::new(),
            hover_target: None,
            last_variant: CursorVariant::Default,
            scheme: ColorScheme::default(),
            ring: AnimatedMarker::new(SpringConfig::ring(), RING_SIZE),
            dot: AnimatedMarker::new(SpringConfig::dot(), DOT_SIZE),
        };
        tracker.snap_markers();
        tracker
    }

    // ==================== Lifecycle ====================

    /// Start accepting events. Returns false if already mounted.
    pub fn mount(&mut self) -> bool {
        if self.is_mounted() {
            return false;
        }
        self.discard_state();
        self.lifecycle = Lifecycle::Mounted;
        debug!("Pointer tracker mounted");
        true
    }

    /// Stop accepting events and drop all transient state.
    /// Returns false if already detached.
    pub fn unmount(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.discard_state();
        self.lifecycle = Lifecycle::Detached;
        debug!(
            superseded_moves = self.moves.superseded_count(),
            "Pointer tracker unmounted"
        );
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn discard_state(&mut self) {
        self.state.reset();
        self.moves.cancel();
        self.clock.reset();
        self.hover_target = None;
        self.last_variant = CursorVariant::Default;
        self.snap_markers();
    }

    fn snap_markers(&mut self) {
        let style = CursorStyle::for_variant(self.state.variant(), self.scheme);
        let position = self.state.position();
        self.ring.anchor.snap_to(style.ring.anchor(position));
        self.ring.size.snap_to(RING_SIZE * style.ring.scale);
        self.dot.anchor.snap_to(style.dot.anchor(position));
        self.dot.size.snap_to(DOT_SIZE * style.dot.scale);
    }

    // ==================== Accessors ====================

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    pub fn variant(&self) -> CursorVariant {
        self.state.variant()
    }

    pub fn position(&self) -> Position {
        self.state.position()
    }

    pub fn trail(&self) -> Vec<Position> {
        self.state.trail().to_vec()
    }

    pub fn hover_target(&self) -> Option<TargetId> {
        self.hover_target
    }

    pub fn has_pending_move(&self) -> bool {
        self.moves.has_pending()
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    // ==================== Events ====================

    /// Apply a pointer move immediately.
    pub fn on_pointer_move(&mut self, position: Position) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.state.record_position(position);
        self.retarget();
        true
    }

    /// Buffer a pointer move until the next frame.
    ///
    /// Returns true when the host must request a next-frame callback.
    pub fn queue_pointer_move(&mut self, position: Position) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.moves.schedule(position)
    }

    pub fn on_interactive_enter(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let changed = self.state.set_hovering(true);
        if changed {
            self.retarget();
        }
        changed
    }

    pub fn on_interactive_leave(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let changed = self.state.set_hovering(false);
        if changed {
            self.retarget();
        }
        changed
    }

    /// Start or restart the click pulse. Returns its deadline; the host
    /// should call [`Self::expire_click`] at or after that instant.
    pub fn on_pointer_down(&mut self, now: Instant) -> Option<Instant> {
        if !self.is_mounted() {
            return None;
        }
        let deadline = now + CLICK_PULSE;
        self.state.start_click(deadline);
        self.retarget();
        Some(deadline)
    }

    /// End the click pulse if its deadline has passed. Stale timers from an
    /// earlier, since-restarted pulse are no-ops.
    pub fn expire_click(&mut self, now: Instant) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let expired = self.state.expire_click(now);
        if expired {
            self.retarget();
        }
        expired
    }

    /// Derive enter/leave from the region under the current position.
    pub fn resolve_hover(&mut self, regions: &InteractiveRegions) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let target = regions.target_at(self.state.position());
        if target == self.hover_target {
            return false;
        }
        trace!(from = ?self.hover_target, to = ?target, "Hover target changed");
        self.hover_target = target;
        match target {
            Some(_) => self.on_interactive_enter(),
            None => self.on_interactive_leave(),
        }
    }

    /// Apply the coalesced move, resolve hover and advance the springs.
    pub fn flush_frame(
        &mut self,
        now: Instant,
        regions: Option<&InteractiveRegions>,
    ) -> FrameOutcome {
        if !self.is_mounted() {
            return FrameOutcome::default();
        }

        let applied_move = match self.moves.take() {
            Some(position) => self.on_pointer_move(position),
            None => false,
        };
        if let Some(regions) = regions {
            self.resolve_hover(regions);
        }
        self.expire_click(now);

        let dt = self.clock.tick(now);
        let animated = dt > 0.0 && !self.is_settled();
        self.ring.advance(dt);
        self.dot.advance(dt);

        let variant = self.state.variant();
        let variant_changed = variant != self.last_variant;
        if variant_changed {
            trace!(from = self.last_variant.as_str(), to = variant.as_str(), "Cursor variant");
            self.last_variant = variant;
        }

        FrameOutcome {
            applied_move,
            variant_changed,
            animated,
            needs_another_frame: !self.is_settled() || self.state.is_click_active(),
        }
    }

    /// Both markers have reached their targets.
    pub fn is_settled(&self) -> bool {
        self.ring.is_settled() && self.dot.is_settled()
    }

    fn retarget(&mut self) {
        let style = CursorStyle::for_variant(self.state.variant(), self.scheme);
        let position = self.state.position();
        self.ring.retarget(style.ring.anchor(position), style.ring.scale);
        self.dot.retarget(style.dot.anchor(position), style.dot.scale);
    }

    // ==================== Rendering ====================

    pub fn frame(&self) -> CursorFrame {
        let variant = self.state.variant();
        let style = CursorStyle::for_variant(variant, self.scheme);
        let trail = self.state.trail();
        let len = trail.len();

        CursorFrame {
            variant,
            ring: MarkerFrame {
                origin: self.ring.origin(),
                size: self.ring.size.value(),
                opacity: style.ring.opacity,
                color: style.ring.color,
            },
            dot: MarkerFrame {
                origin: self.dot.origin(),
                size: self.dot.size.value(),
                opacity: style.dot.opacity,
                color: style.dot.color,
            },
            trail: trail
                .iter()
                .enumerate()
                .map(|(index, point)| TrailMarker {
                    origin: trail_anchor(*point),
                    opacity: trail_opacity(index, len),
                })
                .collect(),
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
