//! Custom cursor: pointer tracking, trail and spring-eased markers.
//!
//! ## Modules
//!
//! - `state` - Pointer state entity: position, bounded trail, derived variant
//! - `tracker` - Event operations, mount/unmount lifecycle, frame flushing
//! - `frame` - Per-frame coalescing of pointer moves and the frame clock
//! - `spring` - RK4 spring physics for the ring and dot
//! - `regions` - R-tree of interactive element bounds (hover delegation)
//! - `visuals` - Variant style tables and trail opacity

mod frame;
mod regions;
mod spring;
mod state;
mod tracker;
mod visuals;

pub use frame::{FrameClock, FrameCoalescer};
pub use regions::{InteractiveRegions, RegionEntry, SharedRegions, TargetId};
pub use spring::{Spring, SpringConfig, SpringPoint};
pub use state::{CursorVariant, PointerState, Position, Trail};
pub use tracker::{CursorFrame, FrameOutcome, Lifecycle, MarkerFrame, PointerTracker, TrailMarker};
pub use visuals::{CursorStyle, MarkerStyle, foreground_for, trail_opacity};
