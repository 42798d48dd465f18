//! Interactive Regions
//!
//! R-tree index of the hit regions of interactive elements (links, buttons,
//! anything opted into the hover variant). The index is rebuilt every frame
//! from element bounds, so elements added after mount are picked up without
//! re-binding any listeners. The root view listens for pointer moves once and
//! resolves the target here.

use super::state::Position;
use gpui::{Bounds, Pixels};
use parking_lot::Mutex;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;
use std::sync::Arc;

/// Index shared between the view and the prepaint callbacks that fill it.
pub type SharedRegions = Arc<Mutex<InteractiveRegions>>;

/// Identifier of an interactive element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

/// A region's bounding box plus its paint order.
#[derive(Debug, Clone, Copy)]
pub struct RegionEntry {
    pub target: TargetId,
    /// Registration order within the frame; higher paints on top
    pub order: u64,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl RegionEntry {
    pub fn new(target: TargetId, order: u64, origin: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            target,
            order,
            min_x: origin.0,
            min_y: origin.1,
            max_x: origin.0 + size.0,
            max_y: origin.1 + size.1,
        }
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.y >= self.min_y
            && position.y <= self.max_y
    }
}

impl RTreeObject for RegionEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for RegionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target && self.order == other.order
    }
}

pub struct InteractiveRegions {
    tree: RTree<RegionEntry>,
    entries: HashMap<TargetId, RegionEntry>,
    next_order: u64,
}

impl InteractiveRegions {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            next_order: 0,
        }
    }

    pub fn shared() -> SharedRegions {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Drop last frame's regions before elements re-register.
    pub fn begin_frame(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
        self.next_order = 0;
    }

    /// Register (or move) a target's hit region.
    /// Zero or negative sized regions are ignored.
    pub fn register(&mut self, target: TargetId, origin: (f32, f32), size: (f32, f32)) {
        if size.0 <= 0.0 || size.1 <= 0.0 {
            return;
        }

        if let Some(old_entry) = self.entries.remove(&target) {
            self.tree.remove(&old_entry);
        }

        let entry = RegionEntry::new(target, self.next_order, origin, size);
        self.next_order += 1;
        self.tree.insert(entry);
        self.entries.insert(target, entry);
    }

    /// Register the visible part of `bounds` inside `clip` (the content mask
    /// of a scrolling ancestor). Fully clipped elements register nothing.
    pub fn register_clipped(
        &mut self,
        target: TargetId,
        bounds: Bounds<Pixels>,
        clip: Bounds<Pixels>,
    ) {
        let visible = bounds.intersect(&clip);
        self.register(
            target,
            (f32::from(visible.origin.x), f32::from(visible.origin.y)),
            (f32::from(visible.size.width), f32::from(visible.size.height)),
        );
    }

    /// Topmost target containing `position`, if any.
    pub fn target_at(&self, position: Position) -> Option<TargetId> {
        let point_envelope = AABB::from_point([position.x, position.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains(position))
            .max_by_key(|entry| entry.order)
            .map(|entry| entry.target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InteractiveRegions {
    fn default() -> Self {
        Self::new()
    }
}
