//! Hover delegation helpers.
//!
//! Interactive elements don't bind hover listeners. Instead each one carries
//! an invisible `hit_region` child that records the element's bounds into the
//! shared region index during prepaint; the root view resolves the target
//! under the pointer from that index.

use crate::cursor::{SharedRegions, TargetId};
use crate::i18n::Section;
use gpui::*;

pub const THEME_TOGGLE: TargetId = TargetId(1);
pub const LANGUAGE_TOGGLE: TargetId = TargetId(2);
pub const CURSOR_TOGGLE: TargetId = TargetId(3);

pub fn nav_target(section: Section) -> TargetId {
    TargetId(100 + section as u64)
}

pub fn heading_target(section: Section) -> TargetId {
    TargetId(200 + section as u64)
}

/// Invisible, full-size child that registers its parent's bounds.
/// The parent must be `relative()`.
pub fn hit_region(target: TargetId, regions: &SharedRegions) -> impl IntoElement {
    let regions = regions.clone();
    canvas(
        move |bounds, window, _cx| {
            // Scrolled-out parts of the element must not catch the pointer
            let clip = window.content_mask().bounds;
            regions.lock().register_clipped(target, bounds, clip);
        },
        |_bounds, _state, _window, _cx| {},
    )
    .absolute()
    .top_0()
    .left_0()
    .size_full()
}
