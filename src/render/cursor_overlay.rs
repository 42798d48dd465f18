//! Cursor overlay - ring, dot and trail drawn above the page.
//!
//! The overlay registers no listeners and no hitboxes, so pointer events
//! fall through to the page underneath.

use crate::constants::{CURSOR_ACCENT, TRAIL_DOT_SIZE};
use crate::cursor::{CursorFrame, MarkerFrame};
use crate::profile_scope;
use gpui::*;

fn marker_color(color: u32, opacity: f32) -> Hsla {
    Hsla::from(rgb(color)).opacity(opacity)
}

fn render_ring(ring: &MarkerFrame) -> Div {
    div()
        .absolute()
        .left(px(ring.origin.x))
        .top(px(ring.origin.y))
        .size(px(ring.size))
        .rounded_full()
        .border_2()
        .border_color(marker_color(ring.color, ring.opacity))
}

fn render_dot(dot: &MarkerFrame) -> Div {
    div()
        .absolute()
        .left(px(dot.origin.x))
        .top(px(dot.origin.y))
        .size(px(dot.size))
        .rounded_full()
        .bg(marker_color(dot.color, dot.opacity))
}

pub fn render_cursor_overlay(frame: &CursorFrame) -> impl IntoElement + use<> {
    profile_scope!("render_cursor_overlay");

    // Oldest first, so newer trail points paint on top
    let trail = frame.trail.iter().map(|marker| {
        div()
            .absolute()
            .left(px(marker.origin.x))
            .top(px(marker.origin.y))
            .size(px(TRAIL_DOT_SIZE))
            .rounded_full()
            .bg(marker_color(CURSOR_ACCENT, marker.opacity))
    });

    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .children(trail)
        .child(render_ring(&frame.ring))
        .child(render_dot(&frame.dot))
}
