//! Pointer handling - forwards gpui mouse events into the tracker.
//!
//! ## Performance Notes
//!
//! Mouse move can fire many times per frame. Moves are only buffered here;
//! the position is applied once per frame from a `Window::on_next_frame`
//! callback, and the springs keep scheduling frames until they settle.
//!
//! Every render also schedules a flush, because layout changes (scrolling,
//! elements appearing) can move a target under a stationary pointer. A flush
//! that changes nothing does not notify, so this does not loop.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::Portfolio;
use crate::constants::CURSOR_MIN_VIEWPORT_WIDTH;
use crate::cursor::Position;
use crate::profile_scope;
use gpui::*;
use std::time::Instant;

impl Portfolio {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self
            .cursor
            .tracker
            .queue_pointer_move(Position::from(event.position))
        {
            self.schedule_cursor_frame(window, cx);
        }
    }

    pub fn handle_scroll_wheel(
        &mut self,
        _event: &ScrollWheelEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.cursor.tracker.is_mounted() {
            self.schedule_cursor_frame(window, cx);
        }
    }

    pub fn handle_mouse_down(
        &mut self,
        _event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let now = Instant::now();
        let Some(deadline) = self.cursor.tracker.on_pointer_down(now) else {
            return;
        };

        let delay = deadline.saturating_duration_since(now);
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            this.update(cx, |this, cx| {
                if this.cursor.tracker.expire_click(Instant::now()) {
                    cx.notify();
                }
            })
            .ok();
        })
        .detach();

        self.schedule_cursor_frame(window, cx);
        cx.notify();
    }

    /// Request a single next-frame flush; repeated calls within a frame are no-ops.
    pub fn schedule_cursor_frame(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.cursor.frame_requested {
            return;
        }
        self.cursor.frame_requested = true;

        let this = cx.weak_entity();
        window.on_next_frame(move |window, cx| {
            this.update(cx, |this, cx| this.flush_cursor_frame(window, cx))
                .ok();
        });
    }

    fn flush_cursor_frame(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        profile_scope!("flush_cursor_frame");

        self.cursor.frame_requested = false;
        let now = Instant::now();
        let outcome = {
            let regions = self.cursor.regions.lock();
            self.cursor.tracker.flush_frame(now, Some(&*regions))
        };

        if !self.cursor.tracker.is_mounted() {
            self.cursor.frame_stats.end_run();
            return;
        }

        if outcome.needs_repaint() {
            self.cursor.frame_stats.record_frame(now);
            cx.notify();
        }

        if outcome.needs_another_frame {
            self.schedule_cursor_frame(window, cx);
        } else {
            self.cursor.frame_stats.end_run();
        }
    }

    /// Mount or unmount the tracker from the preference and the viewport width.
    pub(super) fn sync_cursor_mount(&mut self) {
        let wanted = self.preferences.custom_cursor
            && self.system.viewport_width >= CURSOR_MIN_VIEWPORT_WIDTH;
        if wanted {
            self.cursor.tracker.mount();
        } else if self.cursor.tracker.unmount() {
            self.cursor.frame_stats.end_run();
        }
    }

    /// Track window resizes for the cursor breakpoint.
    pub fn observe_viewport(&mut self, window: &Window) {
        let width = f32::from(window.viewport_size().width);
        if (width - self.system.viewport_width).abs() > f32::EPSILON {
            self.system.viewport_width = width;
            self.sync_cursor_mount();
        }
    }
}
