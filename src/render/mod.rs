//! Rendering - the page chrome and the cursor overlay.
//!
//! - `interactive` - Hit region registration for hover delegation
//! - `header` - Navigation and preference toggles
//! - `sections` - Scrollable section headings
//! - `cursor_overlay` - Ring, dot and trail markers

mod cursor_overlay;
mod header;
mod interactive;
mod sections;

pub use cursor_overlay::render_cursor_overlay;
pub use header::render_header;
pub use interactive::{
    CURSOR_TOGGLE, LANGUAGE_TOGGLE, THEME_TOGGLE, heading_target, hit_region, nav_target,
};
pub use sections::render_sections;

use crate::app::Portfolio;
use crate::profile_scope;
use gpui::*;
use gpui_component::ActiveTheme as _;

impl Render for Portfolio {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render_portfolio");

        self.observe_viewport(window);
        // Elements re-register their bounds during this frame's prepaint
        self.cursor.regions.lock().begin_frame();
        if self.cursor.tracker.is_mounted() {
            // Re-resolve hover against the new layout even if the pointer is still
            self.schedule_cursor_frame(window, cx);
        }

        let preferences = self.preferences;
        let background = cx.theme().background;
        let foreground = cx.theme().foreground;
        let overlay = self
            .cursor
            .tracker
            .is_mounted()
            .then(|| render_cursor_overlay(&self.cursor.tracker.frame()));

        div()
            .id("portfolio-root")
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(background)
            .text_color(foreground)
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_scroll_wheel(cx.listener(Self::handle_scroll_wheel))
            .capture_any_mouse_down(cx.listener(Self::handle_mouse_down))
            .child(render_header(
                &preferences,
                self.page.active_section,
                &self.cursor.regions,
                cx,
            ))
            .child(render_sections(
                &preferences,
                &self.cursor.regions,
                &self.page.scroll,
                cx,
            ))
            .children(overlay)
    }
}
