//! Section list rendering - one scrollable block per page section.
//!
//! Section copy is not part of this application; each block renders its
//! localized heading, which opts into the hover variant.

use super::interactive::{heading_target, hit_region};
use crate::app::Portfolio;
use crate::cursor::SharedRegions;
use crate::i18n::Section;
use crate::preferences::Preferences;
use gpui::*;
use gpui_component::ActiveTheme as _;

fn render_section(
    section: Section,
    preferences: &Preferences,
    regions: &SharedRegions,
    cx: &Context<Portfolio>,
) -> impl IntoElement {
    let border = cx.theme().border;
    let accent = cx.theme().primary;

    div()
        .id(SharedString::from(format!("section-{}", section.id())))
        .flex()
        .flex_col()
        .min_h(px(480.0))
        .px(px(48.0))
        .py(px(64.0))
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .relative()
                .text_size(px(32.0))
                .font_weight(FontWeight::BOLD)
                .hover(|s| s.text_color(accent))
                .child(section.label(preferences.language))
                .child(hit_region(heading_target(section), regions)),
        )
}

pub fn render_sections(
    preferences: &Preferences,
    regions: &SharedRegions,
    scroll: &ScrollHandle,
    cx: &Context<Portfolio>,
) -> impl IntoElement {
    div()
        .id("sections")
        .flex_1()
        .overflow_y_scroll()
        .track_scroll(scroll)
        .children(
            Section::ALL
                .into_iter()
                .map(|section| render_section(section, preferences, regions, cx)),
        )
}
