//! Header rendering - localized navigation and preference toggles

use super::interactive::{CURSOR_TOGGLE, LANGUAGE_TOGGLE, THEME_TOGGLE, hit_region, nav_target};
use crate::app::Portfolio;
use crate::constants::HEADER_HEIGHT;
use crate::cursor::{SharedRegions, TargetId};
use crate::i18n::{Section, cursor_toggle_label, language_toggle_label, theme_toggle_label};
use crate::preferences::Preferences;
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;

/// Render a pill-shaped header button that participates in hover delegation
fn render_header_button(
    id: impl Into<ElementId>,
    target: TargetId,
    label: &'static str,
    regions: &SharedRegions,
    cx: &Context<Portfolio>,
) -> Stateful<Div> {
    let fg = cx.theme().muted_foreground;
    let hover_fg = cx.theme().foreground;
    let hover_bg = cx.theme().muted;

    div()
        .id(id)
        .relative()
        .px(px(12.0))
        .py(px(6.0))
        .rounded(px(6.0))
        .text_size(px(14.0))
        .font_weight(FontWeight::MEDIUM)
        .text_color(fg)
        .hover(|s| s.text_color(hover_fg).bg(hover_bg))
        .cursor_pointer()
        .child(label)
        .child(hit_region(target, regions))
}

pub fn render_header(
    preferences: &Preferences,
    active_section: Option<Section>,
    regions: &SharedRegions,
    cx: &Context<Portfolio>,
) -> impl IntoElement {
    let border = cx.theme().border;
    let accent = cx.theme().primary;
    let language = preferences.language;

    let nav = Section::ALL.into_iter().map(|section| {
        render_header_button(
            SharedString::from(format!("nav-{}", section.id())),
            nav_target(section),
            section.label(language),
            regions,
            cx,
        )
        .when(active_section == Some(section), |button| button.text_color(accent))
        .on_click(cx.listener(move |this, _, _, cx| {
            this.scroll_to_section(section, cx);
        }))
    });

    div()
        .id("header")
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .h(px(HEADER_HEIGHT))
        .px(px(32.0))
        .border_b_1()
        .border_color(border)
        .child(div().flex().flex_row().gap(px(4.0)).children(nav))
        .child(
            div()
                .flex()
                .flex_row()
                .gap(px(4.0))
                .child(
                    render_header_button(
                        "toggle-theme",
                        THEME_TOGGLE,
                        theme_toggle_label(preferences.theme, language),
                        regions,
                        cx,
                    )
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.toggle_theme(window, cx);
                    })),
                )
                .child(
                    render_header_button(
                        "toggle-language",
                        LANGUAGE_TOGGLE,
                        language_toggle_label(language),
                        regions,
                        cx,
                    )
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.toggle_language(cx);
                    })),
                )
                .child(
                    render_header_button(
                        "toggle-cursor",
                        CURSOR_TOGGLE,
                        cursor_toggle_label(preferences.custom_cursor, language),
                        regions,
                        cx,
                    )
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.toggle_custom_cursor(cx);
                    })),
                ),
        )
}
