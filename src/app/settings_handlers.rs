//! Settings-related methods - theme, language and cursor toggles, section navigation

use super::Portfolio;
use crate::i18n::Section;
use crate::preferences::ColorScheme;
use gpui::*;
use gpui_component::theme::{Theme, ThemeMode};

/// Switch the component library's theme to match `scheme`.
pub fn apply_color_scheme(scheme: ColorScheme, window: Option<&mut Window>, cx: &mut App) {
    let mode = if scheme.is_dark() {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    Theme::change(mode, window, cx);
}

impl Portfolio {
    pub fn toggle_theme(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.preferences.theme = self.preferences.theme.toggled();
        tracing::debug!(theme = ?self.preferences.theme, "Theme toggled");
        self.save_preferences();
        self.apply_preferences(window, cx);
    }

    pub fn toggle_language(&mut self, cx: &mut Context<Self>) {
        self.preferences.language = self.preferences.language.toggled();
        tracing::debug!(language = self.preferences.language.code(), "Language toggled");
        self.save_preferences();
        cx.notify();
    }

    pub fn toggle_custom_cursor(&mut self, cx: &mut Context<Self>) {
        self.preferences.custom_cursor = !self.preferences.custom_cursor;
        self.save_preferences();
        self.sync_cursor_mount();
        cx.notify();
    }

    /// Scroll the section list so `section` is visible.
    pub fn scroll_to_section(&mut self, section: Section, cx: &mut Context<Self>) {
        if let Some(index) = Section::ALL.iter().position(|s| *s == section) {
            self.page.scroll.scroll_to_item(index);
            self.page.active_section = Some(section);
            cx.notify();
        }
    }

    /// Persist preferences. Failures are logged; the in-memory value still applies.
    fn save_preferences(&self) {
        let Some(store) = self.system.store.as_ref() else {
            return;
        };
        if let Err(e) = store.save(&self.preferences) {
            tracing::error!("Failed to save preferences: {}", e);
        }
    }
}
