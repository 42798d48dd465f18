//! Localized labels for the header and section headings.

use crate::preferences::{ColorScheme, Language};

/// Page sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Education,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::About,
        Self::Skills,
        Self::Education,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// Stable identifier, also used for element ids
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::About, Language::En) => "About",
            (Self::About, Language::Vi) => "Giới thiệu",
            (Self::Skills, Language::En) => "Skills",
            (Self::Skills, Language::Vi) => "Kỹ năng",
            (Self::Education, Language::En) => "Education",
            (Self::Education, Language::Vi) => "Học vấn",
            (Self::Experience, Language::En) => "Experience",
            (Self::Experience, Language::Vi) => "Kinh nghiệm",
            (Self::Projects, Language::En) => "Projects",
            (Self::Projects, Language::Vi) => "Dự án",
            (Self::Contact, Language::En) => "Contact",
            (Self::Contact, Language::Vi) => "Liên hệ",
        }
    }
}

/// Label of the language toggle: shows the language it switches to.
pub fn language_toggle_label(current: Language) -> &'static str {
    match current.toggled() {
        Language::En => "EN",
        Language::Vi => "VI",
    }
}

/// Label of the theme toggle: shows the scheme it switches to.
pub fn theme_toggle_label(current: ColorScheme, language: Language) -> &'static str {
    match (current.toggled(), language) {
        (ColorScheme::Light, Language::En) => "Light",
        (ColorScheme::Light, Language::Vi) => "Sáng",
        (ColorScheme::Dark, Language::En) => "Dark",
        (ColorScheme::Dark, Language::Vi) => "Tối",
    }
}

pub fn cursor_toggle_label(enabled: bool, language: Language) -> &'static str {
    match (enabled, language) {
        (true, Language::En) => "Cursor: on",
        (true, Language::Vi) => "Con trỏ: bật",
        (false, Language::En) => "Cursor: off",
        (false, Language::Vi) => "Con trỏ: tắt",
    }
}
