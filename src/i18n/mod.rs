//! App language selection.
//!
//! Only the language code is stored; translated strings live with the screens.

use serde::{Deserialize, Serialize};

/// Supported app languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Get the language code.
    pub fn id(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Portuguese => "pt",
            Language::Vietnamese => "vi",
            Language::Chinese => "zh",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::Portuguese => "Português",
            Language::Vietnamese => "Tiếng Việt",
            Language::Chinese => "中文",
        }
    }

    /// Parse from a language code or locale tag ("es", "es-MX", "zh_Hant").
    pub fn from_id(id: &str) -> Option<Self> {
        let prefix = id
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();

        Self::all().iter().copied().find(|lang| lang.id() == prefix)
    }

    /// Get all supported languages.
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Spanish,
            Language::French,
            Language::Portuguese,
            Language::Vietnamese,
            Language::Chinese,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Detect the system locale and return the best matching language.
pub fn detect_system_locale() -> Language {
    sys_locale::get_locale()
        .and_then(|locale| Language::from_id(&locale))
        .unwrap_or_default()
}
