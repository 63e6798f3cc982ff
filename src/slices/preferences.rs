//! Accessibility and language preferences.

use serde::{Deserialize, Serialize};

use super::settings::ProfileSettings;
use crate::i18n::Language;

/// Large font, voice narration, and app language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesSlice {
    #[serde(default)]
    large_font: bool,
    #[serde(default)]
    voice_narration: bool,
    #[serde(default)]
    language: Language,
}

impl PreferencesSlice {
    pub fn large_font(&self) -> bool {
        self.large_font
    }

    pub fn voice_narration(&self) -> bool {
        self.voice_narration
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_large_font(&mut self, enabled: bool) {
        self.large_font = enabled;
    }

    pub fn toggle_large_font(&mut self) {
        self.large_font = !self.large_font;
    }

    pub fn set_voice_narration(&mut self, enabled: bool) {
        self.voice_narration = enabled;
    }

    pub fn toggle_voice_narration(&mut self) {
        self.voice_narration = !self.voice_narration;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Overwrite every field from a profile record, using the default for any
    /// field the record omits. Unrecognised language codes count as omitted.
    pub fn hydrate_from_profile(&mut self, profile: Option<&ProfileSettings>) {
        let defaults = Self::default();
        let Some(profile) = profile else {
            *self = defaults;
            return;
        };

        self.large_font = profile.large_font.unwrap_or(defaults.large_font);
        self.voice_narration = profile.voice_narration.unwrap_or(defaults.voice_narration);
        self.language = profile
            .language
            .as_deref()
            .and_then(Language::from_id)
            .unwrap_or(defaults.language);
    }
}
