//! Theme inputs and the derived token set.

use serde::{Deserialize, Serialize};

use crate::theme::{derive_theme, ColorScheme, ThemeTokens};

/// Color scheme and contrast inputs plus the tokens derived from them.
///
/// `tokens` is never serialized. Call [`ThemeSlice::recompute`] after
/// deserializing so it matches the restored inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSlice {
    #[serde(default)]
    color_scheme: ColorScheme,
    #[serde(default)]
    high_contrast: bool,
    #[serde(skip)]
    tokens: ThemeTokens,
}

impl Default for ThemeSlice {
    fn default() -> Self {
        Self::new(ColorScheme::default(), false)
    }
}

impl ThemeSlice {
    pub fn new(color_scheme: ColorScheme, high_contrast: bool) -> Self {
        Self {
            color_scheme,
            high_contrast,
            tokens: derive_theme(color_scheme, high_contrast),
        }
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn high_contrast(&self) -> bool {
        self.high_contrast
    }

    pub fn tokens(&self) -> &ThemeTokens {
        &self.tokens
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = scheme;
        self.recompute();
    }

    pub fn set_high_contrast(&mut self, enabled: bool) {
        self.high_contrast = enabled;
        self.recompute();
    }

    pub fn toggle_high_contrast(&mut self) {
        self.set_high_contrast(!self.high_contrast);
    }

    /// Re-derive the tokens from the current inputs.
    pub fn recompute(&mut self) {
        self.tokens = derive_theme(self.color_scheme, self.high_contrast);
    }
}
