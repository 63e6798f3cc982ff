//! Theme derivation.
//!
//! A theme is never authored directly: [`derive_theme`] computes the full
//! token set from the device color scheme and the high-contrast toggle, and
//! the result is recomputed whenever either input changes.

pub mod contrast;
pub mod palette;

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

pub use palette::{DarkPalette, HighContrastPalette, LightPalette};

/// Device color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

/// Flat set of named color tokens consumed by screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeTokens {
    pub background: Color32,
    pub surface: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub tint: Color32,
    pub icon: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub info: Color32,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        derive_theme(ColorScheme::default(), false)
    }
}

/// Compute the token set for a color scheme and contrast mode.
pub fn derive_theme(scheme: ColorScheme, high_contrast: bool) -> ThemeTokens {
    let base = match scheme {
        ColorScheme::Light => LightPalette::tokens(),
        ColorScheme::Dark => DarkPalette::tokens(),
    };

    if high_contrast {
        HighContrastPalette::apply(base)
    } else {
        base
    }
}

impl ThemeTokens {
    /// Whether the background is dark enough to need light widgets.
    pub fn is_dark(&self) -> bool {
        contrast::contrast_ratio(self.background, Color32::BLACK)
            < contrast::contrast_ratio(self.background, Color32::WHITE)
    }

    /// Map the tokens onto egui visuals for hosts rendering with egui.
    pub fn visuals(&self) -> Visuals {
        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.window_fill = self.surface;
        visuals.panel_fill = self.surface;
        visuals.faint_bg_color = self.background;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.active.bg_fill = self.tint;

        visuals.selection.bg_fill = self.tint.linear_multiply(0.4);
        visuals.selection.stroke.color = self.tint;
        visuals.hyperlink_color = self.tint;
        visuals.warn_fg_color = self.warning;
        visuals.error_fg_color = self.danger;

        visuals.widgets.noninteractive.fg_stroke.color = self.text;
        visuals.widgets.inactive.fg_stroke.color = self.text_muted;
        visuals.widgets.hovered.fg_stroke.color = self.text;
        visuals.widgets.active.fg_stroke.color = self.background;

        visuals.widgets.noninteractive.bg_stroke.color = self.border;
        visuals.widgets.inactive.bg_stroke.color = self.border;

        visuals
    }
}
