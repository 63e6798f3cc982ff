//! Fixed base palettes and the high-contrast override set.
//!
//! The light and dark palettes are the only color sources for derived themes.
//! [`HighContrastPalette`] only carries the tokens it replaces; status colors
//! are intentionally absent so warnings stay recognisable in every mode.

use egui::Color32;

use super::ThemeTokens;

/// Light palette colors.
pub struct LightPalette;

impl LightPalette {
    /// Screen background
    pub const BACKGROUND: Color32 = Color32::from_rgb(248, 249, 251);
    /// Panel and card background
    pub const SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
    /// Primary text
    pub const TEXT: Color32 = Color32::from_rgb(17, 24, 39);
    /// Subdued text
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 114, 128);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(229, 231, 235);
    /// Accent color (blue)
    pub const TINT: Color32 = Color32::from_rgb(37, 99, 235);
    /// Default icon color
    pub const ICON: Color32 = Color32::from_rgb(107, 114, 128);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
    /// Warning color (amber)
    pub const WARNING: Color32 = Color32::from_rgb(217, 119, 6);
    /// Urgent / emergency color (red)
    pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
    /// Informational color (sky)
    pub const INFO: Color32 = Color32::from_rgb(2, 132, 199);

    pub const fn tokens() -> ThemeTokens {
        ThemeTokens {
            background: Self::BACKGROUND,
            surface: Self::SURFACE,
            text: Self::TEXT,
            text_muted: Self::TEXT_MUTED,
            border: Self::BORDER,
            tint: Self::TINT,
            icon: Self::ICON,
            success: Self::SUCCESS,
            warning: Self::WARNING,
            danger: Self::DANGER,
            info: Self::INFO,
        }
    }
}

/// Dark palette colors.
pub struct DarkPalette;

impl DarkPalette {
    /// Screen background
    pub const BACKGROUND: Color32 = Color32::from_rgb(15, 17, 21);
    /// Panel and card background
    pub const SURFACE: Color32 = Color32::from_rgb(28, 31, 38);
    /// Primary text
    pub const TEXT: Color32 = Color32::from_rgb(236, 237, 238);
    /// Subdued text
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(155, 161, 166);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(55, 60, 70);
    /// Accent color (blue)
    pub const TINT: Color32 = Color32::from_rgb(96, 165, 250);
    /// Default icon color
    pub const ICON: Color32 = Color32::from_rgb(155, 161, 166);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    /// Warning color (amber)
    pub const WARNING: Color32 = Color32::from_rgb(245, 158, 11);
    /// Urgent / emergency color (red)
    pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);
    /// Informational color (sky)
    pub const INFO: Color32 = Color32::from_rgb(56, 189, 248);

    pub const fn tokens() -> ThemeTokens {
        ThemeTokens {
            background: Self::BACKGROUND,
            surface: Self::SURFACE,
            text: Self::TEXT,
            text_muted: Self::TEXT_MUTED,
            border: Self::BORDER,
            tint: Self::TINT,
            icon: Self::ICON,
            success: Self::SUCCESS,
            warning: Self::WARNING,
            danger: Self::DANGER,
            info: Self::INFO,
        }
    }
}

/// High contrast overrides meeting WCAG AAA (7:1) against their backgrounds.
pub struct HighContrastPalette;

impl HighContrastPalette {
    pub const BACKGROUND: Color32 = Color32::BLACK;
    pub const SURFACE: Color32 = Color32::from_rgb(20, 20, 20);
    pub const TEXT: Color32 = Color32::WHITE;
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(220, 220, 220);
    pub const BORDER: Color32 = Color32::WHITE;
    pub const TINT: Color32 = Color32::from_rgb(0, 200, 255); // Cyan

    /// Replace the contrast-sensitive tokens of `base`, keeping icon and status colors.
    pub const fn apply(base: ThemeTokens) -> ThemeTokens {
        ThemeTokens {
            background: Self::BACKGROUND,
            surface: Self::SURFACE,
            text: Self::TEXT,
            text_muted: Self::TEXT_MUTED,
            border: Self::BORDER,
            tint: Self::TINT,
            ..base
        }
    }
}
