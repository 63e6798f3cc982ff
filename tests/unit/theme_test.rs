//! Unit tests for theme derivation.

use homeroom::theme::contrast::meets_aaa;
use homeroom::theme::{DarkPalette, HighContrastPalette, LightPalette};
use homeroom::{derive_theme, ColorScheme};

const SCHEMES: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

#[test]
fn test_derivation_is_deterministic_for_all_inputs() {
    for scheme in SCHEMES {
        for high_contrast in [false, true] {
            let first = derive_theme(scheme, high_contrast);
            let second = derive_theme(scheme, high_contrast);
            assert_eq!(first, second, "{scheme} / high_contrast={high_contrast}");
        }
    }
}

#[test]
fn test_high_contrast_overrides_regardless_of_scheme() {
    for scheme in SCHEMES {
        let tokens = derive_theme(scheme, true);
        assert_eq!(tokens.background, HighContrastPalette::BACKGROUND);
        assert_eq!(tokens.text, HighContrastPalette::TEXT);
        assert_eq!(tokens.border, HighContrastPalette::BORDER);
    }
}

#[test]
fn test_normal_contrast_uses_selected_palette() {
    let light = derive_theme(ColorScheme::Light, false);
    assert_eq!(light.background, LightPalette::BACKGROUND);
    assert_eq!(light.text, LightPalette::TEXT);
    assert_eq!(light.border, LightPalette::BORDER);

    let dark = derive_theme(ColorScheme::Dark, false);
    assert_eq!(dark.background, DarkPalette::BACKGROUND);
    assert_eq!(dark.text, DarkPalette::TEXT);
    assert_eq!(dark.border, DarkPalette::BORDER);
}

#[test]
fn test_status_colors_survive_high_contrast() {
    for scheme in SCHEMES {
        let normal = derive_theme(scheme, false);
        let high = derive_theme(scheme, true);
        assert_eq!(normal.danger, high.danger);
        assert_eq!(normal.warning, high.warning);
        assert_eq!(normal.success, high.success);
    }
}

#[test]
fn test_base_palettes_are_readable() {
    for scheme in SCHEMES {
        let tokens = derive_theme(scheme, false);
        assert!(
            homeroom::theme::contrast::meets_aa(tokens.text, tokens.background),
            "{scheme} text should meet AA"
        );
    }
    assert!(meets_aaa(
        HighContrastPalette::TINT,
        HighContrastPalette::BACKGROUND
    ));
}
