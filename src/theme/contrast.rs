//! WCAG contrast helpers used to check the theme palettes.
//!
//! https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio

use egui::Color32;

/// Minimum ratio for body text at level AA.
pub const AA_TEXT: f32 = 4.5;
/// Minimum ratio for body text at level AAA.
pub const AAA_TEXT: f32 = 7.0;

const CHANNEL_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Ratio of the lighter to the darker color's luminance, offset by 0.05.
///
/// Order of the arguments does not matter. Ranges from 1 (identical
/// luminance) to 21.
pub fn contrast_ratio(a: Color32, b: Color32) -> f32 {
    let (la, lb) = (luminance(a), luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

pub fn meets_aa(text: Color32, background: Color32) -> bool {
    contrast_ratio(text, background) >= AA_TEXT
}

pub fn meets_aaa(text: Color32, background: Color32) -> bool {
    contrast_ratio(text, background) >= AAA_TEXT
}

fn luminance(color: Color32) -> f32 {
    [color.r(), color.g(), color.b()]
        .into_iter()
        .map(srgb_to_linear)
        .zip(CHANNEL_WEIGHTS)
        .map(|(channel, weight)| channel * weight)
        .sum()
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = f32::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
