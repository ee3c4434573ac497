//! Static catalogs for resolutions, backgrounds and highlights
//!
//! Lookups never fail: unknown keys resolve to a catalog default.

use crate::Color;

/// A wallpaper size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub name: &'static str,
    /// Key used in configurations and export file names (`WxH`)
    pub key: &'static str,
    pub width: u32,
    pub height: u32,
}

/// A named background color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub name: &'static str,
    pub key: &'static str,
    pub color: Color,
}

/// A named translucent highlight color (`None` draws no highlight)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub name: &'static str,
    pub color: Option<Color>,
}

pub static RESOLUTIONS: [Resolution; 4] = [
    Resolution { name: "Full HD", key: "1920x1080", width: 1920, height: 1080 },
    Resolution { name: "4K UHD", key: "3840x2160", width: 3840, height: 2160 },
    Resolution { name: "Mobile", key: "1080x1920", width: 1080, height: 1920 },
    Resolution { name: "Square", key: "1080x1080", width: 1080, height: 1080 },
];

pub static BACKGROUNDS: [Background; 8] = [
    Background { name: "Pure Black", key: "black", color: Color::rgb(0x00, 0x00, 0x00) },
    Background { name: "Pure White", key: "white", color: Color::rgb(0xFF, 0xFF, 0xFF) },
    Background { name: "Charcoal", key: "charcoal", color: Color::rgb(0x1A, 0x1A, 0x1A) },
    Background { name: "Light Gray", key: "light-gray", color: Color::rgb(0xF5, 0xF5, 0xF5) },
    Background { name: "Navy", key: "navy", color: Color::rgb(0x1E, 0x3A, 0x8A) },
    Background { name: "Forest", key: "forest", color: Color::rgb(0x16, 0x65, 0x34) },
    Background { name: "Purple", key: "purple", color: Color::rgb(0x58, 0x1C, 0x87) },
    Background { name: "Burgundy", key: "burgundy", color: Color::rgb(0x7F, 0x1D, 0x1D) },
];

pub static HIGHLIGHTS: [Highlight; 6] = [
    Highlight { name: "None", color: None },
    Highlight { name: "Yellow", color: Some(Color::rgba(0xFF, 0xFF, 0x00, 0x80)) },
    Highlight { name: "Blue", color: Some(Color::rgba(0xAD, 0xD8, 0xE6, 0x80)) },
    Highlight { name: "Green", color: Some(Color::rgba(0x90, 0xEE, 0x90, 0x80)) },
    Highlight { name: "Pink", color: Some(Color::rgba(0xFF, 0xB6, 0xC1, 0x80)) },
    Highlight { name: "Orange", color: Some(Color::rgba(0xFF, 0xD7, 0x00, 0x80)) },
];

/// Backgrounds that force black text
const LIGHT_BACKGROUNDS: [Color; 2] = [Color::rgb(0xFF, 0xFF, 0xFF), Color::rgb(0xF5, 0xF5, 0xF5)];

/// Resolution preset by key, falling back to the first preset
pub fn find_resolution(key: &str) -> &'static Resolution {
    RESOLUTIONS.iter().find(|r| r.key == key).unwrap_or(&RESOLUTIONS[0])
}

/// Background by key, if known
pub fn find_background(key: &str) -> Option<&'static Background> {
    BACKGROUNDS.iter().find(|b| b.key == key)
}

/// Highlight by name (case-insensitive) or by its hex value, falling back to "None"
pub fn find_highlight(key: &str) -> &'static Highlight {
    let by_hex = Color::from_hex(key);
    HIGHLIGHTS
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(key) || (by_hex.is_some() && h.color == by_hex))
        .unwrap_or(&HIGHLIGHTS[0])
}

/// Whether a background color counts as light
pub fn is_light_background(color: Color) -> bool {
    LIGHT_BACKGROUNDS.contains(&color)
}
