//! Layout resolution
//!
//! Turns catalog keys into pixel dimensions and concrete colors.

use crate::catalog::{find_background, find_highlight, find_resolution, is_light_background};
use crate::{Color, WallpaperConfig};

/// Pixel-level facts derived from a configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLayout {
    pub width: u32,
    pub height: u32,
    /// Key of the resolution preset actually used
    pub resolution_key: &'static str,
    pub background: Color,
    /// Black on light backgrounds, otherwise the configured text color
    pub text_color: Color,
    /// Highlight fill behind quote lines, if any
    pub highlight: Option<Color>,
    pub is_light: bool,
}

impl ResolvedLayout {
    /// Color for decorations that must contrast with the background
    pub fn foreground(&self) -> Color {
        if self.is_light { Color::BLACK } else { Color::WHITE }
    }
}

/// Resolve a configuration; never fails
pub fn resolve(config: &WallpaperConfig) -> ResolvedLayout {
    let resolution = find_resolution(&config.resolution);
    let background = find_background(&config.background)
        .map(|b| b.color)
        .unwrap_or(Color::BLACK);
    let is_light = is_light_background(background);

    ResolvedLayout {
        width: resolution.width,
        height: resolution.height,
        resolution_key: resolution.key,
        background,
        text_color: if is_light { Color::BLACK } else { config.text_color },
        highlight: find_highlight(&config.highlight_color).color,
        is_light,
    }
}
