//! Wallpaper configuration model
//!
//! A configuration is an immutable snapshot of every user choice. Catalog
//! keys are kept as strings; the resolver maps unknown keys to defaults.

use serde::{Deserialize, Serialize};
use crate::Color;
use crate::catalog::find_resolution;
use crate::decoration::DecorationStyle;

/// Vertical placement strategy for quote and attribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutMode {
    /// Quote centered, attribution anchored bottom-right
    #[default]
    Traditional,
    /// Attribution directly below the quote, whole block centered
    Centered,
}

impl LayoutMode {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Centered => "centered",
        }
    }

    /// Anything but "centered" is the traditional layout
    pub fn from_key(key: &str) -> Self {
        match key {
            "centered" => Self::Centered,
            _ => Self::Traditional,
        }
    }
}

impl From<String> for LayoutMode {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<LayoutMode> for String {
    fn from(mode: LayoutMode) -> Self {
        mode.key().to_string()
    }
}

/// Every user choice that affects the rendered wallpaper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WallpaperConfig {
    pub quote: String,
    pub author: String,
    pub source: String,
    /// Font catalog name
    pub font: String,
    /// Resolution preset key, e.g. "1920x1080"
    pub resolution: String,
    pub decoration_style: DecorationStyle,
    pub text_color: Color,
    /// Highlight name ("none", "yellow", ...) or its hex value
    pub highlight_color: String,
    pub underline: bool,
    /// Background key, e.g. "black"
    pub background: String,
    /// Particle density in percent; values above 100 are treated as 100
    pub particle_density: u32,
    pub layout_mode: LayoutMode,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            quote: "The only way to do great work is to love what you do.".to_string(),
            author: "Steve Jobs".to_string(),
            source: String::new(),
            font: "Playfair Display".to_string(),
            resolution: "1920x1080".to_string(),
            decoration_style: DecorationStyle::Particles,
            text_color: Color::WHITE,
            highlight_color: "none".to_string(),
            underline: false,
            background: "black".to_string(),
            particle_density: 50,
            layout_mode: LayoutMode::Traditional,
        }
    }
}

impl WallpaperConfig {
    /// Quote text with its enclosing quotation marks, as it is wrapped and drawn
    pub fn quoted_text(&self) -> String {
        format!("\u{201C}{}\u{201D}", self.quote)
    }

    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }

    pub fn has_source(&self) -> bool {
        !self.source.is_empty()
    }

    /// Whether switching from `previous` requires a new particle set
    pub fn reseeds_particles_from(&self, previous: &WallpaperConfig) -> bool {
        self.decoration_style == DecorationStyle::Particles
            && (previous.decoration_style != DecorationStyle::Particles
                || previous.particle_density != self.particle_density
                || find_resolution(&previous.resolution) != find_resolution(&self.resolution))
    }
}
