//! Wallpaper Text - text handling for quote wallpapers
//!
//! This crate provides:
//! - The static font catalog and script-based font lists
//! - Font loading and matching (fontdb)
//! - Text shaping (rustybuzz - HarfBuzz port) for measurement
//! - Greedy word wrapping
//! - Glyph outlines as tiny-skia paths

pub mod font;
pub mod shaping;
pub mod layout;
pub mod render;
pub mod measure;

pub use font::{
    FontCatalogEntry, FontCategory, FontDatabase, FontFace, FontId, FontQuery, FontStyle,
    FontWeight, VerticalMetrics, FONT_CATALOG, find_font, fonts_for_text,
};
pub use shaping::{Script, ShapedGlyph, ShapedRun, TextShaper, detect_script};
pub use layout::{TextAlign, wrap_words};
pub use render::GlyphOutliner;
pub use measure::{ApproximateMetrics, TextMeasure, TextStyle};

/// Text handling error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("Font loading failed: {0}")]
    FontLoading(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
