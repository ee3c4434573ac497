//! Text measurement
//!
//! Wrapping and layout only need line widths and vertical metrics, so they
//! go through [`TextMeasure`]. Shaped measurement lives with the text painter;
//! [`ApproximateMetrics`] stands in when no usable font face was found.

use crate::font::{FontWeight, VerticalMetrics};

/// Font family, size and weight of one piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Requested family; generic fallbacks are appended on lookup
    pub family: &'static str,
    /// Font size in pixels
    pub size: f32,
    pub weight: FontWeight,
}

impl TextStyle {
    pub fn new(family: &'static str, size: f32, weight: FontWeight) -> Self {
        Self { family, size, weight }
    }
}

/// Measures text in a given style
pub trait TextMeasure {
    /// Advance width of `text` in pixels
    fn text_width(&self, text: &str, style: TextStyle) -> f32;

    /// Vertical metrics in pixels
    fn vertical_metrics(&self, style: TextStyle) -> VerticalMetrics;
}

/// Fixed-advance metrics used when fonts are unavailable.
///
/// Every character advances by `advance_em` of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMetrics {
    pub advance_em: f32,
    pub ascent_em: f32,
    pub descent_em: f32,
}

impl Default for ApproximateMetrics {
    fn default() -> Self {
        Self {
            advance_em: 0.5,
            ascent_em: 0.8,
            descent_em: -0.2,
        }
    }
}

impl TextMeasure for ApproximateMetrics {
    fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        text.chars().count() as f32 * self.advance_em * style.size
    }

    fn vertical_metrics(&self, style: TextStyle) -> VerticalMetrics {
        VerticalMetrics {
            ascent: self.ascent_em * style.size,
            descent: self.descent_em * style.size,
        }
    }
}
