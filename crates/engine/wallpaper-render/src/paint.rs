//! Paint styles

use crate::Color;

/// Stroke style for grid lines and underlines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl StrokeStyle {
    /// Create solid stroke
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Hairline stroke (1px)
    pub fn hairline(color: Color) -> Self {
        Self::solid(color, 1.0)
    }
}
