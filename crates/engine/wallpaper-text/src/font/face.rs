//! Font face with parsed metrics

use ttf_parser::Face;
use super::FontId;

/// Vertical font metrics in pixels for one font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    /// Distance from baseline to the top of the em box (positive)
    pub ascent: f32,
    /// Distance from baseline to the bottom of the em box (negative)
    pub descent: f32,
}

impl VerticalMetrics {
    /// Offset from the em-box middle down to the alphabetic baseline.
    ///
    /// Text anchored at `y` by its middle has its baseline at `y + offset`.
    pub fn middle_to_baseline(&self) -> f32 {
        (self.ascent + self.descent) / 2.0
    }
}

/// Parsed font face with metrics
pub struct FontFace<'a> {
    face: Face<'a>,
    /// Font ID in database
    pub id: FontId,
}

impl<'a> FontFace<'a> {
    /// Parse a font face from data
    pub fn parse(data: &'a [u8], index: u32, id: FontId) -> Option<Self> {
        Face::parse(data, index).ok().map(|face| Self { face, id })
    }

    /// Units per em
    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// Ascender (above baseline)
    pub fn ascender(&self) -> i16 {
        self.face.ascender()
    }

    /// Descender (below baseline, usually negative)
    pub fn descender(&self) -> i16 {
        self.face.descender()
    }

    /// Scaled vertical metrics
    pub fn vertical_metrics(&self, font_size: f32) -> VerticalMetrics {
        let scale = font_size / self.units_per_em().max(1) as f32;
        VerticalMetrics {
            ascent: self.ascender() as f32 * scale,
            descent: self.descender() as f32 * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_to_baseline() {
        let metrics = VerticalMetrics { ascent: 80.0, descent: -20.0 };
        assert_eq!(metrics.middle_to_baseline(), 30.0);
    }
}
