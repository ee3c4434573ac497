//! Text shaper using rustybuzz

use rustybuzz::{Face, UnicodeBuffer, shape};
use crate::font::{FontDatabase, FontId};
use crate::{Result, TextError};
use super::{Script, ShapedGlyph, ShapedRun};

/// Text shaper using HarfBuzz (via rustybuzz)
#[derive(Debug, Clone, Copy, Default)]
pub struct TextShaper {
    /// Script hint for shaping; guessed from the text when unset
    script: Option<Script>,
}

impl TextShaper {
    /// Create a new text shaper
    pub fn new() -> Self {
        Self { script: None }
    }

    /// Set script (for automatic feature selection)
    pub fn script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    /// Shape text using a font from the database
    pub fn shape(
        &self,
        db: &FontDatabase,
        font_id: FontId,
        text: &str,
        font_size: f32,
    ) -> Result<ShapedRun> {
        db.with_face_data(font_id, |data, index| {
            self.shape_with_data(data, index, text, font_size)
        }).ok_or_else(|| TextError::FontNotFound("Font not found in database".into()))?
    }

    /// Shape text with raw font data
    pub fn shape_with_data(
        &self,
        font_data: &[u8],
        face_index: u32,
        text: &str,
        font_size: f32,
    ) -> Result<ShapedRun> {
        let face = Face::from_slice(font_data, face_index)
            .ok_or_else(|| TextError::FontParsing("Failed to parse font".into()))?;

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(rustybuzz::Direction::LeftToRight);
        if let Some(script) = self.script {
            buffer.set_script(script.into());
        } else {
            buffer.guess_segment_properties();
        }

        let output = shape(&face, &[], buffer);

        let glyphs: Vec<ShapedGlyph> = output.glyph_infos().iter()
            .zip(output.glyph_positions().iter())
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
                x_advance: pos.x_advance,
                cluster: info.cluster,
            })
            .collect();

        Ok(ShapedRun::new(glyphs, font_size, face.units_per_em() as u16))
    }
}
