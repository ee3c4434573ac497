//! Glyph outlines as tiny-skia paths
//!
//! Glyphs are not rasterized into bitmaps; the outlines of a whole shaped
//! run are collected into one path that the canvas fills with anti-aliasing.

use ttf_parser::{Face, GlyphId, OutlineBuilder};
use crate::shaping::ShapedRun;

/// Converts shaped runs into fillable paths
pub struct GlyphOutliner<'a> {
    face: Face<'a>,
}

impl<'a> GlyphOutliner<'a> {
    /// Parse the face the run was shaped with
    pub fn new(font_data: &'a [u8], face_index: u32) -> Option<Self> {
        Face::parse(font_data, face_index).ok().map(|face| Self { face })
    }

    /// Build a path for the run with its pen origin at (`x`, `baseline`)
    pub fn run_path(&self, run: &ShapedRun, x: f32, baseline: f32) -> Option<tiny_skia::Path> {
        let scale = run.scale();
        let mut builder = PathBuilder::new(scale);

        for glyph in run.positioned_glyphs() {
            builder.origin_x = x + glyph.x;
            builder.origin_y = baseline + glyph.y;
            // Glyphs without outlines (spaces) are fine to skip
            let _ = self.face.outline_glyph(GlyphId(glyph.glyph_id), &mut builder);
        }

        builder.finish()
    }
}

/// Path builder that converts ttf-parser outlines to tiny-skia paths
struct PathBuilder {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl PathBuilder {
    fn new(scale: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    fn transform_x(&self, x: f32) -> f32 {
        self.origin_x + x * self.scale
    }

    fn transform_y(&self, y: f32) -> f32 {
        self.origin_y - y * self.scale  // Flip Y axis
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for PathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.transform_x(x), self.transform_y(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.transform_x(x), self.transform_y(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.transform_x(x1), self.transform_y(y1),
            self.transform_x(x2), self.transform_y(y2),
            self.transform_x(x), self.transform_y(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
