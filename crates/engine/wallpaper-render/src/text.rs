//! Text painting
//!
//! Measures and draws single lines through wallpaper-text. Lines are shaped
//! with rustybuzz and filled as glyph outline paths; when no face matches,
//! measurement falls back to approximate metrics and glyphs are skipped.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use wallpaper_text::{
    ApproximateMetrics, FontDatabase, FontFace, FontId, FontQuery, GlyphOutliner, TextAlign,
    TextMeasure, TextShaper, TextStyle, VerticalMetrics,
};
use crate::{Canvas, Color};

/// Text measurement and drawing backed by a font database
pub struct TextPainter {
    fonts: FontDatabase,
    shaper: TextShaper,
    fallback: ApproximateMetrics,
    /// Matched face per (family, weight)
    matches: RefCell<HashMap<(&'static str, u16), Option<FontId>>>,
    warned: Cell<bool>,
}

impl TextPainter {
    /// Painter without fonts; everything is measured approximately
    pub fn new() -> Self {
        Self::with_fonts(FontDatabase::new())
    }

    pub fn with_fonts(fonts: FontDatabase) -> Self {
        Self {
            fonts,
            shaper: TextShaper::new(),
            fallback: ApproximateMetrics::default(),
            matches: RefCell::new(HashMap::new()),
            warned: Cell::new(false),
        }
    }

    /// Replace the font database once fonts finished loading
    pub fn set_fonts(&mut self, fonts: FontDatabase) {
        self.fonts = fonts;
        self.matches.get_mut().clear();
        self.warned.set(false);
    }

    pub fn fonts(&self) -> &FontDatabase {
        &self.fonts
    }

    /// Face used for `style`, trying the family then the UI fallback stack
    pub fn font_for(&self, style: TextStyle) -> Option<FontId> {
        let key = (style.family, style.weight.0);
        if let Some(found) = self.matches.borrow().get(&key) {
            return *found;
        }

        let query = FontQuery::with_fallbacks(style.family).weight(style.weight);
        let found = self.fonts.query(&query);
        match found {
            Some(id) => tracing::debug!(
                family = style.family,
                weight = style.weight.0,
                matched = self.fonts.family_name(id).unwrap_or("?"),
                "matched font"
            ),
            None if !self.warned.replace(true) => tracing::warn!(
                family = style.family,
                "no usable font face, using approximate metrics"
            ),
            None => {}
        }
        self.matches.borrow_mut().insert(key, found);
        found
    }

    /// Draw one line anchored at `anchor_x` (per `align`) and vertically at
    /// the middle of its em box. Returns the measured line width.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        anchor_x: f32,
        middle_y: f32,
        style: TextStyle,
        align: TextAlign,
        color: Color,
    ) -> f32 {
        let width = self.text_width(text, style);
        if text.is_empty() {
            return width;
        }

        let x = align.line_start(anchor_x, width);
        let baseline = middle_y + self.vertical_metrics(style).middle_to_baseline();
        let Some(font_id) = self.font_for(style) else {
            return width;
        };

        let path = self.fonts.with_face_data(font_id, |data, index| {
            let run = self.shaper.shape_with_data(data, index, text, style.size).ok()?;
            GlyphOutliner::new(data, index)?.run_path(&run, x, baseline)
        });
        if let Some(path) = path.flatten() {
            canvas.fill_path(&path, color);
        }
        width
    }
}

impl Default for TextPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for TextPainter {
    fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        self.font_for(style)
            .and_then(|id| self.shaper.shape(&self.fonts, id, text, style.size).ok())
            .map(|run| run.width())
            .unwrap_or_else(|| self.fallback.text_width(text, style))
    }

    fn vertical_metrics(&self, style: TextStyle) -> VerticalMetrics {
        self.font_for(style)
            .and_then(|id| {
                self.fonts.with_face_data(id, |data, index| {
                    FontFace::parse(data, index, id).map(|face| face.vertical_metrics(style.size))
                })
            })
            .flatten()
            .unwrap_or_else(|| self.fallback.vertical_metrics(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallpaper_text::FontWeight;

    fn style(size: f32) -> TextStyle {
        TextStyle::new("Inter", size, FontWeight::SEMI_BOLD)
    }

    #[test]
    fn test_empty_database_measures_approximately() {
        let painter = TextPainter::new();
        assert!(painter.font_for(style(20.0)).is_none());
        assert_eq!(painter.text_width("Hello", style(20.0)), 50.0);
        assert_eq!(painter.vertical_metrics(style(10.0)).ascent, 8.0);
    }

    #[test]
    fn test_draw_without_fonts_leaves_canvas() {
        let painter = TextPainter::new();
        let mut canvas = Canvas::new(100, 40).unwrap();
        canvas.clear(Color::BLACK);
        let width = painter.draw(
            &mut canvas, "Hi", 50.0, 20.0, style(20.0), TextAlign::Center, Color::WHITE,
        );
        assert_eq!(width, 20.0);
        assert!(canvas.to_rgba().chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_draw_with_system_fonts_marks_pixels() {
        let painter = TextPainter::with_fonts(FontDatabase::with_system_fonts());
        if painter.font_for(style(40.0)).is_none() {
            // Skip on systems without fonts
            return;
        }
        let mut canvas = Canvas::new(200, 80).unwrap();
        canvas.clear(Color::BLACK);
        painter.draw(&mut canvas, "Hello", 100.0, 40.0, style(40.0), TextAlign::Center, Color::WHITE);
        assert!(canvas.to_rgba().chunks(4).any(|p| p[0] > 128));
    }
}
