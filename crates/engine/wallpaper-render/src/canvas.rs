//! Canvas - pixel buffer backed by a tiny-skia Pixmap

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use crate::{Color, RenderError, Result, StrokeStyle};

/// Cubic Bezier control distance for a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Pixel canvas
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a new transparent canvas; `None` for zero dimensions
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill the whole canvas with one color, replacing every pixel
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia(color));
    }

    /// Fill a rectangle (source-over)
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        if let Some(rect) = Rect::from_xywh(x, y, width, height) {
            self.pixmap.fill_rect(rect, &paint_for(color), Transform::identity(), None);
        }
    }

    /// Fill a rectangle with rounded corners
    pub fn fill_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: Color,
    ) {
        if let Some(path) = rounded_rect_path(x, y, width, height, radius) {
            self.fill_path(&path, color);
        }
    }

    /// Fill a circle
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
            self.fill_path(&path, color);
        }
    }

    /// Fill an arbitrary path (non-zero winding)
    pub fn fill_path(&mut self, path: &tiny_skia::Path, color: Color) {
        self.pixmap.fill_path(path, &paint_for(color), FillRule::Winding, Transform::identity(), None);
    }

    /// Stroke a straight line
    pub fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, style: &StrokeStyle) {
        let mut builder = PathBuilder::new();
        builder.move_to(x0, y0);
        builder.line_to(x1, y1);
        let Some(path) = builder.finish() else { return };

        let stroke = Stroke {
            width: style.width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(&path, &paint_for(style.color), &stroke, Transform::identity(), None);
    }

    /// Get a pixel color (un-premultiplied); `None` outside the canvas
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Pixel data as un-premultiplied RGBA bytes
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixmap.pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Encode as a lossless PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap.encode_png().map_err(|e| RenderError::Encode(e.to_string()))
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Rounded rectangle outline; the radius is clamped to half the shorter side
fn rounded_rect_path(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Option<tiny_skia::Path> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let r = radius.max(0.0).min(width / 2.0).min(height / 2.0);
    if r == 0.0 {
        return Rect::from_xywh(x, y, width, height).map(PathBuilder::from_rect);
    }

    let k = r * KAPPA;
    let (right, bottom) = (x + width, y + height);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}
