//! Line grid decoration

use crate::{Canvas, Color, StrokeStyle};

/// Distance between grid lines in pixels
pub const GRID_SPACING: u32 = 40;

/// Opacity of grid lines relative to the foreground color
const GRID_OPACITY: f32 = 0.1;

/// Stroke full-height vertical and full-width horizontal lines every
/// [`GRID_SPACING`] pixels, starting at 0 and stopping before the edge.
pub fn paint_grid(canvas: &mut Canvas, foreground: Color) {
    let style = StrokeStyle::hairline(foreground.with_opacity(GRID_OPACITY));
    let (width, height) = (canvas.width(), canvas.height());

    for x in (0..width).step_by(GRID_SPACING as usize) {
        canvas.stroke_line(x as f32, 0.0, x as f32, height as f32, &style);
    }
    for y in (0..height).step_by(GRID_SPACING as usize) {
        canvas.stroke_line(0.0, y as f32, width as f32, y as f32, &style);
    }
}

/// Number of lines drawn along one axis of `extent` pixels
pub fn line_count(extent: u32) -> u32 {
    extent.div_ceil(GRID_SPACING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(1920), 48);
        assert_eq!(line_count(1080), 27);
        assert_eq!(line_count(41), 2);
        assert_eq!(line_count(40), 1);
    }

    #[test]
    fn test_grid_is_faint_and_leaves_cells_untouched() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.clear(Color::BLACK);
        paint_grid(&mut canvas, Color::WHITE);

        // Lines are faint on a dark background
        let on_line = canvas.get_pixel(40, 20).unwrap();
        assert!(on_line.r > 0 && on_line.r < 40);
        // Cell interiors are untouched
        assert_eq!(canvas.get_pixel(60, 60), Some(Color::BLACK));
    }
}
