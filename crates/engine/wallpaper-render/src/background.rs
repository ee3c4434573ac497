//! Background painting

use crate::Canvas;
use crate::resolver::ResolvedLayout;

/// Paint the resolved background over the whole canvas.
///
/// This replaces every pixel, so nothing from a previous frame survives.
pub fn paint_background(canvas: &mut Canvas, layout: &ResolvedLayout) {
    canvas.clear(layout.background);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, WallpaperConfig, resolve};

    #[test]
    fn test_background_paint_overwrites_previous_frame() {
        let config = WallpaperConfig {
            background: "navy".into(),
            ..WallpaperConfig::default()
        };
        let layout = resolve(&config);
        let mut canvas = Canvas::new(16, 16).unwrap();
        canvas.fill_rect(0.0, 0.0, 8.0, 8.0, Color::WHITE);

        paint_background(&mut canvas, &layout);

        assert_eq!(canvas.get_pixel(2, 2), Some(Color::rgb(30, 58, 138)));
        assert_eq!(canvas.get_pixel(15, 15), Some(Color::rgb(30, 58, 138)));
    }
}
