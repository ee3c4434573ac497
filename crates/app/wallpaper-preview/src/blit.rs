//! Copying the wallpaper into the window framebuffer

use wallpaper_render::{Canvas, Color};

/// Largest rectangle with the source aspect ratio that fits the destination,
/// centered. Returns `(x, y, width, height)`.
pub fn fit_rect(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> (u32, u32, u32, u32) {
    if src_w == 0 || src_h == 0 || dst_w == 0 || dst_h == 0 {
        return (0, 0, 0, 0);
    }
    let scale = (dst_w as f32 / src_w as f32).min(dst_h as f32 / src_h as f32);
    let w = ((src_w as f32 * scale).round() as u32).clamp(1, dst_w);
    let h = ((src_h as f32 * scale).round() as u32).clamp(1, dst_h);
    ((dst_w - w) / 2, (dst_h - h) / 2, w, h)
}

/// Opaque softbuffer pixel (0xAARRGGBB)
pub fn to_argb(color: Color) -> u32 {
    (0xFF << 24) | ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Nearest-neighbour copy of `canvas` into a `dst_w` x `dst_h` buffer,
/// letterboxed with `backdrop`
pub fn blit_scaled(canvas: &Canvas, buffer: &mut [u32], dst_w: u32, dst_h: u32, backdrop: u32) {
    buffer.fill(backdrop);

    let (src_w, src_h) = (canvas.width(), canvas.height());
    let (ox, oy, w, h) = fit_rect(src_w, src_h, dst_w, dst_h);
    let stride = dst_w as usize;

    for dy in 0..h {
        let sy = (dy as u64 * src_h as u64 / h as u64) as u32;
        let row = (oy + dy) as usize * stride;
        for dx in 0..w {
            let sx = (dx as u64 * src_w as u64 / w as u64) as u32;
            if let Some(color) = canvas.get_pixel(sx, sy) {
                let index = row + (ox + dx) as usize;
                if let Some(pixel) = buffer.get_mut(index) {
                    *pixel = to_argb(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_landscape_into_square() {
        assert_eq!(fit_rect(1920, 1080, 800, 800), (0, 175, 800, 450));
    }

    #[test]
    fn test_fit_portrait_into_landscape() {
        assert_eq!(fit_rect(1080, 1920, 1280, 720), (437, 0, 405, 720));
    }

    #[test]
    fn test_fit_degenerate() {
        assert_eq!(fit_rect(0, 10, 100, 100), (0, 0, 0, 0));
        assert_eq!(fit_rect(10, 10, 0, 100), (0, 0, 0, 0));
    }

    #[test]
    fn test_blit_letterboxes() {
        let mut canvas = Canvas::new(4, 2).unwrap();
        canvas.clear(Color::rgb(0x12, 0x34, 0x56));
        let mut buffer = vec![0u32; 4 * 4];
        blit_scaled(&canvas, &mut buffer, 4, 4, 0xFF000000);

        // Rows 1 and 2 hold the image, rows 0 and 3 the backdrop
        assert_eq!(buffer[0], 0xFF000000);
        assert_eq!(buffer[4], 0xFF123456);
        assert_eq!(buffer[11], 0xFF123456);
        assert_eq!(buffer[15], 0xFF000000);
    }
}
