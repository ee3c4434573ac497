//! PNG export

use std::path::Path;
use wallpaper_render::Canvas;
use crate::Result;

/// File name of an exported wallpaper
pub fn export_filename(resolution_key: &str, epoch_millis: i64) -> String {
    format!("quote-wallpaper-{resolution_key}-{epoch_millis}.png")
}

/// Encode the canvas as PNG and write it to `path`
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let png = canvas.encode_png()?;
    std::fs::write(path, &png)?;
    tracing::info!(path = %path.display(), bytes = png.len(), "exported wallpaper");
    Ok(())
}
