//! Frame compositor
//!
//! Paints one complete frame: background, decoration, highlight boxes,
//! quote lines with optional underline, then the attribution. Every call
//! overwrites the whole canvas.

use wallpaper_text::{FontWeight, TextAlign, TextMeasure, TextStyle, find_font, wrap_words};
use crate::decoration::{Particle, paint_decoration};
use crate::{
    Canvas, LayoutMode, ResolvedLayout, StrokeStyle, TextPainter, WallpaperConfig,
    paint_background,
};

/// Corner radius of highlight boxes
const HIGHLIGHT_RADIUS: f32 = 8.0;
/// Opacity of the source line
const SOURCE_OPACITY: f32 = 0.75;
/// Attribution line slot, relative to its font size
const ATTRIBUTION_LEADING: f32 = 1.6;

/// Font sizes and line metrics derived from the canvas size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub quote_size: f32,
    pub author_size: f32,
    pub source_size: f32,
    /// Widest a quote line may be before wrapping
    pub max_width: f32,
    pub line_height: f32,
}

impl TypeScale {
    pub fn for_size(width: u32, height: u32) -> Self {
        let base = width.min(height) as f32;
        let quote_size = (base * 0.055).floor();
        Self {
            quote_size,
            author_size: (base * 0.032).floor(),
            source_size: (base * 0.025).floor(),
            max_width: width as f32 * 0.8,
            line_height: quote_size * 1.3,
        }
    }

    pub fn for_layout(layout: &ResolvedLayout) -> Self {
        Self::for_size(layout.width, layout.height)
    }

    /// Padding around each highlighted line
    pub fn highlight_padding(&self) -> f32 {
        self.quote_size * 0.15
    }

    /// Underline offset below a line's middle
    pub fn underline_offset(&self) -> f32 {
        self.quote_size * 0.15
    }

    pub fn underline_width(&self) -> f32 {
        (self.quote_size * 0.025).max(2.0)
    }
}

/// Vertical positions of the quote block and the centered attribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalPlacement {
    /// Middle of the first quote line
    pub start_y: f32,
    pub quote_height: f32,
    /// Space between quote block and attribution (centered layout only)
    pub gap: f32,
    /// Height reserved for author and source (centered layout only)
    pub attribution_height: f32,
}

impl VerticalPlacement {
    pub fn compute(
        scale: &TypeScale,
        line_count: usize,
        mode: LayoutMode,
        has_author: bool,
        has_source: bool,
        canvas_height: f32,
    ) -> Self {
        let quote_height = line_count as f32 * scale.line_height;

        let (gap, attribution_height) = match mode {
            LayoutMode::Traditional => (0.0, 0.0),
            LayoutMode::Centered => {
                let mut height = 0.0;
                if has_author {
                    height += scale.author_size * ATTRIBUTION_LEADING;
                }
                if has_source {
                    height += scale.source_size * ATTRIBUTION_LEADING;
                }
                let gap = if height > 0.0 { scale.quote_size * 0.8 } else { 0.0 };
                (gap, height)
            }
        };

        let total = quote_height + gap + attribution_height;
        Self {
            start_y: (canvas_height - total) / 2.0,
            quote_height,
            gap,
            attribution_height,
        }
    }

    /// Middle of quote line `index`
    pub fn line_y(&self, index: usize, scale: &TypeScale) -> f32 {
        self.start_y + index as f32 * scale.line_height
    }

    /// Middle of the first attribution line in the centered layout
    pub fn attribution_y(&self) -> f32 {
        self.start_y + self.quote_height + self.gap
    }
}

/// Paints frames with a shared text painter
pub struct Compositor {
    painter: TextPainter,
}

impl Compositor {
    pub fn new(painter: TextPainter) -> Self {
        Self { painter }
    }

    pub fn painter(&self) -> &TextPainter {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut TextPainter {
        &mut self.painter
    }

    /// Quote wrapped with its quotation marks to the layout's max width
    pub fn wrap_quote(&self, config: &WallpaperConfig, layout: &ResolvedLayout) -> Vec<String> {
        let scale = TypeScale::for_layout(layout);
        let style = quote_style(config, &scale);
        wrap_words(&config.quoted_text(), scale.max_width, |line| {
            self.painter.text_width(line, style)
        })
    }

    /// Paint a full frame from pre-wrapped quote lines and a particle snapshot
    pub fn render(
        &self,
        canvas: &mut Canvas,
        config: &WallpaperConfig,
        layout: &ResolvedLayout,
        lines: &[String],
        particles: &[Particle],
    ) {
        let scale = TypeScale::for_layout(layout);
        let width = layout.width as f32;
        let center_x = width / 2.0;

        paint_background(canvas, layout);
        paint_decoration(canvas, config.decoration_style, layout, particles);

        let placement = VerticalPlacement::compute(
            &scale,
            lines.len(),
            config.layout_mode,
            config.has_author(),
            config.has_source(),
            layout.height as f32,
        );
        let style = quote_style(config, &scale);
        let widths: Vec<f32> = lines.iter().map(|line| self.painter.text_width(line, style)).collect();

        if let Some(highlight) = layout.highlight {
            let pad = scale.highlight_padding();
            for (i, line_width) in widths.iter().enumerate() {
                let y = placement.line_y(i, &scale);
                canvas.fill_rounded_rect(
                    (width - line_width) / 2.0 - pad,
                    y - scale.quote_size / 2.0 - pad,
                    line_width + pad * 2.0,
                    scale.quote_size + pad * 2.0,
                    HIGHLIGHT_RADIUS,
                    highlight,
                );
            }
        }

        let underline = StrokeStyle::solid(layout.text_color, scale.underline_width());
        for (i, (line, line_width)) in lines.iter().zip(&widths).enumerate() {
            let y = placement.line_y(i, &scale);
            self.painter.draw(canvas, line, center_x, y, style, TextAlign::Center, layout.text_color);

            if config.underline {
                let uy = y + scale.underline_offset();
                let left = (width - line_width) / 2.0;
                canvas.stroke_line(left, uy, left + line_width, uy, &underline);
            }
        }

        self.paint_attribution(canvas, config, layout, &scale, &placement);

        tracing::debug!(
            width = layout.width,
            height = layout.height,
            lines = lines.len(),
            style = config.decoration_style.key(),
            "rendered frame"
        );
    }

    fn paint_attribution(
        &self,
        canvas: &mut Canvas,
        config: &WallpaperConfig,
        layout: &ResolvedLayout,
        scale: &TypeScale,
        placement: &VerticalPlacement,
    ) {
        let family = find_font(&config.font).family;
        let author_style = TextStyle::new(family, scale.author_size, FontWeight::SEMI_BOLD);
        let source_style = TextStyle::new(family, scale.source_size, FontWeight::NORMAL);
        let source_color = layout.text_color.with_opacity(SOURCE_OPACITY);
        let author = format!("\u{2014} {}", config.author);

        match config.layout_mode {
            LayoutMode::Traditional => {
                let right = layout.width as f32 * 0.95;
                let mut y = layout.height as f32 * 0.92;
                if config.has_source() {
                    self.painter.draw(
                        canvas, &config.source, right, y, source_style, TextAlign::Right, source_color,
                    );
                    y -= scale.source_size * ATTRIBUTION_LEADING;
                }
                if config.has_author() {
                    self.painter.draw(
                        canvas, &author, right, y, author_style, TextAlign::Right, layout.text_color,
                    );
                }
            }
            LayoutMode::Centered => {
                let center_x = layout.width as f32 / 2.0;
                let mut y = placement.attribution_y();
                if config.has_author() {
                    self.painter.draw(
                        canvas, &author, center_x, y, author_style, TextAlign::Center, layout.text_color,
                    );
                    y += scale.author_size * ATTRIBUTION_LEADING;
                }
                if config.has_source() {
                    self.painter.draw(
                        canvas, &config.source, center_x, y, source_style, TextAlign::Center, source_color,
                    );
                }
            }
        }
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(TextPainter::new())
    }
}

fn quote_style(config: &WallpaperConfig, scale: &TypeScale) -> TextStyle {
    TextStyle::new(find_font(&config.font).family, scale.quote_size, FontWeight::SEMI_BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DecorationStyle, resolve};

    fn square() -> WallpaperConfig {
        WallpaperConfig {
            quote: "Hello world".into(),
            author: String::new(),
            font: "Inter".into(),
            resolution: "1080x1080".into(),
            decoration_style: DecorationStyle::Minimal,
            ..Default::default()
        }
    }

    #[test]
    fn test_type_scale_square() {
        let scale = TypeScale::for_size(1080, 1080);
        assert_eq!(scale.quote_size, 59.0);
        assert_eq!(scale.author_size, 34.0);
        assert_eq!(scale.source_size, 27.0);
        assert_eq!(scale.max_width, 864.0);
        assert!((scale.line_height - 76.7).abs() < 1e-3);
        assert_eq!(scale.underline_width(), 2.0);
    }

    #[test]
    fn test_type_scale_uses_shorter_side() {
        let portrait = TypeScale::for_size(1080, 1920);
        let landscape = TypeScale::for_size(1920, 1080);
        assert_eq!(portrait.quote_size, landscape.quote_size);
        assert_eq!(landscape.max_width, 1536.0);
        assert_eq!(TypeScale::for_size(3840, 2160).quote_size, 118.0);
    }

    #[test]
    fn test_centered_author_only() {
        let scale = TypeScale::for_size(1080, 1080);
        let placement = VerticalPlacement::compute(&scale, 2, LayoutMode::Centered, true, false, 1080.0);

        assert_eq!(placement.attribution_height, scale.author_size * 1.6);
        assert_eq!(placement.gap, scale.quote_size * 0.8);
        let total = placement.quote_height + placement.gap + placement.attribution_height;
        assert!((placement.start_y - (1080.0 - total) / 2.0).abs() < 1e-3);
        assert!((placement.attribution_y() - (placement.start_y + placement.quote_height + placement.gap)).abs() < 1e-3);
    }

    #[test]
    fn test_centered_without_attribution_has_no_gap() {
        let scale = TypeScale::for_size(1920, 1080);
        let placement = VerticalPlacement::compute(&scale, 1, LayoutMode::Centered, false, false, 1080.0);
        assert_eq!(placement.gap, 0.0);
        assert_eq!(placement.attribution_height, 0.0);
    }

    #[test]
    fn test_traditional_centers_quote_only() {
        let scale = TypeScale::for_size(1920, 1080);
        let placement = VerticalPlacement::compute(&scale, 3, LayoutMode::Traditional, true, true, 1080.0);
        assert_eq!(placement.attribution_height, 0.0);
        assert!((placement.start_y - (1080.0 - 3.0 * scale.line_height) / 2.0).abs() < 1e-3);
        assert!((placement.line_y(2, &scale) - (placement.start_y + 2.0 * scale.line_height)).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_quote_adds_quotation_marks() {
        let compositor = Compositor::default();
        let config = square();
        let lines = compositor.wrap_quote(&config, &resolve(&config));
        assert_eq!(lines, ["\u{201C}Hello world\u{201D}"]);
    }

    #[test]
    fn test_empty_quote_renders() {
        let compositor = Compositor::default();
        let config = WallpaperConfig { quote: String::new(), ..square() };
        let layout = resolve(&config);
        let lines = compositor.wrap_quote(&config, &layout);
        assert_eq!(lines, ["\u{201C}\u{201D}"]);

        let mut canvas = Canvas::new(layout.width, layout.height).unwrap();
        compositor.render(&mut canvas, &config, &layout, &lines, &[]);
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_highlight_box_geometry() {
        let compositor = Compositor::default();
        let config = WallpaperConfig { highlight_color: "yellow".into(), ..square() };
        let layout = resolve(&config);
        let lines = compositor.wrap_quote(&config, &layout);
        let mut canvas = Canvas::new(layout.width, layout.height).unwrap();
        compositor.render(&mut canvas, &config, &layout, &lines, &[]);

        // One line of 13 characters at 0.5em is 383.5px wide, centered
        let scale = TypeScale::for_layout(&layout);
        let y = VerticalPlacement::compute(&scale, 1, LayoutMode::Traditional, false, false, 1080.0).start_y;
        let inside = canvas.get_pixel(540, (y - scale.quote_size / 2.0) as u32 + 1).unwrap();
        assert!(inside.r > 100 && inside.g > 100 && inside.b == 0);
        assert_eq!(canvas.get_pixel(540, 5), Some(Color::BLACK));
        assert_eq!(canvas.get_pixel(20, y as u32), Some(Color::BLACK));
    }

    #[test]
    fn test_underline_is_drawn_below_line() {
        let compositor = Compositor::default();
        let config = WallpaperConfig { underline: true, ..square() };
        let layout = resolve(&config);
        let lines = compositor.wrap_quote(&config, &layout);
        let mut canvas = Canvas::new(layout.width, layout.height).unwrap();
        compositor.render(&mut canvas, &config, &layout, &lines, &[]);

        let scale = TypeScale::for_layout(&layout);
        let y = VerticalPlacement::compute(&scale, 1, LayoutMode::Traditional, false, false, 1080.0).start_y;
        let uy = (y + scale.underline_offset()).round() as u32;
        let under = canvas.get_pixel(540, uy).unwrap();
        assert!(under.r > 0);
    }
}
