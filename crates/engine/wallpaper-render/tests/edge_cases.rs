//! Edge case tests for wallpaper-render
//!
//! Whole frames rendered without system fonts, configuration parsing and
//! particle motion at the canvas edges.

use std::time::Duration;
use wallpaper_render::*;

fn hello_square() -> WallpaperConfig {
    WallpaperConfig {
        quote: "Hello world".into(),
        author: String::new(),
        font: "Inter".into(),
        resolution: "1080x1080".into(),
        decoration_style: DecorationStyle::Minimal,
        background: "black".into(),
        layout_mode: LayoutMode::Traditional,
        ..Default::default()
    }
}

fn render(config: &WallpaperConfig, particles: &[Particle]) -> (Canvas, Vec<String>) {
    let compositor = Compositor::default();
    let layout = resolve(config);
    let lines = compositor.wrap_quote(config, &layout);
    let mut canvas = Canvas::new(layout.width, layout.height).unwrap();
    compositor.render(&mut canvas, config, &layout, &lines, particles);
    (canvas, lines)
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn test_hello_world_square_black_minimal() {
    let config = hello_square();
    let layout = resolve(&config);
    assert_eq!((layout.width, layout.height), (1080, 1080));
    assert_eq!(layout.text_color, Color::WHITE);

    let (canvas, lines) = render(&config, &[]);
    assert_eq!(lines, ["\u{201C}Hello world\u{201D}"]);
    assert_eq!((canvas.width(), canvas.height()), (1080, 1080));

    // Corners and the margins stay solid black without a decoration
    for (x, y) in [(0, 0), (1079, 0), (0, 1079), (1079, 1079), (540, 40), (40, 540)] {
        assert_eq!(canvas.get_pixel(x, y), Some(Color::BLACK), "pixel ({x}, {y})");
    }

    // The single line is centered vertically
    let scale = TypeScale::for_layout(&layout);
    let placement = VerticalPlacement::compute(&scale, 1, LayoutMode::Traditional, false, false, 1080.0);
    assert!((placement.start_y + placement.quote_height / 2.0 - 540.0).abs() < 1e-3);
}

#[test]
fn test_every_frame_overwrites_the_previous_one() {
    let config = WallpaperConfig { highlight_color: "green".into(), ..hello_square() };
    let (mut canvas, lines) = render(&config, &[]);

    let plain = hello_square();
    let layout = resolve(&plain);
    Compositor::default().render(&mut canvas, &plain, &layout, &lines, &[]);
    assert!(canvas.to_rgba().chunks(4).all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn test_empty_quote_does_not_panic() {
    for layout_mode in [LayoutMode::Traditional, LayoutMode::Centered] {
        let config = WallpaperConfig {
            quote: String::new(),
            author: "Anonymous".into(),
            source: "Unknown".into(),
            underline: true,
            highlight_color: "pink".into(),
            layout_mode,
            ..hello_square()
        };
        let (_, lines) = render(&config, &[]);
        assert_eq!(lines.len(), 1);
    }
}

#[test]
fn test_light_background_grid_is_dark() {
    let config = WallpaperConfig {
        background: "white".into(),
        decoration_style: DecorationStyle::Grid,
        ..hello_square()
    };
    let (canvas, _) = render(&config, &[]);
    let on_line = canvas.get_pixel(40, 10).unwrap();
    assert!(on_line.r < 255 && on_line.r > 200);
    assert_eq!(canvas.get_pixel(60, 10), Some(Color::WHITE));
}

#[test]
fn test_particles_drawn_from_snapshot() {
    let config = WallpaperConfig { decoration_style: DecorationStyle::Particles, ..hello_square() };
    let dot = Particle { x: 100.0, y: 100.0, vx: 0.0, vy: 0.0, radius: 2.5, opacity: 0.6 };
    let (canvas, _) = render(&config, &[dot]);
    let center = canvas.get_pixel(100, 100).unwrap();
    assert!(center.r > 100 && center.r < 200);
}

// ============================================================================
// PARTICLE MOTION
// ============================================================================

#[test]
fn test_particle_past_right_edge_wraps_to_zero_on_same_tick() {
    let p = Particle { x: 1080.0, y: 500.0, vx: 0.1, vy: 0.0, radius: 1.0, opacity: 0.5 };
    let mut field = ParticleField::from_particles(vec![p], 1080, 1080);
    // 1000ms at 0.01/ms moves 0.1 * 10 = 1px to x = width + 1
    field.advance(Duration::from_millis(1000), PARTICLE_SPEED_PER_MS);
    assert_eq!(field.particles()[0].x, 0.0);
    assert_eq!(field.particles()[0].y, 500.0);
}

#[test]
fn test_particle_past_top_edge_wraps_to_height() {
    let p = Particle { x: 10.0, y: 0.0, vx: 0.0, vy: -0.2, radius: 1.0, opacity: 0.5 };
    let mut field = ParticleField::from_particles(vec![p], 1920, 1080);
    field.advance(Duration::from_millis(16), PARTICLE_SPEED_PER_MS);
    assert_eq!(field.particles()[0].y, 1080.0);
}

#[test]
fn test_particle_counts_from_density() {
    assert_eq!(particle_count(50), 50);
    assert_eq!(particle_count(100), 100);
    assert_eq!(particle_count(0), 0);
}

#[test]
fn test_decoration_engine_reseeds_on_resolution_change() {
    let mut engine = DecorationEngine::new(Some(11));
    let config = WallpaperConfig::default();
    engine.apply(&config, &resolve(&config));
    assert!(engine.particles().iter().all(|p| p.x <= 1920.0 && p.y <= 1080.0));

    let mobile = WallpaperConfig { resolution: "1080x1920".into(), ..config };
    engine.apply(&mobile, &resolve(&mobile));
    assert_eq!(engine.particles().len(), 50);
    assert!(engine.particles().iter().all(|p| p.x <= 1080.0 && p.y <= 1920.0));
}

// ============================================================================
// CONFIGURATION FILES
// ============================================================================

#[test]
fn test_config_from_toml() {
    let config: WallpaperConfig = toml::from_str(
        r##"
            quote = "Be yourself"
            author = "Oscar Wilde"
            decorationStyle = "grid"
            textColor = "#FFD700"
            highlightColor = "yellow"
            layoutMode = "centered"
            particleDensity = 30
        "##,
    )
    .unwrap();

    assert_eq!(config.quote, "Be yourself");
    assert_eq!(config.decoration_style, DecorationStyle::Grid);
    assert_eq!(config.text_color, Color::rgb(255, 215, 0));
    assert_eq!(config.layout_mode, LayoutMode::Centered);
    assert_eq!(config.particle_density, 30);
    // Unspecified fields keep their defaults
    assert_eq!(config.resolution, "1920x1080");
    assert_eq!(config.background, "black");
}

#[test]
fn test_unknown_enum_keys_default() {
    let config: WallpaperConfig = toml::from_str(
        r#"
            decorationStyle = "confetti"
            layoutMode = "spiral"
            resolution = "800x600"
        "#,
    )
    .unwrap();
    assert_eq!(config.decoration_style, DecorationStyle::Minimal);
    assert_eq!(config.layout_mode, LayoutMode::Traditional);
    assert_eq!(resolve(&config).width, 1920);
}

#[test]
fn test_invalid_text_color_is_rejected() {
    let result: std::result::Result<WallpaperConfig, _> = toml::from_str(r#"textColor = "gold""#);
    assert!(result.is_err());
}
