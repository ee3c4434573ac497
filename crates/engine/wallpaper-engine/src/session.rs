//! Render session
//!
//! Owns everything one wallpaper preview needs between frames: the active
//! configuration, the debounced pending one, the font gate, particles, the
//! animation loop and the canvas. The host calls [`WallpaperSession::poll`]
//! from its event loop and presents the canvas whenever a frame comes back.

use std::path::{Path, PathBuf};
use std::time::Instant;
use wallpaper_render::{
    Canvas, Compositor, DecorationEngine, ResolvedLayout, TextPainter, WallpaperConfig, resolve,
};
use wallpaper_text::FontDatabase;
use crate::{
    AnimationLoop, Debouncer, EngineError, EngineOptions, FontGate, Result, export_filename,
    write_png,
};

/// What a host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Fonts are loading; rendering and export are held back
    Loading,
    Ready,
}

/// One live wallpaper preview
pub struct WallpaperSession {
    options: EngineOptions,
    pending: Debouncer<WallpaperConfig>,
    fonts: FontGate,
    config: WallpaperConfig,
    layout: ResolvedLayout,
    lines: Vec<String>,
    decoration: DecorationEngine,
    animation: AnimationLoop,
    compositor: Compositor,
    canvas: Option<Canvas>,
    dirty: bool,
}

impl WallpaperSession {
    /// Start a session and begin loading fonts in the background
    pub fn new(options: EngineOptions, config: WallpaperConfig, now: Instant) -> Self {
        let fonts = FontGate::load(&options);
        Self::with_gate(options, config, fonts, now)
    }

    /// Start a session with fonts that are already loaded
    pub fn with_fonts(
        options: EngineOptions,
        config: WallpaperConfig,
        fonts: FontDatabase,
        now: Instant,
    ) -> Self {
        Self::with_gate(options, config, FontGate::ready(fonts), now)
    }

    fn with_gate(options: EngineOptions, config: WallpaperConfig, fonts: FontGate, now: Instant) -> Self {
        let layout = resolve(&config);
        let mut session = Self {
            pending: Debouncer::new(options.quiescence),
            fonts,
            layout,
            lines: Vec::new(),
            decoration: DecorationEngine::new(options.particle_seed),
            animation: AnimationLoop::new(options.frame_interval),
            compositor: Compositor::new(TextPainter::new()),
            canvas: None,
            dirty: true,
            config: config.clone(),
            options,
        };
        session.apply(config, now);
        session
    }

    /// Record a configuration change; it takes effect after the quiescence window
    pub fn set_config(&mut self, config: WallpaperConfig, now: Instant) {
        self.pending.push(config, now);
    }

    /// Advance the session to `now`.
    ///
    /// Returns the canvas when a new frame was painted.
    pub fn poll(&mut self, now: Instant) -> Option<&Canvas> {
        if let Some(fonts) = self.fonts.poll() {
            self.compositor.painter_mut().set_fonts(fonts);
            self.dirty = true;
        }

        if let Some(config) = self.pending.poll(now) {
            self.apply(config, now);
        }

        if !self.fonts.is_open() {
            return None;
        }

        if let Some(elapsed) = self.animation.fire(now) {
            self.decoration.advance(elapsed, self.options.particle_speed_per_ms);
            self.dirty = true;
        }

        if self.dirty && self.render() {
            self.dirty = false;
            return self.canvas.as_ref();
        }
        None
    }

    /// Earliest instant at which [`poll`](Self::poll) has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.pending.deadline(), self.animation.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.fonts.is_open() {
            SessionStatus::Ready
        } else {
            SessionStatus::Loading
        }
    }

    /// Whether fonts finished loading (or were given up on)
    pub fn is_ready(&self) -> bool {
        self.status() == SessionStatus::Ready
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// Active configuration
    pub fn config(&self) -> &WallpaperConfig {
        &self.config
    }

    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }

    /// Quote lines of the last rendered frame
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Last rendered frame
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Write the current frame into `dir`, named after the resolution and the current time
    pub fn export(&self, dir: &Path) -> Result<PathBuf> {
        self.export_at(dir, chrono::Utc::now().timestamp_millis())
    }

    /// Write the current frame into `dir` with a given timestamp
    pub fn export_at(&self, dir: &Path, epoch_millis: i64) -> Result<PathBuf> {
        if !self.is_ready() {
            return Err(EngineError::FontsNotReady);
        }
        let canvas = self.canvas.as_ref().ok_or(EngineError::NoFrame)?;
        let path = dir.join(export_filename(self.layout.resolution_key, epoch_millis));
        write_png(canvas, &path)?;
        Ok(path)
    }

    /// Switch to a new configuration. The running loop is cancelled before
    /// particles are touched.
    fn apply(&mut self, config: WallpaperConfig, now: Instant) {
        self.animation.cancel();

        self.layout = resolve(&config);
        self.decoration.apply(&config, &self.layout);
        if self.decoration.is_animated() {
            self.animation.request_frame(now);
        }

        tracing::debug!(
            resolution = self.layout.resolution_key,
            style = config.decoration_style.key(),
            "applied configuration"
        );
        self.config = config;
        self.dirty = true;
    }

    /// Paint a frame; false when no surface could be allocated
    fn render(&mut self) -> bool {
        let (width, height) = (self.layout.width, self.layout.height);
        let fits = self
            .canvas
            .as_ref()
            .is_some_and(|c| c.width() == width && c.height() == height);
        if !fits {
            self.canvas = Canvas::new(width, height);
        }
        let Some(canvas) = self.canvas.as_mut() else {
            tracing::warn!(width, height, "no drawing surface, skipping frame");
            return false;
        };

        self.lines = self.compositor.wrap_quote(&self.config, &self.layout);
        self.compositor.render(
            canvas,
            &self.config,
            &self.layout,
            &self.lines,
            self.decoration.particles(),
        );
        true
    }
}

impl std::fmt::Debug for WallpaperSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WallpaperSession")
            .field("status", &self.status())
            .field("resolution", &self.layout.resolution_key)
            .field("animating", &self.is_animating())
            .field("fonts", &self.fonts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wallpaper_render::{Color, DecorationStyle};

    fn minimal() -> WallpaperConfig {
        WallpaperConfig {
            decoration_style: DecorationStyle::Minimal,
            resolution: "1080x1080".into(),
            ..Default::default()
        }
    }

    fn session(config: WallpaperConfig, now: Instant) -> WallpaperSession {
        WallpaperSession::with_fonts(EngineOptions::headless(5), config, FontDatabase::new(), now)
    }

    #[test]
    fn test_static_style_renders_once() {
        let start = Instant::now();
        let mut session = session(minimal(), start);

        assert!(session.poll(start).is_some());
        assert!(session.poll(start + Duration::from_millis(16)).is_none());
        assert!(!session.is_animating());
    }

    #[test]
    fn test_config_change_waits_for_quiescence() {
        let start = Instant::now();
        let mut session = session(minimal(), start);
        session.poll(start);

        let navy = WallpaperConfig { background: "navy".into(), ..minimal() };
        session.set_config(navy, start);
        assert!(session.poll(start + Duration::from_millis(100)).is_none());

        let frame = session.poll(start + Duration::from_millis(250)).unwrap();
        assert_eq!(frame.get_pixel(0, 0), Some(Color::rgb(30, 58, 138)));
    }

    #[test]
    fn test_particles_animate_every_frame() {
        let start = Instant::now();
        let particles = WallpaperConfig { decoration_style: DecorationStyle::Particles, ..minimal() };
        let mut session = session(particles, start);

        assert!(session.poll(start).is_some());
        assert!(session.is_animating());
        assert!(session.poll(start + Duration::from_millis(5)).is_none());
        assert!(session.poll(start + Duration::from_millis(16)).is_some());
        assert!(session.poll(start + Duration::from_millis(32)).is_some());
    }

    #[test]
    fn test_switching_to_static_stops_animation() {
        let start = Instant::now();
        let particles = WallpaperConfig { decoration_style: DecorationStyle::Particles, ..minimal() };
        let mut session = session(particles, start);
        session.poll(start);

        session.set_config(minimal(), start);
        session.poll(start + Duration::from_millis(250));
        assert!(!session.is_animating());
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_resolution_change_reallocates_canvas() {
        let start = Instant::now();
        let mut session = session(minimal(), start);
        session.poll(start);

        session.set_config(WallpaperConfig { resolution: "1080x1920".into(), ..minimal() }, start);
        let frame = session.poll(start + Duration::from_millis(300)).unwrap();
        assert_eq!((frame.width(), frame.height()), (1080, 1920));
    }

    #[test]
    fn test_export_before_first_frame() {
        let start = Instant::now();
        let session = session(minimal(), start);
        let result = session.export_at(&std::env::temp_dir(), 1);
        assert!(matches!(result, Err(EngineError::NoFrame)));
    }
}
