//! Background decorations
//!
//! One of three styles is active at a time. Only particles carry state;
//! the engine owns them and decides when they are reseeded.

mod grid;
mod particles;

pub use grid::{GRID_SPACING, paint_grid};
pub use particles::{MAX_PARTICLES, Particle, ParticleField, paint_particles, particle_count};

use std::time::Duration;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use crate::{Canvas, ResolvedLayout, WallpaperConfig};

/// Background treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DecorationStyle {
    Particles,
    Grid,
    /// No decoration
    #[default]
    Minimal,
}

impl DecorationStyle {
    /// Every style in picker order
    pub const ALL: [DecorationStyle; 3] = [Self::Particles, Self::Grid, Self::Minimal];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Particles => "particles",
            Self::Grid => "grid",
            Self::Minimal => "minimal",
        }
    }

    /// Unknown keys are minimal
    pub fn from_key(key: &str) -> Self {
        match key {
            "particles" => Self::Particles,
            "grid" => Self::Grid,
            _ => Self::Minimal,
        }
    }

    /// Whether the style needs an animation loop
    pub fn is_animated(&self) -> bool {
        *self == Self::Particles
    }
}

impl From<String> for DecorationStyle {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl From<DecorationStyle> for String {
    fn from(style: DecorationStyle) -> Self {
        style.key().to_string()
    }
}

/// Paint a decoration over the background
pub fn paint_decoration(
    canvas: &mut Canvas,
    style: DecorationStyle,
    layout: &ResolvedLayout,
    particles: &[Particle],
) {
    match style {
        DecorationStyle::Minimal => {}
        DecorationStyle::Grid => paint_grid(canvas, layout.foreground()),
        DecorationStyle::Particles => paint_particles(canvas, particles, layout.foreground()),
    }
}

/// Decoration state for one render session
#[derive(Debug)]
pub struct DecorationEngine {
    style: DecorationStyle,
    field: ParticleField,
    rng: StdRng,
    applied: Option<WallpaperConfig>,
}

impl DecorationEngine {
    /// Engine with a fixed seed when given, otherwise seeded from the OS
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            style: DecorationStyle::default(),
            field: ParticleField::default(),
            rng: seed.map(StdRng::seed_from_u64).unwrap_or_else(StdRng::from_entropy),
            applied: None,
        }
    }

    /// Switch to a new configuration.
    ///
    /// Particles are reseeded when the style becomes particles or the
    /// density or resolution changed; other styles drop them.
    pub fn apply(&mut self, config: &WallpaperConfig, layout: &ResolvedLayout) {
        let reseed = match &self.applied {
            Some(previous) => config.reseeds_particles_from(previous),
            None => config.decoration_style.is_animated(),
        };

        self.style = config.decoration_style;
        if reseed {
            let count = particle_count(config.particle_density);
            self.field.seed(count, layout.width, layout.height, &mut self.rng);
        } else if !self.style.is_animated() {
            self.field.clear();
        }
        self.applied = Some(config.clone());
    }

    /// Advance particles; a no-op for static styles
    pub fn advance(&mut self, elapsed: Duration, speed_per_ms: f32) {
        if self.style.is_animated() {
            self.field.advance(elapsed, speed_per_ms);
        }
    }

    pub fn style(&self) -> DecorationStyle {
        self.style
    }

    pub fn is_animated(&self) -> bool {
        self.style.is_animated()
    }

    /// Current particle positions
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }
}
