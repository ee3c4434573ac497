//! Animated particle field
//!
//! Particles drift with a constant velocity and teleport to the opposite
//! edge when they leave the canvas.

use std::time::Duration;
use rand::Rng;
use crate::{Canvas, Color};

/// Particles at 100% density
pub const MAX_PARTICLES: u32 = 100;

/// One drifting dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Velocity in pixels per speed unit
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    /// 0.0 to 1.0
    pub opacity: f32,
}

impl Particle {
    /// Random particle placed anywhere on a `width` x `height` canvas
    pub fn random(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..width.max(f32::MIN_POSITIVE)),
            y: rng.gen_range(0.0..height.max(f32::MIN_POSITIVE)),
            vx: rng.gen_range(-0.25..0.25),
            vy: rng.gen_range(-0.25..0.25),
            radius: rng.gen_range(0.5..2.5),
            opacity: rng.gen_range(0.2..0.7),
        }
    }

    /// Move by `velocity * step`, then wrap each axis into `[0, extent]`
    pub fn advance(&mut self, step: f32, width: f32, height: f32) {
        self.x = wrap(self.x + self.vx * step, width);
        self.y = wrap(self.y + self.vy * step, height);
    }
}

fn wrap(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

/// Particle count for a density percentage; densities above 100 count as 100
pub fn particle_count(density: u32) -> usize {
    (density.min(100) * MAX_PARTICLES / 100) as usize
}

/// Every particle of the current session plus the bounds they live in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Replace all particles with `count` fresh random ones
    pub fn seed(&mut self, count: usize, width: u32, height: u32, rng: &mut impl Rng) {
        self.width = width as f32;
        self.height = height as f32;
        self.particles = (0..count)
            .map(|_| Particle::random(rng, self.width, self.height))
            .collect();
        tracing::debug!(count, width, height, "seeded particles");
    }

    /// Field made of given particles, for snapshots and tests
    pub fn from_particles(particles: Vec<Particle>, width: u32, height: u32) -> Self {
        Self { particles, width: width as f32, height: height as f32 }
    }

    /// Advance every particle by `elapsed` at `speed_per_ms` velocity units per millisecond
    pub fn advance(&mut self, elapsed: Duration, speed_per_ms: f32) {
        let step = elapsed.as_secs_f32() * 1000.0 * speed_per_ms;
        for particle in &mut self.particles {
            particle.advance(step, self.width, self.height);
        }
    }

    /// Drop every particle
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Draw particles as filled circles in `color` with their own opacity
pub fn paint_particles(canvas: &mut Canvas, particles: &[Particle], color: Color) {
    for p in particles {
        canvas.fill_circle(p.x, p.y, p.radius, color.with_opacity(p.opacity));
    }
}
