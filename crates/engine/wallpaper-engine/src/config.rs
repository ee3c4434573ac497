//! Engine configuration

use std::path::{Path, PathBuf};
use std::time::Duration;
use wallpaper_render::{PARTICLE_SPEED_PER_MS, WallpaperConfig};
use crate::Result;

/// Engine tunables
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Quiet period after the last configuration change before re-rendering
    pub quiescence: Duration,

    /// Delay between animation ticks
    pub frame_interval: Duration,

    /// Particle velocity units per elapsed millisecond
    pub particle_speed_per_ms: f32,

    /// Fixed particle seed; random when unset
    pub particle_seed: Option<u64>,

    /// Scan the system font directories
    pub load_system_fonts: bool,

    /// Extra directories with font files
    pub font_dirs: Vec<PathBuf>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            quiescence: Duration::from_millis(250),
            frame_interval: Duration::from_millis(16),
            particle_speed_per_ms: PARTICLE_SPEED_PER_MS,
            particle_seed: None,
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

impl EngineOptions {
    /// Options for tests: no font scanning, fixed seed
    pub fn headless(seed: u64) -> Self {
        Self {
            particle_seed: Some(seed),
            load_system_fonts: false,
            ..Self::default()
        }
    }
}

/// Parse a TOML wallpaper configuration
pub fn parse_config(text: &str) -> Result<WallpaperConfig> {
    Ok(toml::from_str(text)?)
}

/// Read a TOML wallpaper configuration file
pub fn load_config(path: &Path) -> Result<WallpaperConfig> {
    let text = std::fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
