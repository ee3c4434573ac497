//! Wallpaper Engine
//!
//! Drives rendering for a host application:
//! - Debounced configuration changes
//! - One-time font loading gate
//! - Cancellable animation loop for particle decorations
//! - PNG export of the current frame

pub mod config;
pub mod debounce;
pub mod fonts;
pub mod frame_loop;
pub mod session;
pub mod export;

pub use config::{EngineOptions, load_config, parse_config};
pub use debounce::Debouncer;
pub use fonts::{FontGate, GateState};
pub use frame_loop::{AnimationLoop, FrameHandle};
pub use session::{SessionStatus, WallpaperSession};
pub use export::{export_filename, write_png};

pub use wallpaper_render::{Canvas, WallpaperConfig};

/// Engine error types
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Fonts are still loading")]
    FontsNotReady,

    #[error("No frame has been rendered yet")]
    NoFrame,

    #[error("Render error: {0}")]
    Render(#[from] wallpaper_render::RenderError),

    #[error("Font error: {0}")]
    Text(#[from] wallpaper_text::TextError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
