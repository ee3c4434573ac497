//! Wallpaper Preview
//!
//! A window showing the live wallpaper, scaled to fit. The configuration
//! comes from an optional TOML file that is reloaded when it changes.
//!
//! Keys: `S` export PNG, `T` toggle window theme, `Escape` quit.

mod app;
mod blit;
mod watch;

pub use app::{ChromeTheme, Preview};
pub use blit::{blit_scaled, fit_rect};
pub use watch::ConfigWatcher;
