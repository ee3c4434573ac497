//! Quote wallpaper preview - Main Entry Point

use std::error::Error;
use std::path::PathBuf;
use wallpaper_preview::Preview;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    log::info!("Starting wallpaper preview...");

    // Optional TOML configuration file
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let preview = Preview::new(config_path)?;
    preview.run()?;

    Ok(())
}
