//! Font loading gate
//!
//! Fonts are scanned once on a blocking thread. Rendering waits until the
//! scan finished; a failed scan still opens the gate, leaving the painter
//! with approximate metrics.

use std::path::PathBuf;
use smol::Task;
use wallpaper_text::{FontDatabase, TextError};
use crate::EngineOptions;

/// Where the gate stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Loading,
    Ready,
    /// Loading failed and the gate was forced open
    Failed,
}

/// One-time asynchronous font loading
pub struct FontGate {
    task: Option<Task<Result<FontDatabase, TextError>>>,
    loaded: Option<FontDatabase>,
    state: GateState,
}

impl FontGate {
    /// Start loading fonts in the background
    pub fn load(options: &EngineOptions) -> Self {
        let system = options.load_system_fonts;
        let dirs = options.font_dirs.clone();
        let task = smol::unblock(move || load_fonts(system, &dirs));
        Self { task: Some(task), loaded: None, state: GateState::Loading }
    }

    /// A gate that is already open with the given fonts
    pub fn ready(fonts: FontDatabase) -> Self {
        Self { task: None, loaded: Some(fonts), state: GateState::Ready }
    }

    /// Check the loading task without blocking.
    ///
    /// Returns the font database exactly once, when the gate opens.
    pub fn poll(&mut self) -> Option<FontDatabase> {
        if let Some(task) = self.task.as_mut() {
            let finished = smol::future::block_on(smol::future::poll_once(task));
            if let Some(result) = finished {
                self.task = None;
                self.open(result);
            }
        }
        self.loaded.take()
    }

    /// Block until loading finished
    pub fn wait(&mut self) -> Option<FontDatabase> {
        if let Some(task) = self.task.take() {
            let result = smol::block_on(task);
            self.open(result);
        }
        self.loaded.take()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether rendering may proceed
    pub fn is_open(&self) -> bool {
        self.state != GateState::Loading
    }

    fn open(&mut self, result: Result<FontDatabase, TextError>) {
        match result {
            Ok(fonts) => {
                tracing::info!(faces = fonts.len(), "fonts ready");
                self.state = GateState::Ready;
                self.loaded = Some(fonts);
            }
            Err(e) => {
                tracing::warn!(error = %e, "font loading failed, continuing with fallback metrics");
                self.state = GateState::Failed;
                self.loaded = Some(FontDatabase::new());
            }
        }
    }
}

impl std::fmt::Debug for FontGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontGate")
            .field("state", &self.state)
            .field("pending", &self.task.is_some())
            .finish()
    }
}

/// Build a font database; fails only when no face could be loaded at all
fn load_fonts(system: bool, dirs: &[PathBuf]) -> Result<FontDatabase, TextError> {
    let mut fonts = FontDatabase::new();
    if system {
        fonts.load_system_fonts();
    }
    for dir in dirs {
        if dir.is_dir() {
            fonts.load_fonts_dir(dir);
        } else {
            tracing::warn!(dir = %dir.display(), "font directory not found");
        }
    }

    if fonts.is_empty() {
        return Err(TextError::FontNotFound("no font faces available".into()));
    }
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_gate_hands_out_fonts_once() {
        let mut gate = FontGate::ready(FontDatabase::new());
        assert!(gate.is_open());
        assert!(gate.poll().is_some());
        assert!(gate.poll().is_none());
    }

    #[test]
    fn test_failed_load_forces_gate_open() {
        let options = EngineOptions {
            load_system_fonts: false,
            font_dirs: vec![PathBuf::from("/nonexistent/fonts")],
            ..EngineOptions::default()
        };
        let mut gate = FontGate::load(&options);
        let fonts = gate.wait();

        assert_eq!(gate.state(), GateState::Failed);
        assert!(gate.is_open());
        assert!(fonts.is_some_and(|db| db.is_empty()));
    }

    #[test]
    fn test_poll_eventually_opens() {
        let options = EngineOptions { load_system_fonts: false, ..EngineOptions::default() };
        let mut gate = FontGate::load(&options);
        let mut fonts = None;
        for _ in 0..1000 {
            fonts = gate.poll();
            if gate.is_open() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert!(gate.is_open());
        assert!(fonts.is_some());
    }
}
