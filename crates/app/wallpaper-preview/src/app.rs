//! Preview Application
//!
//! Main window and event loop.

use std::error::Error;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use wallpaper_engine::{EngineOptions, SessionStatus, WallpaperConfig, WallpaperSession, load_config};

use crate::blit::blit_scaled;
use crate::watch::ConfigWatcher;

/// Polling cadence while fonts load
const LOADING_POLL: Duration = Duration::from_millis(16);

/// Largest initial window size
const MAX_WINDOW: (f64, f64) = (1280.0, 800.0);

/// Window chrome color scheme; never affects the wallpaper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChromeTheme {
    #[default]
    Dark,
    Light,
}

impl ChromeTheme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Letterbox color (0xAARRGGBB)
    pub fn backdrop(self) -> u32 {
        match self {
            Self::Dark => 0xFF0D0D0D,
            Self::Light => 0xFFF0F0F0,
        }
    }

    /// Placeholder shown while fonts load
    pub fn loading(self) -> u32 {
        match self {
            Self::Dark => 0xFF1A1A1A,
            Self::Light => 0xFFDADADA,
        }
    }
}

/// Preview application
pub struct Preview {
    config: WallpaperConfig,
    config_path: Option<PathBuf>,
}

impl Preview {
    /// Create a preview, reading the configuration file if one was given.
    ///
    /// A missing or malformed initial file is an error; later edits that fail
    /// to parse are only logged.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let config = match &config_path {
            Some(path) => load_config(path)?,
            None => WallpaperConfig::default(),
        };
        Ok(Self { config, config_path })
    }

    /// Open the window and run until it is closed
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        // File events wake the loop through a user event
        let watcher = self.config_path.and_then(|path| {
            let proxy = event_loop.create_proxy();
            match ConfigWatcher::new(path, move || {
                let _ = proxy.send_event(());
            }) {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    log::warn!("Config hot reload disabled: {}", e);
                    None
                }
            }
        });

        let session = WallpaperSession::new(EngineOptions::default(), self.config, Instant::now());
        let mut app = PreviewApp::new(session, watcher);
        event_loop.run_app(&mut app)?;

        Ok(())
    }
}

/// Preview app state for event loop
struct PreviewApp {
    /// Window handle
    window: Option<Arc<Window>>,
    /// Surface for rendering
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    session: WallpaperSession,
    watcher: Option<ConfigWatcher>,
    theme: ChromeTheme,
}

impl PreviewApp {
    fn new(session: WallpaperSession, watcher: Option<ConfigWatcher>) -> Self {
        Self {
            window: None,
            surface: None,
            session,
            watcher,
            theme: ChromeTheme::default(),
        }
    }

    /// Present the current frame
    fn render(&mut self) {
        let Some(window) = &self.window else { return };
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };

        let Some(surface) = &mut self.surface else { return };
        if let Err(e) = surface.resize(width, height) {
            log::warn!("Surface resize failed: {}", e);
            return;
        }
        let mut buffer = match surface.buffer_mut() {
            Ok(b) => b,
            Err(_) => return,
        };

        match (self.session.status(), self.session.canvas()) {
            (SessionStatus::Ready, Some(canvas)) => {
                blit_scaled(canvas, &mut buffer, size.width, size.height, self.theme.backdrop());
            }
            _ => buffer.fill(self.theme.loading()),
        }

        let _ = buffer.present();
    }

    /// Handle keyboard input
    fn handle_key(&mut self, event: KeyEvent, event_loop: &ActiveEventLoop) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        match event.physical_key {
            PhysicalKey::Code(KeyCode::KeyS) => self.export(),
            PhysicalKey::Code(KeyCode::KeyT) => {
                self.theme = self.theme.toggled();
                log::debug!("Chrome theme: {:?}", self.theme);
                self.request_redraw();
            }
            PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
            _ => {}
        }
    }

    /// Save the current frame into the working directory
    fn export(&self) {
        let dir = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                log::error!("No working directory to export into: {}", e);
                return;
            }
        };
        match self.session.export(&dir) {
            Ok(path) => log::info!("Saved {}", path.display()),
            Err(e) => log::warn!("Export failed: {}", e),
        }
    }

    fn reload_config(&mut self, now: Instant) {
        if let Some(config) = self.watcher.as_ref().and_then(ConfigWatcher::check_and_reload) {
            self.session.set_config(config, now);
        }
    }

    /// Next time the loop has to wake up
    fn wake_at(&self, now: Instant) -> Option<Instant> {
        let mut wake = self.session.next_deadline();
        if !self.session.is_ready() {
            wake = Some(wake.map_or(now + LOADING_POLL, |w| w.min(now + LOADING_POLL)));
        }
        wake
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for PreviewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let layout = self.session.layout();
        let scale = (MAX_WINDOW.0 / layout.width as f64)
            .min(MAX_WINDOW.1 / layout.height as f64)
            .min(1.0);
        let attrs = Window::default_attributes()
            .with_title("Quote Wallpaper")
            .with_inner_size(winit::dpi::LogicalSize::new(
                layout.width as f64 * scale,
                layout.height as f64 * scale,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        // Create software rendering surface
        let surface = softbuffer::Context::new(window.clone())
            .and_then(|context| softbuffer::Surface::new(&context, window.clone()));
        match surface {
            Ok(surface) => self.surface = Some(surface),
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.render();
            }
            WindowEvent::Resized(_) => {
                self.request_redraw();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event, event_loop);
            }
            _ => {}
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, _event: ()) {
        self.reload_config(Instant::now());
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        let was_ready = self.session.is_ready();
        let painted = self.session.poll(now).is_some();
        if painted || was_ready != self.session.is_ready() {
            self.request_redraw();
        }

        match self.wake_at(now) {
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
