//! Configuration file hot reload
//!
//! The file's directory is watched with `notify`; events naming the file
//! queue up on a channel and are drained from the event loop. A changed file
//! is parsed and handed to the session like any other edit.

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};
use wallpaper_engine::{WallpaperConfig, load_config};

/// Watches one TOML configuration file
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<Result<Event, notify::Error>>,
    path: PathBuf,
    file_name: Option<OsString>,
}

impl ConfigWatcher {
    /// Start watching `path`.
    ///
    /// `wake` runs on the watcher thread after every event so the host can
    /// leave its idle wait.
    pub fn new(path: PathBuf, wake: impl Fn() + Send + 'static) -> Result<Self, notify::Error> {
        let (tx, rx) = channel();

        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
            wake();
        })?;

        // Editors often replace the file, so watch its directory
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        log::info!("Watching config file: {}", path.display());

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            file_name: path.file_name().map(OsString::from),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events and reload the file if any of them touched it.
    ///
    /// Parse errors are logged and skipped; the previous configuration stays.
    pub fn check_and_reload(&self) -> Option<WallpaperConfig> {
        let mut should_reload = false;

        while let Ok(event) = self.receiver.try_recv() {
            match event {
                Ok(event) => {
                    let is_config = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().is_some_and(|n| Some(n) == self.file_name.as_deref()));

                    if is_config && (event.kind.is_modify() || event.kind.is_create()) {
                        should_reload = true;
                    }
                }
                Err(e) => {
                    log::error!("Config watch error: {}", e);
                }
            }
        }

        if !should_reload {
            return None;
        }

        match load_config(&self.path) {
            Ok(config) => {
                log::info!("Reloaded config from {}", self.path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl std::fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigWatcher").field("path", &self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Fresh directory holding a config file
    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("wallpaper.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn counting_watcher(path: &Path) -> (ConfigWatcher, Arc<AtomicUsize>) {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();
        let watcher = ConfigWatcher::new(path.to_path_buf(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        (watcher, wakes)
    }

    /// Block until the watcher thread has delivered at least one event
    fn wait_for_wake(wakes: &AtomicUsize) {
        for _ in 0..300 {
            if wakes.load(Ordering::SeqCst) > 0 {
                // Let the rest of the burst arrive
                std::thread::sleep(Duration::from_millis(50));
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("no file event delivered");
    }

    #[test]
    fn test_no_events_no_reload() {
        let path = temp_config("watch-idle", "quote = \"First\"");
        let (watcher, _) = counting_watcher(&path);
        assert!(watcher.check_and_reload().is_none());
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_modified_file_is_reloaded() {
        let path = temp_config("watch-modify", "quote = \"First\"");
        let (watcher, wakes) = counting_watcher(&path);

        std::fs::write(&path, "quote = \"Second\"").unwrap();
        wait_for_wake(&wakes);

        assert_eq!(watcher.check_and_reload().map(|c| c.quote), Some("Second".to_string()));
        // The burst was drained in one go
        assert!(watcher.check_and_reload().is_none());
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_invalid_file_is_skipped() {
        let path = temp_config("watch-invalid", "quote = \"First\"");
        let (watcher, wakes) = counting_watcher(&path);

        std::fs::write(&path, "textColor = \"not a color\"").unwrap();
        wait_for_wake(&wakes);
        assert!(watcher.check_and_reload().is_none());
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_sibling_files_are_ignored() {
        let path = temp_config("watch-sibling", "quote = \"First\"");
        let (watcher, wakes) = counting_watcher(&path);

        std::fs::write(path.with_file_name("notes.txt"), "unrelated").unwrap();
        wait_for_wake(&wakes);
        assert!(watcher.check_and_reload().is_none());
        std::fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_missing_directory_fails_to_watch() {
        let result = ConfigWatcher::new(PathBuf::from("/nonexistent/dir/wallpaper.toml"), || {});
        assert!(result.is_err());
    }
}
