//! Config file watching for hot-reload.
//!
//! Watches the balance document's directory and invalidates the store when
//! the file changes. No background thread: the host pumps `poll()` from its
//! own loop, so reloads land at a point the host controls. Multiple
//! filesystem events between polls coalesce into one reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{info, warn};

use crate::config::store::ConfigStore;
use crate::config::ConfigError;

/// Outcome of one coalesced reload.
#[derive(Debug, Clone)]
pub struct ReloadEvent {
    pub path: PathBuf,
    /// Store generation after re-materialization.
    pub generation: u64,
}

/// Watches one config file and resets the shared store on change.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
    path: PathBuf,
    store: Arc<ConfigStore>,
}

impl ConfigWatcher {
    /// Watch `path` (the file's parent directory, non-recursively). Hot
    /// reload is optional; callers may downgrade a failure here to a warn
    /// and run without it.
    pub fn new(path: impl Into<PathBuf>, store: Arc<ConfigStore>) -> Result<Self, ConfigError> {
        let path = path.into();
        let (tx, rx) = channel();

        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        info!(?path, "config hot-reload enabled");

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            path,
            store,
        })
    }

    /// Drain pending filesystem events. If any of them touched the watched
    /// file, reset and re-materialize the store once and report it.
    pub fn poll(&mut self) -> Vec<ReloadEvent> {
        let mut touched = false;

        while let Ok(result) = self.receiver.try_recv() {
            match result {
                Ok(event) => {
                    if self.is_config_change(&event) {
                        touched = true;
                    }
                }
                Err(err) => warn!(%err, "file watcher error"),
            }
        }

        if !touched {
            return Vec::new();
        }

        self.store.reset();
        self.store.ensure_initialized();
        let generation = self.store.generation();
        info!(path = ?self.path, generation, "config reloaded");

        vec![ReloadEvent {
            path: self.path.clone(),
            generation,
        }]
    }

    fn is_config_change(&self, event: &Event) -> bool {
        let Some(file_name) = self.path.file_name() else {
            return false;
        };
        let kind_matches =
            event.kind.is_modify() || matches!(event.kind, notify::EventKind::Create(_));
        kind_matches && event.paths.iter().any(|p| p.file_name() == Some(file_name))
    }
}
