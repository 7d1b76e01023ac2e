//! Process-wide holder for the active balance config.
//!
//! A `ConfigStore` is constructed explicitly by the host and shared (usually
//! behind an `Arc`) with every consumer; there is no ambient global. The
//! active document materializes lazily on first `get()` and is replaced
//! wholesale on `reset()` + re-`get()`.
//!
//! Concurrency discipline: readers take the read lock and clone an `Arc` to
//! a fully-constructed, validated document. Materialization re-checks under
//! the write lock, so concurrent first readers race to the lock but exactly
//! one of them loads; the rest observe the published instance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use super::{BalanceConfig, ConfigError};

/// External load path for the persisted document. Implementations are
/// expected to be cheap to call repeatedly; the store only invokes them on
/// materialization.
pub trait ConfigSource: Send + Sync {
    fn load(&self) -> Result<BalanceConfig, ConfigError>;
}

/// Loads the document from a JSON file.
pub struct FileSource {
    path: std::path::PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<BalanceConfig, ConfigError> {
        BalanceConfig::load_from(&self.path)
    }
}

/// Always yields the built-in defaults. Useful for tests and hosts without
/// a persisted document.
pub struct DefaultSource;

impl ConfigSource for DefaultSource {
    fn load(&self) -> Result<BalanceConfig, ConfigError> {
        Ok(BalanceConfig::default())
    }
}

impl<F> ConfigSource for F
where
    F: Fn() -> Result<BalanceConfig, ConfigError> + Send + Sync,
{
    fn load(&self) -> Result<BalanceConfig, ConfigError> {
        self()
    }
}

/// Shared holder for the currently-active config.
pub struct ConfigStore {
    source: Box<dyn ConfigSource>,
    active: RwLock<Option<Arc<BalanceConfig>>>,
    generation: AtomicU64,
}

impl ConfigStore {
    pub fn new(source: impl ConfigSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            active: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Store backed by a JSON file at `path`.
    pub fn from_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }

    /// Store that always materializes defaults.
    pub fn with_defaults() -> Self {
        Self::new(DefaultSource)
    }

    /// Current active config, materializing it on first call. Total: a load
    /// or validation failure substitutes the built-in defaults, which are
    /// literal constants and always constructible.
    pub fn get(&self) -> Arc<BalanceConfig> {
        // Fast path: already materialized.
        if let Some(config) = self.active.read().unwrap().as_ref() {
            return Arc::clone(config);
        }

        let mut slot = self.active.write().unwrap();
        // Re-check: another caller may have materialized while we waited.
        if let Some(config) = slot.as_ref() {
            return Arc::clone(config);
        }

        let config = Arc::new(self.materialize());
        *slot = Some(Arc::clone(&config));
        self.generation.fetch_add(1, Ordering::Release);
        config
    }

    /// Warm the store at startup so the first simulation step doesn't pay
    /// for the load.
    pub fn ensure_initialized(&self) {
        let _ = self.get();
    }

    /// Invalidate the active config. The next `get()` re-runs the source.
    pub fn reset(&self) {
        *self.active.write().unwrap() = None;
        debug!("config store reset, next access re-materializes");
    }

    /// Monotone counter bumped on each materialization. Lets callers detect
    /// that a reload happened without comparing documents.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn materialize(&self) -> BalanceConfig {
        match self.source.load() {
            Ok(config) if config.validate() => config,
            Ok(_) => {
                warn!("loaded config failed validation, using defaults");
                BalanceConfig::default()
            }
            Err(err) => {
                warn!(%err, "config source failed, using defaults");
                BalanceConfig::default()
            }
        }
    }
}
