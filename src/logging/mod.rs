//! Tracing initialization.
//!
//! Idempotent setup so both standalone tools and embedding hosts can call it
//! freely; if the host already installed a global subscriber, ours backs off.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Default directives: info everywhere, debug for the scaling hot path.
const DEFAULT_FILTER: &str = "info,mimic_core::scaling=debug";

/// Initialize tracing with the default filter. `RUST_LOG` wins when set.
/// Safe to call multiple times; the first call wins.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_FILTER);
}

/// Initialize tracing with an explicit filter string.
pub fn init_tracing_with(filter: &str) {
    let filter = filter.to_string();
    TRACING_INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact();

        // A host subscriber may already be installed; that's fine.
        let _ = subscriber.try_init();
    });
}
