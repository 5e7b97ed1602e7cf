//! Logging bootstrap
//!
//! Installs a `tracing-subscriber` fmt layer on stderr so stdout stays free
//! for run reports. `RUST_LOG` takes precedence over the configured level.
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Initializes the global subscriber once; later calls are no-ops.
pub fn init(level: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));
        // Another subscriber may already be installed (tests, embedding apps).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
