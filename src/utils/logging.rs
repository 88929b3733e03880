// ============================================================================
// Logging Setup
// tracing-subscriber initialisation for binaries
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber writing to stderr.
///
/// Honors `RUST_LOG`; falls back to [`DEFAULT_FILTER`]. Returns `true` if
/// this call installed the subscriber; later calls leave the first one in
/// place and return `false`.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let installed = result.is_ok();
    if installed {
        tracing::debug!("logging initialised");
    }
    installed
}
