// ============================================================================
// Utilities Module
// Process-level helpers for the binaries
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, DEFAULT_FILTER};
