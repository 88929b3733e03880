// ============================================================================
// Domain Module
// Encoder configuration and the date report built on top of the encoder
// ============================================================================

pub mod config;
pub mod report;

pub use config::{EncoderConfig, InvalidInputPolicy, INVALID_MARKER};
pub use report::{DateField, DateReport, ReportLine};
