// ============================================================================
// Roman Numeral Library
// Additive Roman numeral encoding with a calendar-date report
// ============================================================================

//! # Roman Numeral
//!
//! Converts positive integers into Roman numerals using additive notation
//! only: every value is a greedy sum of `I V X L C D M`, so 4 is `IIII` and
//! 2019 is `MMXVIIII`. Subtractive pairs such as `IV` are never emitted.
//!
//! ## Features
//!
//! - **Pure, const-table encoder** safe to call from any thread
//! - **Configurable invalid-input rendering** (`""` or `"INVALID"`)
//! - **Additive decoder** and a `RomanNumeral` value type
//! - **Date report** printing year, month and day as numerals
//!
//! ## Example
//!
//! ```rust
//! use roman_numeral::prelude::*;
//!
//! assert_eq!(encode(12), "XII");
//! assert_eq!(encode(0), "");
//!
//! let encoder = NumeralEncoder::new(EncoderConfig::marked());
//! assert_eq!(encoder.encode(-1), "INVALID");
//!
//! let report = DateReport::from_ymd(2019, 12, 22).unwrap();
//! assert_eq!(report.line(DateField::Year).numeral, "MMXVIIII");
//! ```

pub mod domain;
pub mod numeral;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DateField, DateReport, EncoderConfig, InvalidInputPolicy, ReportLine,
    };
    pub use crate::numeral::{
        decode, encode, tally, try_encode, NumeralEncoder, NumeralError, NumeralResult,
        RomanNumeral, Symbol, SymbolRun, SYMBOLS,
    };
}
