// ============================================================================
// Numeral Module
// Additive Roman numeral encoding and decoding
// ============================================================================
//
// This module provides:
// - Symbol / SYMBOLS: the constant symbol table
// - encode: greedy additive encoding (4 -> "IIII", never "IV")
// - decode: additive decoding back to an integer
// - RomanNumeral: positive value type with Display/FromStr
// - NumeralError: error types for the fallible operations
//
// All functions are pure; the table is const data.

pub mod decoder;
pub mod encoder;
mod errors;
mod roman;
pub mod symbol;

pub use decoder::decode;
pub use encoder::{encode, max_value_index_under, tally, try_encode, NumeralEncoder, SymbolRun};
pub use errors::{NumeralError, NumeralResult};
pub use roman::RomanNumeral;
pub use symbol::{Symbol, SYMBOLS};
