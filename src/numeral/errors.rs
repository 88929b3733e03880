// ============================================================================
// Numeral Errors
// Error types for strict encoding and additive decoding
// ============================================================================

use std::fmt;

/// Errors that can occur when building or parsing a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Value is zero or negative and has no numeral
    NonPositive(i64),
    /// Input string is empty after trimming
    Empty,
    /// Character outside the symbol table
    InvalidSymbol { symbol: char, position: usize },
    /// Decoded sum exceeded u64::MAX
    Overflow,
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::NonPositive(value) => {
                write!(f, "non-positive value: {} has no numeral", value)
            },
            NumeralError::Empty => write!(f, "empty numeral"),
            NumeralError::InvalidSymbol { symbol, position } => {
                write!(f, "invalid symbol '{}' at position {}", symbol, position)
            },
            NumeralError::Overflow => {
                write!(f, "arithmetic overflow: numeral value exceeded maximum")
            },
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral operations
pub type NumeralResult<T> = Result<T, NumeralError>;
