// ============================================================================
// Numeral Decoder
// Additive decoding: the value of a numeral is the sum of its symbols
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use super::symbol::Symbol;

/// Decode an additive numeral.
///
/// Every symbol contributes its own value regardless of position, so
/// `"IV"` decodes to 6, not 4. Surrounding whitespace is ignored.
///
/// # Errors
/// - `Empty` if nothing is left after trimming
/// - `InvalidSymbol` for any character outside the table (positions are
///   character offsets into the trimmed input)
/// - `Overflow` if the sum exceeds `u64::MAX`
pub fn decode(s: &str) -> NumeralResult<u64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NumeralError::Empty);
    }

    s.chars().enumerate().try_fold(0u64, |sum, (position, c)| {
        let symbol =
            Symbol::from_char(c).ok_or(NumeralError::InvalidSymbol { symbol: c, position })?;
        sum.checked_add(symbol.value() as u64)
            .ok_or(NumeralError::Overflow)
    })
}
