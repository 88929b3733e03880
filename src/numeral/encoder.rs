// ============================================================================
// Numeral Encoder
// Greedy additive encoding of integers into Roman symbols
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use super::symbol::{Symbol, SYMBOLS};
use crate::domain::config::EncoderConfig;
use arrayvec::ArrayVec;
use std::fmt;

/// Encode `n` as an additive Roman numeral.
///
/// Non-positive input renders as the empty string. Subtractive pairs are
/// never produced: 4 is `"IIII"`, 2019 is `"MMXVIIII"`.
///
/// # Example
/// ```
/// use roman_numeral::numeral::encode;
///
/// assert_eq!(encode(2019), "MMXVIIII");
/// assert_eq!(encode(-5), "");
/// ```
pub fn encode(n: i64) -> String {
    let mut result = String::new();
    let mut remaining = n;

    while remaining > 0 {
        let symbol = SYMBOLS[max_value_index_under(remaining)];
        result.push(symbol.as_char());
        remaining -= symbol.value();
    }

    tracing::trace!(value = n, length = result.len(), "encoded numeral");
    result
}

/// Strict variant of [`encode`].
///
/// # Errors
/// Returns `NonPositive` for `n <= 0`.
pub fn try_encode(n: i64) -> NumeralResult<String> {
    if n <= 0 {
        return Err(NumeralError::NonPositive(n));
    }
    Ok(encode(n))
}

/// Index of the largest table value not exceeding `remaining`.
///
/// Scans from the top of the table down. Index 0 (`I`) is the floor, so
/// any `remaining < 1` also yields 0.
#[inline]
pub fn max_value_index_under(remaining: i64) -> usize {
    SYMBOLS
        .iter()
        .rposition(|symbol| symbol.value() <= remaining)
        .unwrap_or(0)
}

// ============================================================================
// Run-Length Decomposition
// ============================================================================

/// One symbol repeated `count` times within an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolRun {
    pub symbol: Symbol,
    pub count: u64,
}

impl SymbolRun {
    /// Total value contributed by this run.
    ///
    /// # Errors
    /// Returns `Overflow` if `symbol × count` does not fit in an i64.
    #[inline]
    pub fn value(&self) -> NumeralResult<i64> {
        i64::try_from(self.count)
            .ok()
            .and_then(|count| self.symbol.value().checked_mul(count))
            .ok_or(NumeralError::Overflow)
    }
}

impl fmt::Display for SymbolRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.count {
            f.write_str(self.symbol.as_str())?;
        }
        Ok(())
    }
}

/// Greedy decomposition of `n` as runs, most significant symbol first.
///
/// Runs never have a zero count. Empty for `n <= 0`.
pub fn tally(n: i64) -> ArrayVec<SymbolRun, 7> {
    let mut runs = ArrayVec::new();
    let mut remaining = n;

    while remaining > 0 {
        let symbol = SYMBOLS[max_value_index_under(remaining)];
        let count = remaining / symbol.value();
        remaining -= count * symbol.value();
        runs.push(SymbolRun {
            symbol,
            count: count as u64,
        });
    }

    runs
}

// ============================================================================
// Configured Encoder
// ============================================================================

/// Encoder carrying an [`EncoderConfig`].
///
/// `NumeralEncoder::default().encode(n)` is the same as [`encode`].
#[derive(Debug, Clone, Default)]
pub struct NumeralEncoder {
    config: EncoderConfig,
}

impl NumeralEncoder {
    /// Create an encoder with the given configuration.
    pub fn new(config: EncoderConfig) -> Self {
        tracing::debug!(?config, "creating numeral encoder");
        Self { config }
    }

    /// Create an encoder from a configuration, rejecting invalid ones.
    pub fn from_config(config: EncoderConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `n`, rendering rejected input per the configured policy.
    pub fn encode(&self, n: i64) -> String {
        if self.config.accepts(n) {
            encode(n)
        } else {
            self.config.invalid_input.rendering().to_string()
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::numeral::decoder::decode;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_positive_is_empty(n in i64::MIN..=0) {
            prop_assert_eq!(encode(n), "");
        }

        #[test]
        fn only_table_symbols(n in 1i64..1_000_000) {
            prop_assert!(encode(n).chars().all(|c| Symbol::from_char(c).is_some()));
        }

        #[test]
        fn additive_round_trip(n in 1i64..1_000_000) {
            prop_assert_eq!(decode(&encode(n)), Ok(n as u64));
        }

        #[test]
        fn deterministic(n in any::<i16>()) {
            prop_assert_eq!(encode(n as i64), encode(n as i64));
        }

        #[test]
        fn symbols_non_increasing(n in 1i64..1_000_000) {
            let encoded = encode(n);
            let values: Vec<i64> = encoded
                .chars()
                .filter_map(Symbol::from_char)
                .map(Symbol::value)
                .collect();
            prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn bounded_repetition(n in 1i64..1_000_000) {
            let encoded = encode(n);
            let count = |c: char| encoded.chars().filter(|&x| x == c).count();
            prop_assert!(count('I') <= 4);
            prop_assert!(count('V') <= 1);
            prop_assert!(count('X') <= 4);
            prop_assert!(count('L') <= 1);
            prop_assert!(count('C') <= 4);
            prop_assert!(count('D') <= 1);
        }

        #[test]
        fn tally_concatenates_to_encode(n in -1000i64..1_000_000) {
            let rendered: String = tally(n).iter().map(|run| run.to_string()).collect();
            prop_assert_eq!(rendered, encode(n));
        }
    }
}
