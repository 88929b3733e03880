// ============================================================================
// Roman Numeral Value Type
// A positive integer that displays and parses as an additive numeral
// ============================================================================

use super::decoder::decode;
use super::encoder::{encode, tally, SymbolRun};
use super::errors::{NumeralError, NumeralResult};
use arrayvec::ArrayVec;
use std::fmt;

/// Positive integer rendered in additive Roman notation.
///
/// Ordering and equality follow the integer value.
///
/// # Example
/// ```
/// use roman_numeral::numeral::RomanNumeral;
///
/// let year = RomanNumeral::new(2019)?;
/// assert_eq!(year.to_string(), "MMXVIIII");
///
/// let parsed: RomanNumeral = "XII".parse()?;
/// assert_eq!(parsed.value(), 12);
/// # Ok::<(), roman_numeral::numeral::NumeralError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RomanNumeral(i64);

impl RomanNumeral {
    /// Smallest representable numeral (`I`)
    pub const ONE: Self = Self(1);

    /// Create from an integer.
    ///
    /// # Errors
    /// Returns `NonPositive` for `value <= 0`.
    #[inline]
    pub fn new(value: i64) -> NumeralResult<Self> {
        if value <= 0 {
            return Err(NumeralError::NonPositive(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Run-length form of this numeral.
    pub fn runs(self) -> ArrayVec<SymbolRun, 7> {
        tally(self.0)
    }

    /// Checked addition; additive numerals concatenate.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumeralResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumeralError::Overflow)
    }
}

impl TryFrom<i64> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RomanNumeral> for i64 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.0))
    }
}

impl std::str::FromStr for RomanNumeral {
    type Err = NumeralError;

    /// Parse an additive numeral.
    ///
    /// # Examples
    /// - "XII" -> 12
    /// - "MMXVIIII" -> 2019
    /// - "IV" -> 6 (no subtractive pairs)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = decode(s)?;
        let value = i64::try_from(value).map_err(|_| NumeralError::Overflow)?;
        Self::new(value)
    }
}

// ============================================================================
// Serde (as numeral string)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for RomanNumeral {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RomanNumeral {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(RomanNumeral::new(12).unwrap().value(), 12);
        assert_eq!(RomanNumeral::new(0), Err(NumeralError::NonPositive(0)));
        assert_eq!(RomanNumeral::try_from(-5), Err(NumeralError::NonPositive(-5)));
    }

    #[test]
    fn test_display() {
        assert_eq!(RomanNumeral::ONE.to_string(), "I");
        assert_eq!(RomanNumeral::new(22).unwrap().to_string(), "XXII");
        assert_eq!(format!("{}", RomanNumeral::new(2019).unwrap()), "MMXVIIII");
    }

    #[test]
    fn test_from_str() {
        let x: RomanNumeral = "MMXVIIII".parse().unwrap();
        assert_eq!(x.value(), 2019);

        let y: RomanNumeral = "IV".parse().unwrap();
        assert_eq!(y.value(), 6);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<RomanNumeral, _> = "".parse();
        assert_eq!(result, Err(NumeralError::Empty));

        let result: Result<RomanNumeral, _> = "XIQ".parse();
        assert_eq!(
            result,
            Err(NumeralError::InvalidSymbol {
                symbol: 'Q',
                position: 2
            })
        );
    }

    #[test]
    fn test_comparison() {
        let a = RomanNumeral::new(100).unwrap();
        let b = RomanNumeral::new(50).unwrap();

        assert!(a > b);
        assert_eq!(a.min(b), b);
        assert_eq!(i64::from(a), 100);
    }

    #[test]
    fn test_checked_add() {
        let a = RomanNumeral::new(2000).unwrap();
        let b = RomanNumeral::new(19).unwrap();
        assert_eq!(a.checked_add(b).unwrap().to_string(), "MMXVIIII");

        let max = RomanNumeral::new(i64::MAX).unwrap();
        assert_eq!(max.checked_add(RomanNumeral::ONE), Err(NumeralError::Overflow));
    }

    #[test]
    fn test_runs() {
        let runs = RomanNumeral::new(12).unwrap().runs();
        assert_eq!(runs.len(), 2);
        let total: NumeralResult<i64> = runs.iter().map(SymbolRun::value).sum();
        assert_eq!(total, Ok(12));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let x = RomanNumeral::new(2019).unwrap();
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, r#""MMXVIIII""#);

        let parsed: RomanNumeral = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, x);

        assert!(serde_json::from_str::<RomanNumeral>(r#""ABC""#).is_err());
    }
}
