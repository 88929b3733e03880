// ============================================================================
// Symbol Table
// The seven Roman symbols and their values, ordered ascending
// ============================================================================

use std::fmt;

/// A single Roman numeral symbol.
///
/// Discriminants follow table order, so `symbol as usize` is the index
/// into [`SYMBOLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbol {
    I = 0,
    V = 1,
    X = 2,
    L = 3,
    C = 4,
    D = 5,
    M = 6,
}

/// Symbol table in strictly increasing value order.
pub const SYMBOLS: [Symbol; 7] = [
    Symbol::I,
    Symbol::V,
    Symbol::X,
    Symbol::L,
    Symbol::C,
    Symbol::D,
    Symbol::M,
];

impl Symbol {
    /// Integer value of the symbol.
    #[inline]
    pub const fn value(self) -> i64 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// Canonical letter.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    /// Canonical letter as a string slice.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::I => "I",
            Symbol::V => "V",
            Symbol::X => "X",
            Symbol::L => "L",
            Symbol::C => "C",
            Symbol::D => "D",
            Symbol::M => "M",
        }
    }

    /// Look up a symbol by its letter. Only upper-case letters are accepted.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// Position in [`SYMBOLS`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
