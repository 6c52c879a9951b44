use std::fmt;

/// An atomic unit of a sequence.
///
/// Ids below the tokenizer's `vocab_size` are base symbols (one per character
/// code point). Ids at or above it are synthetic symbols, one per learned
/// merge, allocated contiguously in training order.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    /// Creates a symbol from its raw id.
    pub const fn new(id: u32) -> Self {
        Symbol(id)
    }

    /// Returns the raw id.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Returns the base symbol for a character (its Unicode scalar value).
    pub(crate) fn from_char(c: char) -> Self {
        Symbol(c as u32)
    }

    /// Table index for this symbol.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Symbol(id)
    }
}

impl From<Symbol> for u32 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two adjacent symbols (a bigram).
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Pair {
    pub left: Symbol,
    pub right: Symbol,
}

impl Pair {
    pub const fn new(left: Symbol, right: Symbol) -> Self {
        Self { left, right }
    }
}

impl From<(Symbol, Symbol)> for Pair {
    fn from((left, right): (Symbol, Symbol)) -> Self {
        Pair::new(left, right)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}
