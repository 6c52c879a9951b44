//! Arena-backed symbol table.
//!
//! Entries are indexed directly by symbol id. Base entries occupy
//! `[0, vocab_size)` and are fixed at construction; synthetic entries are
//! appended one per learned merge and never reordered.

use crate::error::{Result, TokenizerError};
use crate::symbol::{Pair, Symbol};
use std::fmt;

/// What a symbol id stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition {
    /// A base symbol for a literal character.
    Base(char),
    /// A base slot whose code point is not a valid `char` (surrogates).
    Reserved,
    /// A synthetic symbol standing for the pair it replaced.
    Merge(Pair),
}

/// A learned merge: `left right -> symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRule {
    pub left: Symbol,
    pub right: Symbol,
    pub symbol: Symbol,
}

impl MergeRule {
    pub fn pair(&self) -> Pair {
        Pair::new(self.left, self.right)
    }
}

impl fmt::Display for MergeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.left, self.right, self.symbol)
    }
}

/// Mapping from symbol id to [`Definition`].
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<Definition>,
    vocab_size: u32,
}

impl SymbolTable {
    /// Creates a table holding the base symbols `[0, vocab_size)`.
    pub(crate) fn new(vocab_size: u32) -> Self {
        let entries = (0..vocab_size)
            .map(|id| char::from_u32(id).map_or(Definition::Reserved, Definition::Base))
            .collect();

        Self {
            entries,
            vocab_size,
        }
    }

    /// Number of base symbols.
    pub fn vocab_size(&self) -> u32 {
        self.vocab_size
    }

    /// Total number of entries, base and synthetic.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of synthetic entries.
    pub fn num_merges(&self) -> usize {
        self.entries.len() - self.vocab_size as usize
    }

    /// Looks up a symbol's definition.
    pub fn get(&self, symbol: Symbol) -> Option<&Definition> {
        self.entries.get(symbol.index())
    }

    /// Returns true if `symbol` was allocated by a merge.
    pub fn is_synthetic(&self, symbol: Symbol) -> bool {
        symbol.id() >= self.vocab_size && symbol.index() < self.entries.len()
    }

    /// Base symbol for a character, if the character is in the vocabulary.
    pub(crate) fn base_symbol(&self, c: char) -> Result<Symbol> {
        let symbol = Symbol::from_char(c);
        if symbol.id() < self.vocab_size {
            Ok(symbol)
        } else {
            Err(TokenizerError::UnknownUnit(c))
        }
    }

    /// Maps text to one base symbol per character.
    pub(crate) fn base_symbols(&self, text: &str) -> Result<Vec<Symbol>> {
        text.chars().map(|c| self.base_symbol(c)).collect()
    }

    /// Appends a synthetic entry. `symbol` must be the next free id.
    pub(crate) fn record(&mut self, symbol: Symbol, pair: Pair) {
        assert_eq!(
            symbol.index(),
            self.entries.len(),
            "Synthetic symbols must be recorded in allocation order"
        );
        self.entries.push(Definition::Merge(pair));
    }

    /// Drops every synthetic entry.
    pub(crate) fn clear_merges(&mut self) {
        self.entries.truncate(self.vocab_size as usize);
    }

    /// Iterates learned merges in training order.
    pub fn rules(&self) -> impl DoubleEndedIterator<Item = MergeRule> + ExactSizeIterator + '_ {
        let first = self.vocab_size;
        self.entries[first as usize..]
            .iter()
            .enumerate()
            .map(move |(offset, definition)| match *definition {
                Definition::Merge(pair) => MergeRule {
                    left: pair.left,
                    right: pair.right,
                    symbol: Symbol::new(first + offset as u32),
                },
                _ => unreachable!("entries past vocab_size are always merges"),
            })
    }

    /// Expands a symbol down to the literal text it stands for.
    pub fn expand(&self, symbol: Symbol) -> Result<String> {
        let mut out = String::new();
        let mut stack = vec![symbol];

        while let Some(current) = stack.pop() {
            match self.get(current) {
                Some(Definition::Base(c)) => out.push(*c),
                Some(Definition::Merge(pair)) => {
                    stack.push(pair.right);
                    stack.push(pair.left);
                }
                Some(Definition::Reserved) | None => {
                    return Err(TokenizerError::UnknownSymbol(current.id()))
                }
            }
        }

        Ok(out)
    }

    /// Short display name for a symbol.
    ///
    /// Base symbols show as their character. The first 26 synthetic symbols
    /// show as `Z`, `Y`, ... `A` in training order; everything else as `<id>`.
    /// Labels are for display only and can collide with uppercase base letters.
    pub fn label(&self, symbol: Symbol) -> String {
        match self.get(symbol) {
            Some(Definition::Base(c)) => c.to_string(),
            Some(Definition::Merge(_)) => {
                let offset = symbol.id() - self.vocab_size;
                match u8::try_from(offset) {
                    Ok(offset) if offset < 26 => char::from(b'Z' - offset).to_string(),
                    _ => format!("<{symbol}>"),
                }
            }
            Some(Definition::Reserved) | None => format!("<{symbol}>"),
        }
    }

    /// Concatenates the labels of a sequence, e.g. `XdXac`.
    pub fn render_labels(&self, sequence: &[Symbol]) -> String {
        sequence.iter().map(|&s| self.label(s)).collect()
    }

    /// Describes a rule with labels instead of ids, e.g. `Z a -> Y`.
    pub fn describe(&self, rule: &MergeRule) -> String {
        format!(
            "{} {} -> {}",
            self.label(rule.left),
            self.label(rule.right),
            self.label(rule.symbol)
        )
    }

    /// Renders base symbols back to characters.
    ///
    /// Fails on any symbol that is not a base symbol with a literal unit.
    pub(crate) fn render(&self, sequence: &[Symbol]) -> Result<String> {
        sequence
            .iter()
            .map(|&s| match self.get(s) {
                Some(Definition::Base(c)) => Ok(*c),
                _ => Err(TokenizerError::UnknownSymbol(s.id())),
            })
            .collect()
    }
}
