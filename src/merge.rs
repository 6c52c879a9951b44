//! Single-pass sequence rewrites used by training, encode and decode.

use crate::symbol::{Pair, Symbol};

/// Replaces every non-overlapping occurrence of `pair` with `replacement`.
///
/// Scans left to right once. After a match the scan resumes past both
/// consumed symbols, so `a a a` with pair `(a, a)` becomes `X a`.
pub(crate) fn merge_pair(sequence: &[Symbol], pair: Pair, replacement: Symbol) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(sequence.len());
    let mut i = 0;

    while i < sequence.len() {
        if i + 1 < sequence.len() && sequence[i] == pair.left && sequence[i + 1] == pair.right {
            out.push(replacement);
            i += 2;
        } else {
            out.push(sequence[i]);
            i += 1;
        }
    }

    out
}

/// Replaces every occurrence of `symbol` with the two symbols of `pair`.
pub(crate) fn expand_symbol(sequence: &[Symbol], symbol: Symbol, pair: Pair) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(sequence.len() + sequence.len() / 2);

    for &s in sequence {
        if s == symbol {
            out.push(pair.left);
            out.push(pair.right);
        } else {
            out.push(s);
        }
    }

    out
}
