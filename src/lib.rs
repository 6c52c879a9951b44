//! # Pairwise BPE - Byte-Pair-Encoding Tokenizer
//!
//! A minimal byte-pair-encoding tokenizer over character symbols.
//!
//! Training learns an ordered list of merge rules by repeatedly:
//! 1. **Counting** every adjacent symbol pair in the current sequence
//! 2. **Selecting** the most frequent pair (ties go to the pair that appears first)
//! 3. **Replacing** every non-overlapping occurrence, left to right, with a new symbol
//!
//! Encoding applies the learned rules in training order; decoding undoes them
//! in reverse order, so `decode(encode(text)) == text`.
//!
//! ## Example
//!
//! ```
//! use pairwise_bpe::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new(256, 3).unwrap();
//! tokenizer.train("aaabdaaabac").unwrap();
//!
//! let ids = tokenizer.encode("aaabdaaabac").unwrap();
//! assert_eq!(ids.len(), 5);
//! assert_eq!(tokenizer.decode(&ids).unwrap(), "aaabdaaabac");
//!
//! for rule in tokenizer.rules() {
//!     println!("{rule}");
//! }
//! ```
//!
//! ## Symbol ids
//!
//! Base symbols are Unicode scalar values below `vocab_size`. Synthetic
//! symbols are allocated from `vocab_size` upward, one per merge, in
//! training order.

mod bigram;
mod config;
mod error;
mod id_gen;
mod merge;
mod symbol;
mod symbol_table;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use bigram::{count_bigrams, most_frequent_pair, BigramCounts};
pub use config::{TokenizerConfig, DEFAULT_MERGE_COUNT, DEFAULT_VOCAB_SIZE};
pub use error::{Result, TokenizerError};
pub use symbol::{Pair, Symbol};
pub use symbol_table::{Definition, MergeRule, SymbolTable};
pub use tokenizer::{Tokenizer, TrainingState, TrainingStats};
