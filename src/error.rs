//! Error types for training, encoding and decoding.

use thiserror::Error;

/// Errors produced by the tokenizer.
///
/// All variants are recoverable; the caller decides whether to retry with
/// different parameters or give up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// Fewer than two symbols remain, so no bigram exists to merge.
    #[error("no more merges available: sequence has fewer than two symbols")]
    NoPairAvailable,

    /// A symbol id with no entry in the symbol table was passed to decode.
    #[error("unrecognized symbol: {0}")]
    UnknownSymbol(u32),

    /// An input character falls outside the base vocabulary.
    #[error("unrecognized unit {0:?}: code point is outside the base vocabulary")]
    UnknownUnit(char),

    /// Construction parameters were rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A training step was requested on an instance that is already trained.
    #[error("tokenizer is already trained; call reset() before training again")]
    AlreadyTrained,

    /// A training step would learn more rules than `merge_count` allows.
    #[error("merge limit reached: {0} merges already learned")]
    MergeLimitReached(usize),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
