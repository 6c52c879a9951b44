use crate::error::{Result, TokenizerError};

/// Default number of base symbols (one per byte-sized code point).
pub const DEFAULT_VOCAB_SIZE: u32 = 256;

/// Default number of training merges.
pub const DEFAULT_MERGE_COUNT: usize = 3;

/// One past the largest Unicode code point.
const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// Construction parameters for a [`Tokenizer`](crate::Tokenizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Number of base symbols; characters with code points below this are encodable.
    pub vocab_size: u32,
    /// Number of merges `train` attempts.
    pub merge_count: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: DEFAULT_VOCAB_SIZE,
            merge_count: DEFAULT_MERGE_COUNT,
        }
    }
}

impl TokenizerConfig {
    pub fn with_vocab_size(mut self, vocab_size: u32) -> Self {
        self.vocab_size = vocab_size;
        self
    }

    pub fn with_merge_count(mut self, merge_count: usize) -> Self {
        self.merge_count = merge_count;
        self
    }

    /// Checks that the base vocabulary is non-empty, maps onto code points,
    /// and leaves room for `merge_count` synthetic ids.
    pub fn validate(&self) -> Result<()> {
        if self.vocab_size == 0 {
            return Err(TokenizerError::InvalidConfig(
                "vocab_size must be positive".into(),
            ));
        }
        if self.vocab_size > CODE_POINT_LIMIT {
            return Err(TokenizerError::InvalidConfig(format!(
                "vocab_size {} exceeds the Unicode code space ({CODE_POINT_LIMIT:#x})",
                self.vocab_size
            )));
        }
        let fits = u32::try_from(self.merge_count)
            .ok()
            .and_then(|merges| self.vocab_size.checked_add(merges))
            .is_some();
        if !fits {
            return Err(TokenizerError::InvalidConfig(format!(
                "merge_count {} overflows the symbol id space",
                self.merge_count
            )));
        }
        Ok(())
    }
}
