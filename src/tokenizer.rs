//! Byte-pair-encoding tokenizer.
//!
//! Training repeatedly replaces the most frequent adjacent pair of symbols
//! with a new synthetic symbol and records the rule. Encoding replays those
//! rules in training order; decoding undoes them in reverse.
//!
//! # Example
//!
//! ```
//! use pairwise_bpe::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::new(256, 3).unwrap();
//! let merged = tokenizer.train("aaabdaaabac").unwrap();
//! assert_eq!(merged.len(), 5);
//!
//! let encoded = tokenizer.encode("aaabdaaabac").unwrap();
//! assert_eq!(encoded, merged);
//! assert_eq!(tokenizer.decode(&encoded).unwrap(), "aaabdaaabac");
//! ```

use crate::bigram::count_bigrams;
use crate::config::TokenizerConfig;
use crate::error::{Result, TokenizerError};
use crate::id_gen::IdGenerator;
use crate::merge::{expand_symbol, merge_pair};
use crate::symbol::Symbol;
use crate::symbol_table::{Definition, MergeRule, SymbolTable};

/// Training lifecycle of a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingState {
    Untrained,
    Trained,
}

/// Main tokenizer data structure.
///
/// Owns the symbol table exclusively. `encode` and `decode` take `&self`,
/// so a trained instance can be shared read-only.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,

    /// Base and synthetic symbol definitions
    pub(crate) table: SymbolTable,

    /// Allocator for synthetic ids; the only place new ids come from
    id_gen: IdGenerator,

    state: TrainingState,

    /// Statistics from the last `train` call
    last_training: Option<TrainingStats>,
}

impl Tokenizer {
    /// Creates an untrained tokenizer.
    pub fn new(vocab_size: u32, merge_count: usize) -> Result<Self> {
        Self::from_config(TokenizerConfig {
            vocab_size,
            merge_count,
        })
    }

    /// Creates an untrained tokenizer from a validated config.
    pub fn from_config(config: TokenizerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            table: SymbolTable::new(config.vocab_size),
            id_gen: IdGenerator::starting_at(config.vocab_size),
            state: TrainingState::Untrained,
            last_training: None,
        })
    }

    /// Allocates the next synthetic symbol id.
    ///
    /// Always equals the current size of the symbol table.
    fn allocate_next_symbol_id(&mut self) -> Symbol {
        debug_assert_eq!(self.id_gen.peek().index(), self.table.len());
        self.id_gen.get()
    }

    /// Performs one training step on `sequence`.
    ///
    /// Picks the most frequent pair, allocates a new symbol for it, rewrites
    /// every non-overlapping occurrence left to right and records the rule.
    /// The symbol table is untouched on every error:
    /// - [`TokenizerError::AlreadyTrained`] once `train` has finished
    /// - [`TokenizerError::MergeLimitReached`] once `merge_count` rules exist
    /// - [`TokenizerError::UnknownSymbol`] for ids the table does not define
    /// - [`TokenizerError::NoPairAvailable`] for fewer than two symbols
    pub fn apply_one_merge(&mut self, sequence: &[Symbol]) -> Result<Vec<Symbol>> {
        if self.state == TrainingState::Trained {
            return Err(TokenizerError::AlreadyTrained);
        }
        if self.num_merges() >= self.config.merge_count {
            return Err(TokenizerError::MergeLimitReached(self.num_merges()));
        }
        // New ids must exceed every input id
        if let Some(unknown) = sequence
            .iter()
            .find(|&&s| matches!(self.table.get(s), None | Some(Definition::Reserved)))
        {
            return Err(TokenizerError::UnknownSymbol(unknown.id()));
        }

        let (pair, count) = count_bigrams(sequence)
            .most_frequent()
            .ok_or(TokenizerError::NoPairAvailable)?;

        let symbol = self.allocate_next_symbol_id();
        let merged = merge_pair(sequence, pair, symbol);
        self.table.record(symbol, pair);

        log::debug!(
            "merge {}: {} x{} -> {} ({} -> {} symbols)",
            self.id_gen.allocated(),
            pair,
            count,
            symbol,
            sequence.len(),
            merged.len()
        );

        Ok(merged)
    }

    /// Learns up to `merge_count` rules from `text`.
    ///
    /// Rules already learned through `apply_one_merge` are replayed on the
    /// text first. Stops early, without error, once no pair remains. Returns
    /// the merged form of the training text.
    pub fn train(&mut self, text: &str) -> Result<Vec<Symbol>> {
        if self.state == TrainingState::Trained {
            return Err(TokenizerError::AlreadyTrained);
        }

        let base = self.table.base_symbols(text)?;
        let input_length = base.len();
        let mut sequence = self.apply_rules(base);

        log::info!(
            "Starting BPE training: {} symbols, {} merges requested",
            input_length,
            self.config.merge_count
        );

        let mut stopped_early = false;
        while self.num_merges() < self.config.merge_count {
            match self.apply_one_merge(&sequence) {
                Ok(merged) => sequence = merged,
                Err(TokenizerError::NoPairAvailable) => {
                    log::debug!(
                        "No pair available after {} merges, stopping",
                        self.num_merges()
                    );
                    stopped_early = true;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.state = TrainingState::Trained;
        let stats = TrainingStats {
            input_length,
            output_length: sequence.len(),
            merges_performed: self.num_merges(),
            stopped_early,
        };
        self.last_training = Some(stats);

        log::info!(
            "Finished training: {} merges, {} -> {} symbols",
            stats.merges_performed,
            stats.input_length,
            stats.output_length
        );

        Ok(sequence)
    }

    /// Encodes text by applying every learned rule in training order.
    pub fn encode(&self, text: &str) -> Result<Vec<Symbol>> {
        let base = self.table.base_symbols(text)?;
        Ok(self.apply_rules(base))
    }

    fn apply_rules(&self, mut sequence: Vec<Symbol>) -> Vec<Symbol> {
        for rule in self.table.rules() {
            if sequence.len() < 2 {
                break;
            }
            sequence = merge_pair(&sequence, rule.pair(), rule.symbol);
        }
        sequence
    }

    /// Decodes symbols by undoing every learned rule in reverse order.
    ///
    /// Fails with [`TokenizerError::UnknownSymbol`] on any id the table does
    /// not define.
    pub fn decode(&self, sequence: &[Symbol]) -> Result<String> {
        if let Some(unknown) = sequence.iter().find(|s| self.table.get(**s).is_none()) {
            return Err(TokenizerError::UnknownSymbol(unknown.id()));
        }

        let mut sequence = sequence.to_vec();
        for rule in self.table.rules().rev() {
            sequence = expand_symbol(&sequence, rule.symbol, rule.pair());
        }

        self.table.render(&sequence)
    }

    /// Drops all learned rules and returns to the untrained state.
    pub fn reset(&mut self) {
        self.table.clear_merges();
        self.id_gen.reset();
        self.state = TrainingState::Untrained;
        self.last_training = None;
    }

    /// Iterates learned rules in training order.
    pub fn rules(&self) -> impl DoubleEndedIterator<Item = MergeRule> + ExactSizeIterator + '_ {
        self.table.rules()
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    pub fn vocab_size(&self) -> u32 {
        self.config.vocab_size
    }

    pub fn merge_count(&self) -> usize {
        self.config.merge_count
    }

    /// Number of rules learned so far.
    pub fn num_merges(&self) -> usize {
        self.table.num_merges()
    }

    pub fn state(&self) -> TrainingState {
        self.state
    }

    pub fn is_trained(&self) -> bool {
        self.state == TrainingState::Trained
    }

    /// Returns statistics from the last `train` call, if any.
    pub fn training_stats(&self) -> Option<TrainingStats> {
        self.last_training
    }
}

/// Statistics about a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingStats {
    /// Number of base symbols in the training text
    pub input_length: usize,
    /// Number of symbols after all merges
    pub output_length: usize,
    /// Number of rules learned
    pub merges_performed: usize,
    /// Whether training ran out of pairs before `merge_count`
    pub stopped_early: bool,
}

impl TrainingStats {
    /// Returns the merged length as a percentage of the input length.
    ///
    /// Lower is better. 100% means no compression.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_length == 0 {
            0.0
        } else {
            (self.output_length as f64 / self.input_length as f64) * 100.0
        }
    }
}
