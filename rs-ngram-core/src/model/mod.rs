//! Top-level module for the bigram model.
//!
//! This module provides every stage after tokenization:
//! - Pair keys (`Bigram`)
//! - Pair counting (`FrequencyTable`, built from per-token `State` rows)
//! - Deterministic vocabulary indexing (`Vocabulary`)
//! - Run statistics and document metadata
//! - The assembled pipeline result (`BigramModel`)

/// Ordered pair of adjacent tokens.
pub mod bigram;

/// Complete model built from one text: table, vocabulary, statistics, metadata.
///
/// Enforces the empty and single-token input guards.
pub mod bigram_model;

/// Pair counts of a token sequence.
pub mod frequency_table;

/// Document description consumed by rendering tools.
pub mod metadata;

/// One row of the frequency table: followers of a single token.
pub mod state;

/// Summary statistics of a counted table.
pub mod stats;

/// Sorted vocabulary with dense indices.
pub mod vocabulary;

pub use bigram::Bigram;
pub use bigram_model::BigramModel;
pub use frequency_table::{FrequencyTable, count_bigrams};
pub use metadata::Metadata;
pub use stats::ProcessingStats;
pub use vocabulary::{Vocabulary, build_vocabulary};
