//! Bigram frequency model builder.
//!
//! This crate turns raw natural-language text into a bigram model:
//! - Word tokenization with fixed lexical rules
//! - Counting of adjacent token pairs
//! - Deterministic, ordinally sorted vocabulary indexing
//! - Serialization as a dense cumulative matrix (TSV), relational rows (CSV),
//!   a JSON document and a binary snapshot
//!
//! Every stage is a pure function of its input; a model is rebuilt from
//! scratch for each text.

/// Build options (tokenizer mode, document description).
pub mod config;

/// Error type shared by every stage.
pub mod error;

/// File loading and output path helpers.
pub mod io;

/// Pair counting, vocabulary, statistics and the assembled model.
pub mod model;

/// TSV, CSV, JSON and binary output forms.
pub mod serialize;

/// Tokenization.
pub mod text;

pub use config::BuildOptions;
pub use error::{ModelError, ModelResult};
pub use model::{Bigram, BigramModel, FrequencyTable, Metadata, ProcessingStats, Vocabulary};
pub use text::{Tokenizer, TokenizerMode};
