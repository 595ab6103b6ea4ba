//! Text normalization.
//!
//! Turns a raw text blob into the ordered token stream the counters consume.

/// Word tokenizer (standard and legacy rule sets).
pub mod tokenizer;

pub use tokenizer::{Tokenizer, TokenizerMode, tokenize, tokenize_legacy};
