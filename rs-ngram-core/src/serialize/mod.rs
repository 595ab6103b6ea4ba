//! Output forms of a model.
//!
//! All serializers are pure functions of the vocabulary and the frequency
//! table; persisting the result is left to the caller.

/// Dense cumulative matrix, rendered as TSV.
pub mod matrix;

/// Relational rows (one per pair), rendered as CSV.
pub mod relational;

/// JSON document with metadata, consumed by rendering tools.
pub mod json;

/// Compact binary snapshot (`postcard`).
pub mod snapshot;

pub use matrix::{DenseMatrix, MatrixRow};
pub use relational::{RelationalRow, read_csv, relational_rows, sorted_by_count, verify_rows, write_csv};
pub use json::{CountScale, json_document, write_json};
