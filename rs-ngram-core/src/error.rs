use std::path::PathBuf;

/// Errors raised while building or serializing a bigram model.
///
/// Every variant is fatal for the current invocation: the pipeline either
/// produces a complete, consistent model or one of these.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
	/// The source path does not exist.
	#[error("file not found: '{}'", path.display())]
	FileNotFound {
		path: PathBuf,
	},

	/// The source path exists but could not be read (permissions, directory, ...).
	#[error("unable to read '{}': {source}", path.display())]
	Unreadable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The file bytes are not valid UTF-8.
	#[error("unable to decode '{}' as UTF-8", path.display())]
	Decode {
		path: PathBuf,
	},

	/// Tokenization left nothing to count.
	#[error("no tokens found in the input text")]
	EmptyTokenStream,

	/// A single token survived tokenization, no pair can be formed.
	#[error("not enough tokens to form bigrams (the input contains only one token)")]
	InsufficientTokens,

	/// Counting produced an empty table.
	#[error("no bigrams found")]
	EmptyFrequencyTable,

	/// A relational row disagrees with the vocabulary it was written against.
	#[error("word '{word}' does not match vocabulary index {index}")]
	UnknownWord {
		word: String,
		index: usize,
	},

	/// A build option failed validation.
	#[error("invalid option: {0}")]
	InvalidOption(String),

	/// I/O failure while writing an artifact.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// CSV encoding or decoding failure.
	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	/// JSON encoding failure.
	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),

	/// Binary snapshot encoding or decoding failure.
	#[error("snapshot error: {0}")]
	Snapshot(#[from] postcard::Error),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
