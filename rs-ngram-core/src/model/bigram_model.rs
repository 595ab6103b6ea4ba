use std::path::Path;

use crate::config::BuildOptions;
use crate::error::{ModelError, ModelResult};
use crate::io::{get_filename, read_text};
use crate::text::Tokenizer;
use super::frequency_table::FrequencyTable;
use super::metadata::Metadata;
use super::stats::ProcessingStats;
use super::vocabulary::Vocabulary;

/// Title used when neither the caller nor a file name provides one.
const DEFAULT_TITLE: &str = "untitled";

/// A complete bigram model built from one text.
///
/// This struct ties the pipeline together:
/// - `table`: pair counts produced by the counter.
/// - `vocabulary`: sorted distinct tokens with their indices.
/// - `stats`: summary statistics of the run.
/// - `metadata`: description of the source document.
///
/// A model is always consistent: it either holds a non-empty table with the
/// matching vocabulary, or it was never constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigramModel {
	metadata: Metadata,
	table: FrequencyTable,
	vocabulary: Vocabulary,
	stats: ProcessingStats,
}

impl BigramModel {
	/// Reads a UTF-8 text file and builds its model.
	///
	/// - The file is read whole and closed before tokenization starts.
	/// - The title defaults to the file stem when `options` has none.
	///
	/// # Errors
	/// - `FileNotFound`, `Unreadable`, `Decode` for file problems.
	/// - Any error of `from_text`.
	pub fn from_file<P: AsRef<Path>>(filepath: P, options: &BuildOptions) -> ModelResult<Self> {
		let path = filepath.as_ref();
		let text = read_text(path)?;
		log::info!("read {} bytes from '{}'", text.len(), path.display());

		let title = match options.title() {
			Some(title) => title.to_owned(),
			None => get_filename(path).unwrap_or_else(|_| DEFAULT_TITLE.to_owned()),
		};
		Self::build(&text, options, &title)
	}

	/// Builds the model of an in-memory text.
	///
	/// # Errors
	/// - `EmptyTokenStream` if tokenization yields nothing.
	/// - `InsufficientTokens` if exactly one token survives.
	/// - `EmptyFrequencyTable` if counting produced no pair.
	pub fn from_text(text: &str, options: &BuildOptions) -> ModelResult<Self> {
		Self::build(text, options, options.title().unwrap_or(DEFAULT_TITLE))
	}

	fn build(text: &str, options: &BuildOptions, title: &str) -> ModelResult<Self> {
		let tokens = Tokenizer::new(options.mode).tokenize(text);
		log::debug!("tokenized with {:?} rules: {} tokens", options.mode, tokens.len());

		let metadata = Metadata::new(title, &options.author, &options.url);
		Self::from_tokens(&tokens, metadata)
	}

	/// Builds the model of an already tokenized sequence.
	///
	/// # Errors
	/// Same guards as `from_text`.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S], metadata: Metadata) -> ModelResult<Self> {
		match tokens.len() {
			0 => return Err(ModelError::EmptyTokenStream),
			1 => return Err(ModelError::InsufficientTokens),
			_ => (),
		}

		let table = FrequencyTable::from_tokens(tokens);
		Self::from_parts(metadata, tokens.len(), table)
	}

	/// Assembles a model from a counted table, deriving vocabulary and statistics.
	///
	/// # Errors
	/// Returns `EmptyFrequencyTable` if `table` holds no pair.
	pub(crate) fn from_parts(metadata: Metadata, total_tokens: usize, table: FrequencyTable) -> ModelResult<Self> {
		// Unreachable after the token guards, checked anyway for snapshots
		if table.is_empty() {
			return Err(ModelError::EmptyFrequencyTable);
		}

		let vocabulary = Vocabulary::from_table(&table);
		let stats = ProcessingStats::compute(total_tokens, &table);
		log::info!(
			"built model '{}': {} tokens, {} distinct bigrams, {} words",
			metadata.title,
			total_tokens,
			table.len(),
			vocabulary.len()
		);

		Ok(Self { metadata, table, vocabulary, stats })
	}

	/// Description of the source document (without statistics).
	pub fn metadata(&self) -> &Metadata {
		&self.metadata
	}

	/// Metadata with the statistics attached, as written to the JSON document.
	pub fn metadata_with_stats(&self) -> Metadata {
		let mut metadata = self.metadata.clone();
		metadata.stats = Some(self.stats.clone());
		metadata
	}

	pub fn table(&self) -> &FrequencyTable {
		&self.table
	}

	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	pub fn stats(&self) -> &ProcessingStats {
		&self.stats
	}

	/// Number of tokens the table was counted from.
	pub fn total_tokens(&self) -> usize {
		self.stats.total_tokens
	}
}
