use serde::{Deserialize, Serialize};

use super::frequency_table::FrequencyTable;

/// Summary statistics for one processed text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProcessingStats {
	/// Tokens surviving tokenization
	pub total_tokens: usize,
	/// Distinct pairs in the table
	pub unique_bigrams: usize,
	/// Distinct leading tokens
	pub unique_prefixes: usize,
	/// Sum of all pair counts
	pub total_bigram_occurrences: usize,
	/// Most frequent pair as `(first, second, count)`
	pub most_common_bigram: Option<(String, String, usize)>,
	/// Leading token with the most followers as `(first, total)`
	pub most_popular_prefix: Option<(String, usize)>,
}

impl ProcessingStats {
	/// Computes the statistics of a counted table.
	///
	/// Ties on counts resolve to the smallest words in ordinal order, so the
	/// result does not depend on table iteration order.
	pub fn compute(total_tokens: usize, table: &FrequencyTable) -> Self {
		let most_common_bigram = table
			.iter()
			.max_by(|a, b| a.2.cmp(&b.2).then_with(|| (b.0, b.1).cmp(&(a.0, a.1))))
			.map(|(first, second, count)| (first.to_owned(), second.to_owned(), count));

		let most_popular_prefix = table
			.states()
			.map(|state| (state.key(), state.total()))
			.max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
			.map(|(first, total)| (first.to_owned(), total));

		Self {
			total_tokens,
			unique_bigrams: table.len(),
			unique_prefixes: table.prefix_count(),
			total_bigram_occurrences: table.total_occurrences(),
			most_common_bigram,
			most_popular_prefix,
		}
	}
}
