use std::collections::{BTreeSet, HashMap};

use super::frequency_table::FrequencyTable;

/// Sorted set of distinct tokens appearing in any pair of a table.
///
/// Tokens are ordered by ordinal (byte) string comparison, never by locale
/// collation, and each token's position in that order is its index.
///
/// # Invariants
/// - Indices are dense: `0..len()`
/// - The order only depends on the set of tokens, not on insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
	words: Vec<String>,
	index: HashMap<String, usize>,
}

impl Vocabulary {
	/// Collects first- and second-position tokens of every pair in `table`.
	pub fn from_table(table: &FrequencyTable) -> Self {
		let distinct: BTreeSet<&str> = table
			.iter()
			.flat_map(|(first, second, _)| [first, second])
			.collect();
		Self::from_sorted(distinct.into_iter().map(str::to_owned).collect())
	}

	/// Builds a vocabulary from arbitrary words, sorting and deduplicating them.
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let distinct: BTreeSet<String> = words.into_iter().map(Into::into).collect();
		Self::from_sorted(distinct.into_iter().collect())
	}

	fn from_sorted(words: Vec<String>) -> Self {
		let index = words
			.iter()
			.enumerate()
			.map(|(position, word)| (word.clone(), position))
			.collect();
		Self { words, index }
	}

	/// Index of `word`, if it belongs to the vocabulary.
	pub fn index_of(&self, word: &str) -> Option<usize> {
		self.index.get(word).copied()
	}

	/// Word stored at `index`.
	pub fn word(&self, index: usize) -> Option<&str> {
		self.words.get(index).map(String::as_str)
	}

	/// The words in index order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Word to index mapping.
	pub fn index_map(&self) -> &HashMap<String, usize> {
		&self.index
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

/// Derives the vocabulary of a table together with its word to index mapping.
pub fn build_vocabulary(table: &FrequencyTable) -> (Vocabulary, HashMap<String, usize>) {
	let vocabulary = Vocabulary::from_table(table);
	let index = vocabulary.index_map().clone();
	(vocabulary, index)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::frequency_table::count_bigrams;

	#[test]
	fn sorted_with_dense_indices() {
		let table = count_bigrams(&["the", "cat", "sat", "the", "cat", "ran"]);
		let (vocabulary, index) = build_vocabulary(&table);

		assert_eq!(vocabulary.words(), ["cat", "ran", "sat", "the"]);
		assert_eq!(index["cat"], 0);
		assert_eq!(index["the"], 3);
		assert_eq!(vocabulary.word(2), Some("sat"));
		assert_eq!(vocabulary.index_of("dog"), None);
	}

	#[test]
	fn ordinal_order_puts_uppercase_first() {
		let vocabulary = Vocabulary::from_words(["the", "I", "am", "émile", "zoo", "am"]);
		assert_eq!(vocabulary.words(), ["I", "am", "the", "zoo", "émile"]);
	}

	#[test]
	fn order_is_independent_of_token_order() {
		let forward = Vocabulary::from_table(&count_bigrams(&["b", "a", "c", "d"]));
		let backward = Vocabulary::from_table(&count_bigrams(&["d", "c", "a", "b"]));
		assert_eq!(forward, backward);
	}
}
