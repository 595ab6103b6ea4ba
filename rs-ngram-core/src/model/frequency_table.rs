use super::bigram::Bigram;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrence counts of every pair of adjacent tokens in one text.
///
/// The table stores one `State` per leading token; each state holds the
/// counts of the tokens that followed it.
///
/// # Responsibilities
/// - Slide a window of two tokens over a token sequence and tally pairs
/// - Answer raw count lookups for the serializers
/// - Enumerate every observed pair with its count
///
/// # Invariants
/// - Built once from a token sequence, never updated afterwards
/// - Every stored count is >= 1
/// - Each state in `states` corresponds to a unique leading token
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	/// Mapping from a leading token to its row of follower counts
	states: HashMap<String, State>,
}

impl FrequencyTable {
	/// Counts every adjacent pair `(tokens[i], tokens[i + 1])`.
	///
	/// # Notes
	/// - Adjacent identical tokens form a valid self-pair.
	/// - Fewer than two tokens yield an empty table.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut table = Self::default();

		for pair in tokens.windows(2) {
			let (first, second) = (pair[0].as_ref(), pair[1].as_ref());

			// Get or create the row for this leading token
			table
				.states
				.entry(first.to_owned())
				.or_insert_with(|| State::new(first))
				.add_transition(second);
		}

		log::debug!("counted {} distinct bigrams over {} tokens", table.len(), tokens.len());
		table
	}

	/// Raw count of the pair `(first, second)`, 0 when never observed.
	pub fn count(&self, first: &str, second: &str) -> usize {
		self.states.get(first).map_or(0, |state| state.count(second))
	}

	/// Count of a `Bigram` key.
	pub fn get(&self, bigram: &Bigram) -> usize {
		self.count(&bigram.first, &bigram.second)
	}

	/// Row of followers for a leading token.
	pub fn state(&self, first: &str) -> Option<&State> {
		self.states.get(first)
	}

	/// Iterates over all rows in table order.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.states.values()
	}

	/// Iterates over every observed pair as `(first, second, count)` in table order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str, usize)> {
		self.states
			.values()
			.flat_map(|state| state.transitions().map(move |(next, count)| (state.key(), next, count)))
	}

	/// Iterates over every observed pair as owned `Bigram` keys.
	pub fn bigrams(&self) -> impl Iterator<Item = (Bigram, usize)> + '_ {
		self.iter().map(|(first, second, count)| (Bigram::new(first, second), count))
	}

	/// Number of distinct pairs.
	pub fn len(&self) -> usize {
		self.states.values().map(State::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Number of distinct leading tokens.
	pub fn prefix_count(&self) -> usize {
		self.states.len()
	}

	/// Sum of all counts.
	pub fn total_occurrences(&self) -> usize {
		self.states.values().map(State::total).sum()
	}
}

/// Counts the bigrams of a token sequence.
///
/// See `FrequencyTable::from_tokens`.
pub fn count_bigrams<S: AsRef<str>>(tokens: &[S]) -> FrequencyTable {
	FrequencyTable::from_tokens(tokens)
}
