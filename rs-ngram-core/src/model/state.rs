use std::collections::HashMap;

use serde::{Deserialize, Serialize};


/// One row of the frequency table.
///
/// A `State` corresponds to a leading token (`key`) and stores every
/// observed follower of that token along with how often it followed.
///
/// ## Responsibilities:
/// - Accumulate follower occurrences while the table is being counted
/// - Answer count lookups for a given follower
/// - List followers in ordinal order for the serializers
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// The leading token of every pair in this row.
	key: String,
	/// Outgoing transitions indexed by the following token.
	/// Example: { "cat" => 2, "dog" => 1 }
	transitions: HashMap<String, usize>,
}

impl State {
	/// Creates a new empty row for the given leading token.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: HashMap::new(),
		}
	}

	/// The leading token.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Records one occurrence of `next` following this row's token.
	pub(crate) fn add_transition(&mut self, next: &str) {
		match self.transitions.get_mut(next) {
			Some(count) => *count += 1,
			None => {
				self.transitions.insert(next.to_owned(), 1);
			}
		}
	}

	/// Occurrences of `next` after this row's token, 0 when never observed.
	pub fn count(&self, next: &str) -> usize {
		self.transitions.get(next).copied().unwrap_or(0)
	}

	/// Sum of all follower counts.
	pub fn total(&self) -> usize {
		self.transitions.values().sum()
	}

	/// Number of distinct followers.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Iterates over `(follower, count)` in table order.
	pub fn transitions(&self) -> impl Iterator<Item = (&str, usize)> {
		self.transitions.iter().map(|(next, count)| (next.as_str(), *count))
	}

	/// Followers with their counts, sorted by ordinal string order.
	pub fn sorted_transitions(&self) -> Vec<(&str, usize)> {
		let mut followers: Vec<(&str, usize)> = self.transitions().collect();
		followers.sort_unstable_by(|a, b| a.0.cmp(b.0));
		followers
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_accumulate_per_follower() {
		let mut state = State::new("the");
		state.add_transition("cat");
		state.add_transition("dog");
		state.add_transition("cat");

		assert_eq!(state.key(), "the");
		assert_eq!(state.count("cat"), 2);
		assert_eq!(state.count("dog"), 1);
		assert_eq!(state.count("bird"), 0);
		assert_eq!(state.total(), 3);
		assert_eq!(state.len(), 2);
	}

	#[test]
	fn sorted_transitions_use_ordinal_order() {
		let mut state = State::new("a");
		for next in ["zebra", "Apple", "apple", "émile"] {
			state.add_transition(next);
		}
		let order: Vec<&str> = state.sorted_transitions().into_iter().map(|(w, _)| w).collect();
		assert_eq!(order, vec!["Apple", "apple", "zebra", "émile"]);
	}
}
