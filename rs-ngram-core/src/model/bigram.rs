use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered pair of tokens adjacent in the source sequence.
///
/// Equality and hashing are structural: two pairs with the same words
/// are the same key.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bigram {
	/// The leading token.
	pub first: String,
	/// The token that follows `first`.
	pub second: String,
}

impl Bigram {
	pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
		Self { first: first.into(), second: second.into() }
	}
}

impl fmt::Display for Bigram {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.first, self.second)
	}
}
