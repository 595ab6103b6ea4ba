use serde::{Deserialize, Serialize};

use super::stats::ProcessingStats;

/// Order of the models built by this crate.
pub const BIGRAM_ORDER: usize = 2;

/// Human readable name of an n-gram order ("bigram", "trigram", ...).
pub fn model_type_str(n: usize) -> String {
	match n {
		1 => "unigram".to_owned(),
		2 => "bigram".to_owned(),
		3 => "trigram".to_owned(),
		_ => format!("{}-gram", n),
	}
}

/// Describes the document a model was built from.
///
/// Rendering tools read it from the `metadata` object of the JSON document
/// (the subtitle in particular).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
	/// Title of the document
	pub title: String,
	/// Author of the document
	pub author: String,
	/// URL related to the document
	pub url: String,
	/// Size of the n-grams
	pub n: usize,
	/// Subtitle, e.g. "A bigram language model"
	pub subtitle: String,
	/// Version of the builder that produced the model
	pub version: String,
	/// Summary statistics, filled when the JSON document is produced
	#[serde(default)]
	pub stats: Option<ProcessingStats>,
}

impl Metadata {
	pub fn new(title: &str, author: &str, url: &str) -> Self {
		Self {
			title: title.to_owned(),
			author: author.to_owned(),
			url: url.to_owned(),
			n: BIGRAM_ORDER,
			subtitle: format!("A {} language model", model_type_str(BIGRAM_ORDER)),
			version: env!("CARGO_PKG_VERSION").to_owned(),
			stats: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn subtitle_names_the_order() {
		let metadata = Metadata::new("Alice", "Lewis Carroll", "https://example.com");
		assert_eq!(metadata.n, 2);
		assert_eq!(metadata.subtitle, "A bigram language model");
		assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
	}

	#[test]
	fn order_names() {
		assert_eq!(model_type_str(1), "unigram");
		assert_eq!(model_type_str(3), "trigram");
		assert_eq!(model_type_str(5), "5-gram");
	}
}
