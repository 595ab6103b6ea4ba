use crate::error::{ModelError, ModelResult};
use crate::text::TokenizerMode;

/// Input parameters for building a model.
///
/// `BuildOptions` carries both the **tokenizer configuration** and the
/// **document description** copied into the model metadata.
///
/// # Responsibilities
/// - Select the tokenization rule set
/// - Hold the title, author and url reported in the metadata
///
/// # Invariants
/// - `title`, when set, is never blank
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
	/// Tokenization rule set.
	pub mode: TokenizerMode,

	/// Document title, `None` lets the builder pick one (file stem or "untitled").
	title: Option<String>,

	/// Document author.
	pub author: String,

	/// Document url.
	pub url: String,
}

impl Default for BuildOptions {
	fn default() -> Self {
		Self {
			mode: TokenizerMode::Standard,
			title: None,
			author: String::new(),
			url: String::new(),
		}
	}
}

impl BuildOptions {
	/// Returns the title set by the caller, if any.
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Sets the document title.
	///
	/// # Errors
	/// Returns an error if the title is empty or only whitespace.
	pub fn set_title(&mut self, title: &str) -> ModelResult<()> {
		let title = title.trim();
		if title.is_empty() {
			return Err(ModelError::InvalidOption("title must not be blank".to_owned()));
		}
		self.title = Some(title.to_owned());
		Ok(())
	}

	/// Builder-style variant of `set_title`.
	pub fn with_title(mut self, title: &str) -> ModelResult<Self> {
		self.set_title(title)?;
		Ok(self)
	}

	/// Builder-style mode selection.
	pub fn with_mode(mut self, mode: TokenizerMode) -> Self {
		self.mode = mode;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let options = BuildOptions::default();
		assert_eq!(options.mode, TokenizerMode::Standard);
		assert_eq!(options.title(), None);
	}

	#[test]
	fn title_is_trimmed_and_validated() {
		let mut options = BuildOptions::default();
		options.set_title("  Alice  ").unwrap();
		assert_eq!(options.title(), Some("Alice"));

		let err = options.set_title("   ").unwrap_err();
		assert!(matches!(err, ModelError::InvalidOption(_)));
		assert_eq!(options.title(), Some("Alice"));
	}
}
