use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Everything that is not a word character, a number, whitespace or an apostrophe.
///
/// `\p{N}` keeps fractions and other numeric symbols (`½`) that `\w` leaves out.
static PUNCTUATION: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^\w\p{N}\s']").expect("punctuation pattern is valid"));

/// A decimal digit (Unicode `Nd`) in first position.
static LEADING_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d").expect("digit pattern is valid"));

/// Decimal digits only.
static ALL_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").expect("digits pattern is valid"));

/// Classic lowercase Roman numeral grammar, anchored at both ends.
///
/// Also matches the empty string and zero-value letter runs; kept as is.
static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^m{0,4}(cm|cd|d?c{0,3})(xc|xl|l?x{0,3})(ix|iv|v?i{0,3})$")
		.expect("roman numeral pattern is valid")
});

/// Runs of word characters and numbers, used by the legacy mode.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w\p{N}]+").expect("word pattern is valid"));

/// Tokenization rule set.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenizerMode {
	/// Hyphen splitting, punctuation stripping, apostrophe trimming,
	/// "I" casing, number and Roman numeral removal.
	#[default]
	Standard,
	/// Lowercased `\w+` runs without purely numeric ones.
	///
	/// Deprecated: kept only to reproduce models built by older tooling.
	Legacy,
}

/// Converts raw text into an ordered sequence of normalized tokens.
///
/// The tokenizer is stateless: the same text always yields the same tokens,
/// in source order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tokenizer {
	mode: TokenizerMode,
}

impl Tokenizer {
	/// Creates a tokenizer using the given rule set.
	pub fn new(mode: TokenizerMode) -> Self {
		Self { mode }
	}

	/// Returns the active rule set.
	pub fn mode(&self) -> TokenizerMode {
		self.mode
	}

	/// Tokenizes `text` with the active rule set.
	pub fn tokenize(&self, text: &str) -> Vec<String> {
		match self.mode {
			TokenizerMode::Standard => tokenize(text),
			TokenizerMode::Legacy => tokenize_legacy(text),
		}
	}
}

/// Tokenizes text with the standard rule set.
///
/// Rules, in order:
/// 1. hyphens become whitespace
/// 2. characters other than word characters, numbers, whitespace and apostrophes are removed
/// 3. the text is split on whitespace runs
/// 4. leading and trailing apostrophes are stripped, empty candidates dropped
/// 5. "I" (any case) becomes "I", everything else is lowercased
/// 6. candidates starting with a decimal digit are dropped
/// 7. candidates matching the Roman numeral grammar are dropped
pub fn tokenize(text: &str) -> Vec<String> {
	let text = text.replace('-', " ");
	let text = PUNCTUATION.replace_all(&text, "");

	text.split_whitespace()
		.filter_map(normalize_candidate)
		.collect()
}

/// Applies rules 4 to 7 to one whitespace-delimited candidate.
fn normalize_candidate(candidate: &str) -> Option<String> {
	let trimmed = candidate.trim_matches('\'');
	if trimmed.is_empty() {
		return None;
	}

	let token = if trimmed.eq_ignore_ascii_case("i") {
		"I".to_owned()
	} else {
		trimmed.to_lowercase()
	};

	// Decimal digits only: "Ⅻ" and "½" are numbers but not digits
	if LEADING_DIGIT.is_match(&token) {
		return None;
	}

	// "I" is uppercase here so the lowercase grammar cannot catch it
	if ROMAN_NUMERAL.is_match(&token) {
		return None;
	}

	Some(token)
}

/// Tokenizes text with the legacy rule set: lowercased `\w+` runs,
/// purely numeric runs removed.
pub fn tokenize_legacy(text: &str) -> Vec<String> {
	let text = text.to_lowercase();
	WORD.find_iter(&text)
		.map(|word| word.as_str())
		.filter(|word| !ALL_DIGITS.is_match(word))
		.map(str::to_owned)
		.collect()
}
