use std::io::Write;

use serde_json::{Value, json};

use crate::error::ModelResult;
use crate::model::BigramModel;

/// How follower totals and cumulative values are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountScale {
	/// Each total becomes the largest number with as many decimal digits
	/// (2 -> 9, 25 -> 99, 150 -> 999) and the cumulative values are scaled
	/// to match, rounded half up. A row then reads directly off d10 dice.
	#[default]
	Decimal,
	/// Raw totals and running sums.
	Raw,
}

impl CountScale {
	/// Value written as the total of a row whose raw total is `total`.
	pub fn total(self, total: usize) -> usize {
		match self {
			CountScale::Raw => total,
			CountScale::Decimal => decimal_ceiling(total),
		}
	}

	/// Value written for a running sum `cumulative` within a row of `total`.
	pub fn cumulative(self, cumulative: usize, total: usize) -> usize {
		match self {
			CountScale::Raw => cumulative,
			CountScale::Decimal if total == 0 => 0,
			CountScale::Decimal => {
				let ceiling = decimal_ceiling(total);
				(2 * cumulative * ceiling + total) / (2 * total)
			}
		}
	}
}

/// `10^k - 1` where `k` is the number of decimal digits of `total`.
fn decimal_ceiling(total: usize) -> usize {
	match total.checked_ilog10() {
		Some(digits) => 10usize.pow(digits + 1) - 1,
		None => 0,
	}
}

/// Builds the JSON document of a model.
///
/// Layout:
/// - `metadata`: document description with statistics attached
/// - `vocabulary`: words in index order
/// - `data`: one entry per leading word, in vocabulary order:
///   `["word", total, ["follower", cumulative], ...]`
///
/// Followers are listed in vocabulary order. With `CountScale::Raw` their
/// cumulative values are the same running sums as in the dense matrix; the
/// statistics in `metadata` are always raw.
pub fn json_document(model: &BigramModel, scale: CountScale) -> ModelResult<Value> {
	let data: Vec<Value> = model
		.vocabulary()
		.iter()
		.filter_map(|word| model.table().state(word))
		.map(|state| {
			let total = state.total();
			let mut entry = vec![json!(state.key()), json!(scale.total(total))];
			let mut cumulative = 0;
			for (follower, count) in state.sorted_transitions() {
				cumulative += count;
				entry.push(json!([follower, scale.cumulative(cumulative, total)]));
			}
			Value::Array(entry)
		})
		.collect();

	Ok(json!({
		"metadata": serde_json::to_value(model.metadata_with_stats())?,
		"vocabulary": model.vocabulary().words(),
		"data": data,
	}))
}

/// Writes the pretty-printed JSON document of a model.
pub fn write_json<W: Write>(model: &BigramModel, scale: CountScale, mut writer: W) -> ModelResult<()> {
	let document = json_document(model, scale)?;
	serde_json::to_writer_pretty(&mut writer, &document)?;
	writeln!(writer)?;
	writer.flush()?;
	Ok(())
}
