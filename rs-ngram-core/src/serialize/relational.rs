use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::model::{FrequencyTable, Vocabulary};

/// CSV header, one column per `RelationalRow` field.
pub const CSV_HEADER: [&str; 5] = [
	"current_word",
	"next_word",
	"current_word_index",
	"next_word_index",
	"count",
];

/// One observed pair with its vocabulary indices and raw count.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelationalRow {
	pub current_word: String,
	pub next_word: String,
	pub current_word_index: usize,
	pub next_word_index: usize,
	pub count: usize,
}

/// Builds one row per pair of `table`, indices resolved against `vocabulary`.
///
/// Rows are ordered by `(current_word_index, next_word_index)`.
///
/// # Errors
/// Returns `UnknownWord` if a table word is missing from the vocabulary.
pub fn relational_rows(vocabulary: &Vocabulary, table: &FrequencyTable) -> ModelResult<Vec<RelationalRow>> {
	let index_of = |word: &str| {
		vocabulary.index_of(word).ok_or_else(|| ModelError::UnknownWord {
			word: word.to_owned(),
			index: vocabulary.len(),
		})
	};

	let mut rows = table
		.iter()
		.map(|(first, second, count)| {
			Ok(RelationalRow {
				current_word: first.to_owned(),
				next_word: second.to_owned(),
				current_word_index: index_of(first)?,
				next_word_index: index_of(second)?,
				count,
			})
		})
		.collect::<ModelResult<Vec<_>>>()?;

	rows.sort_unstable_by_key(|row| (row.current_word_index, row.next_word_index));
	Ok(rows)
}

/// Returns the rows sorted ascending by count, ties kept in index order.
pub fn sorted_by_count(rows: &[RelationalRow]) -> Vec<RelationalRow> {
	let mut sorted = rows.to_vec();
	sorted.sort_by_key(|row| (row.count, row.current_word_index, row.next_word_index));
	sorted
}

/// Writes the header and every row as CSV.
pub fn write_csv<W: Write>(rows: &[RelationalRow], writer: W) -> ModelResult<()> {
	let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
	csv_writer.write_record(CSV_HEADER)?;
	for row in rows {
		csv_writer.serialize(row)?;
	}
	csv_writer.flush()?;
	Ok(())
}

/// Parses rows previously written by `write_csv`.
pub fn read_csv<R: Read>(reader: R) -> ModelResult<Vec<RelationalRow>> {
	let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
	let rows = csv_reader
		.deserialize()
		.collect::<Result<Vec<RelationalRow>, csv::Error>>()?;
	Ok(rows)
}

/// Checks that every row's indices resolve to its words in `vocabulary`.
///
/// # Errors
/// Returns `UnknownWord` for the first mismatching word.
pub fn verify_rows(rows: &[RelationalRow], vocabulary: &Vocabulary) -> ModelResult<()> {
	for row in rows {
		for (word, index) in [
			(&row.current_word, row.current_word_index),
			(&row.next_word, row.next_word_index),
		] {
			if vocabulary.word(index) != Some(word.as_str()) {
				return Err(ModelError::UnknownWord { word: word.clone(), index });
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::count_bigrams;
	use std::collections::HashMap;

	fn example() -> (FrequencyTable, Vocabulary) {
		let table = count_bigrams(&["the", "cat", "sat", "the", "cat", "ran"]);
		let vocabulary = Vocabulary::from_table(&table);
		(table, vocabulary)
	}

	#[test]
	fn rows_carry_indices_and_raw_counts() -> ModelResult<()> {
		let (table, vocabulary) = example();
		let rows = relational_rows(&vocabulary, &table)?;

		let triples: Vec<(&str, &str, usize, usize, usize)> = rows
			.iter()
			.map(|r| (r.current_word.as_str(), r.next_word.as_str(), r.current_word_index, r.next_word_index, r.count))
			.collect();
		assert_eq!(
			triples,
			vec![
				("cat", "ran", 0, 1, 1),
				("cat", "sat", 0, 2, 1),
				("sat", "the", 2, 3, 1),
				("the", "cat", 3, 0, 2),
			]
		);
		Ok(())
	}

	#[test]
	fn csv_has_expected_header_and_lines() -> ModelResult<()> {
		let (table, vocabulary) = example();
		let mut buffer = Vec::new();
		write_csv(&relational_rows(&vocabulary, &table)?, &mut buffer)?;

		assert_eq!(
			String::from_utf8(buffer).unwrap(),
			"current_word,next_word,current_word_index,next_word_index,count\n\
			 cat,ran,0,1,1\n\
			 cat,sat,0,2,1\n\
			 sat,the,2,3,1\n\
			 the,cat,3,0,2\n"
		);
		Ok(())
	}

	#[test]
	fn csv_read_back_restores_the_same_counts() -> ModelResult<()> {
		let table = count_bigrams(&["I", "can't", "say", "\"no\"", "I", "can't", "I"]);
		let vocabulary = Vocabulary::from_table(&table);
		let rows = relational_rows(&vocabulary, &table)?;

		let mut buffer = Vec::new();
		write_csv(&rows, &mut buffer)?;
		let parsed = read_csv(buffer.as_slice())?;
		verify_rows(&parsed, &vocabulary)?;

		let restored: HashMap<(String, String), usize> = parsed
			.into_iter()
			.map(|row| ((row.current_word, row.next_word), row.count))
			.collect();
		let original: HashMap<(String, String), usize> = table
			.iter()
			.map(|(first, second, count)| ((first.to_owned(), second.to_owned()), count))
			.collect();
		assert_eq!(restored, original);
		Ok(())
	}

	#[test]
	fn mismatching_index_is_reported() -> ModelResult<()> {
		let (table, vocabulary) = example();
		let mut rows = relational_rows(&vocabulary, &table)?;
		rows[0].next_word_index = 3;

		let err = verify_rows(&rows, &vocabulary).unwrap_err();
		assert!(matches!(err, ModelError::UnknownWord { index: 3, .. }));
		Ok(())
	}

	#[test]
	fn count_order_is_ascending() -> ModelResult<()> {
		let (table, vocabulary) = example();
		let sorted = sorted_by_count(&relational_rows(&vocabulary, &table)?);
		let counts: Vec<usize> = sorted.iter().map(|row| row.count).collect();
		assert_eq!(counts, vec![1, 1, 1, 2]);
		assert_eq!(sorted[3].current_word, "the");
		Ok(())
	}
}
