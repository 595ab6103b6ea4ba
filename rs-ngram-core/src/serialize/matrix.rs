use std::io::{self, Write};

use crate::model::{FrequencyTable, Vocabulary};

/// One row of the dense matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixRow {
	/// Row label (the leading token).
	pub word: String,
	/// One cell per vocabulary word, `None` where the raw count is zero,
	/// otherwise the running sum of the row up to and including that cell.
	pub cells: Vec<Option<usize>>,
}

/// Square cumulative view of a frequency table.
///
/// Rows and columns both follow vocabulary order. Within a row the running
/// sum starts at 0 and grows left to right; zero-count cells are blank and
/// leave the running sum untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseMatrix {
	columns: Vec<String>,
	rows: Vec<MatrixRow>,
}

impl DenseMatrix {
	/// Builds the cumulative matrix of `table` over `vocabulary`.
	pub fn new(vocabulary: &Vocabulary, table: &FrequencyTable) -> Self {
		let rows = vocabulary
			.iter()
			.map(|word| {
				let state = table.state(word);
				let mut cumulative = 0;
				let cells = vocabulary
					.iter()
					.map(|next| {
						let count = state.map_or(0, |state| state.count(next));
						if count == 0 {
							return None;
						}
						cumulative += count;
						Some(cumulative)
					})
					.collect();
				MatrixRow { word: word.to_owned(), cells }
			})
			.collect();

		Self { columns: vocabulary.words().to_vec(), rows }
	}

	/// Column labels in order.
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	pub fn rows(&self) -> &[MatrixRow] {
		&self.rows
	}

	/// Writes the matrix as tab-separated lines.
	///
	/// The header is an empty cell followed by the vocabulary; every row
	/// starts with its label. Blank cells stay empty strings, never `0`.
	pub fn write_tsv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
		writeln!(writer, "{}", self.header_line())?;
		for row in &self.rows {
			writeln!(writer, "{}", row_line(row))?;
		}
		Ok(())
	}

	/// Renders the matrix as a TSV string, same bytes as `write_tsv`.
	pub fn to_tsv(&self) -> String {
		let mut tsv = self.header_line();
		tsv.push('\n');
		for row in &self.rows {
			tsv.push_str(&row_line(row));
			tsv.push('\n');
		}
		tsv
	}

	fn header_line(&self) -> String {
		let mut header = String::new();
		for column in &self.columns {
			header.push('\t');
			header.push_str(column);
		}
		header
	}
}

/// One TSV line without its terminator.
fn row_line(row: &MatrixRow) -> String {
	let mut line = row.word.clone();
	for cell in &row.cells {
		line.push('\t');
		if let Some(value) = cell {
			line.push_str(&value.to_string());
		}
	}
	line
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::count_bigrams;
	use proptest::prelude::*;

	fn matrix_of(tokens: &[&str]) -> (FrequencyTable, Vocabulary, DenseMatrix) {
		let table = count_bigrams(tokens);
		let vocabulary = Vocabulary::from_table(&table);
		let matrix = DenseMatrix::new(&vocabulary, &table);
		(table, vocabulary, matrix)
	}

	#[test]
	fn end_to_end_example_rows() {
		let (_, _, matrix) = matrix_of(&["the", "cat", "sat", "the", "cat", "ran"]);

		assert_eq!(
			matrix.to_tsv(),
			"\tcat\tran\tsat\tthe\n\
			 cat\t\t1\t2\t\n\
			 ran\t\t\t\t\n\
			 sat\t\t\t\t1\n\
			 the\t2\t\t\t\n"
		);
	}

	#[test]
	fn written_and_rendered_tsv_agree() -> io::Result<()> {
		let (_, _, matrix) = matrix_of(&["a", "b", "a", "d", "a", "d", "c"]);
		let mut buffer = Vec::new();
		matrix.write_tsv(&mut buffer)?;
		assert_eq!(String::from_utf8_lossy(&buffer), matrix.to_tsv());
		Ok(())
	}

	#[test]
	fn zero_cells_do_not_reset_running_sum() {
		// a -> b (1), a -> d (2): the blank "c" column sits between them
		let (_, _, matrix) = matrix_of(&["a", "b", "a", "d", "a", "d", "c"]);
		let row_a = &matrix.rows()[0];
		assert_eq!(row_a.word, "a");
		assert_eq!(row_a.cells, vec![None, Some(1), None, Some(3)]);
	}

	#[test]
	fn self_pair_lands_on_diagonal() {
		let (_, _, matrix) = matrix_of(&["go", "go", "go", "on"]);
		assert_eq!(matrix.columns(), ["go", "on"]);
		assert_eq!(matrix.rows()[0].cells, vec![Some(2), Some(3)]);
		assert_eq!(matrix.rows()[1].cells, vec![None, None]);
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(200))]

		#[test]
		fn rows_are_cumulative(tokens in proptest::collection::vec(
			prop_oneof![Just("a"), Just("b"), Just("c"), Just("d"), Just("e")],
			2..60,
		)) {
			let (table, vocabulary, matrix) = matrix_of(&tokens);

			for row in matrix.rows() {
				let mut previous = 0;
				for (cell, next) in row.cells.iter().zip(vocabulary.iter()) {
					let raw = table.count(&row.word, next);
					prop_assert_eq!(cell.is_none(), raw == 0);
					if let Some(value) = cell {
						prop_assert_eq!(*value, previous + raw);
						previous = *value;
					}
				}
				let row_total = table.state(&row.word).map_or(0, |state| state.total());
				prop_assert_eq!(previous, row_total);
			}
		}
	}
}
