use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rs_ngram_core::io::build_output_path;
use rs_ngram_core::serialize::{
	CountScale, DenseMatrix, RelationalRow, relational_rows, snapshot, sorted_by_count, write_csv, write_json,
};
use rs_ngram_core::{BigramModel, BuildOptions, TokenizerMode};

mod logging;

use logging::LogArgs;

/// Output artifact written by the builder.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
	/// Dense cumulative matrix, tab separated.
	Tsv,
	/// One row per bigram with vocabulary indices and raw count.
	Csv,
	/// Metadata and cumulative follower lists, for rendering tools.
	Json,
	/// Compact binary snapshot.
	Bin,
}

/// Builds a bigram frequency model from a UTF-8 text file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Input text file to process
	#[arg(index = 1)]
	input: PathBuf,

	/// Output format
	#[arg(short, long, value_enum, default_value_t = Format::Tsv)]
	format: Format,

	/// Output file. Defaults to stdout for tsv and json,
	/// and to the input path with a csv or bin extension otherwise
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Document title (defaults to the input file name)
	#[arg(long)]
	title: Option<String>,

	/// Document author
	#[arg(long, default_value = "")]
	author: String,

	/// Document url
	#[arg(long, default_value = "")]
	url: String,

	/// Use the deprecated `\w+` tokenizer
	#[arg(long = "legacy-tokenizer")]
	legacy_tokenizer: bool,

	/// Write raw counts in the json document instead of scaling each
	/// row total to 9, 99, 999...
	#[arg(long)]
	raw: bool,

	/// Print statistics and every bigram sorted by count after the output.
	/// Goes to stderr when the output itself is on stdout
	#[arg(long)]
	summary: bool,

	#[command(flatten)]
	log: LogArgs,
}

impl Args {
	/// Maps the command line onto the library build options.
	fn build_options(&self) -> anyhow::Result<BuildOptions> {
		let mode = if self.legacy_tokenizer {
			TokenizerMode::Legacy
		} else {
			TokenizerMode::Standard
		};

		let mut options = BuildOptions::default().with_mode(mode);
		if let Some(title) = &self.title {
			options.set_title(title)?;
		}
		options.author = self.author.clone();
		options.url = self.url.clone();
		Ok(options)
	}

	fn count_scale(&self) -> CountScale {
		if self.raw { CountScale::Raw } else { CountScale::Decimal }
	}

	/// Destination file, `None` meaning stdout.
	fn destination(&self) -> anyhow::Result<Option<PathBuf>> {
		if let Some(output) = &self.output {
			return Ok(Some(output.clone()));
		}
		match self.format {
			Format::Tsv | Format::Json => Ok(None),
			Format::Csv => Ok(Some(build_output_path(&self.input, "csv")?)),
			Format::Bin => Ok(Some(build_output_path(&self.input, "bin")?)),
		}
	}
}

fn main() -> ExitCode {
	let args = Args::parse();
	if let Err(err) = args.log.setup_logging() {
		eprintln!("Error: unable to initialize logging: {err}");
		return ExitCode::FAILURE;
	}

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("Error: {err:#}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> anyhow::Result<()> {
	let options = args.build_options()?;

	// Nothing is written before the model is complete
	let model = BigramModel::from_file(&args.input, &options)?;
	let rows = relational_rows(model.vocabulary(), model.table())?;

	let destination = args.destination()?;
	match args.format {
		Format::Tsv => {
			let matrix = DenseMatrix::new(model.vocabulary(), model.table());
			let mut writer = open_output(destination.as_deref())?;
			matrix.write_tsv(&mut writer)?;
			writer.flush()?;
		}
		Format::Csv => write_csv(&rows, open_output(destination.as_deref())?)?,
		Format::Json => write_json(&model, args.count_scale(), open_output(destination.as_deref())?)?,
		Format::Bin => {
			let path = destination.as_deref().context("binary snapshots need an output file")?;
			snapshot::save(&model, path)?;
		}
	}

	match &destination {
		Some(path) => {
			log::info!("wrote {:?} output to '{}'", args.format, path.display());
			if args.summary {
				print_summary(&model, &rows, &mut io::stdout().lock())?;
			}
		}
		// stdout already holds the artifact
		None if args.summary => print_summary(&model, &rows, &mut io::stderr().lock())?,
		None => {}
	}
	Ok(())
}

/// Opens a buffered writer on `path`, or on stdout when `path` is `None`.
fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
	match path {
		Some(path) => {
			let file = File::create(path)
				.with_context(|| format!("unable to create output file '{}'", path.display()))?;
			Ok(Box::new(BufWriter::new(file)))
		}
		None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
	}
}

/// Prints the run statistics, then every bigram sorted ascending by count.
fn print_summary<W: Write>(model: &BigramModel, rows: &[RelationalRow], out: &mut W) -> io::Result<()> {
	let stats = model.stats();
	let metadata = model.metadata();

	writeln!(out, "\nDocument Metadata:")?;
	writeln!(out, "------------------")?;
	writeln!(out, "Title: {}", metadata.title)?;
	if !metadata.author.is_empty() {
		writeln!(out, "Author: {}", metadata.author)?;
	}
	if !metadata.url.is_empty() {
		writeln!(out, "URL: {}", metadata.url)?;
	}

	writeln!(out, "\nSummary Statistics:")?;
	writeln!(out, "-------------------")?;
	writeln!(out, "Total tokens in text: {}", stats.total_tokens)?;
	writeln!(out, "Vocabulary size: {}", model.vocabulary().len())?;
	writeln!(out, "Unique bigrams: {}", stats.unique_bigrams)?;
	writeln!(out, "Total bigram occurrences: {}", stats.total_bigram_occurrences)?;
	if let Some((first, second, count)) = &stats.most_common_bigram {
		writeln!(out, "Most common bigram: '{}' followed by '{}' ({} occurrences)", first, second, count)?;
	}
	if let Some((first, total)) = &stats.most_popular_prefix {
		writeln!(out, "Word with most followers: '{}' ({} total followers)", first, total)?;
	}

	writeln!(out, "\nBigrams by count:")?;
	writeln!(out, "-----------------")?;
	for row in sorted_by_count(rows) {
		writeln!(out, "{} {} {}", row.current_word, row.next_word, row.count)?;
	}
	out.flush()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_tsv_on_stdout() {
		let args = Args::parse_from(["rs-ngram", "book.txt"]);
		assert_eq!(args.format, Format::Tsv);
		assert_eq!(args.destination().unwrap(), None);
		assert_eq!(args.build_options().unwrap().mode, TokenizerMode::Standard);
	}

	#[test]
	fn csv_defaults_next_to_input() {
		let args = Args::parse_from(["rs-ngram", "books/alice.txt", "--format", "csv"]);
		assert_eq!(args.destination().unwrap(), Some(PathBuf::from("books/alice.csv")));
	}

	#[test]
	fn explicit_output_wins() {
		let args = Args::parse_from(["rs-ngram", "alice.txt", "-f", "bin", "-o", "out/model.bin"]);
		assert_eq!(args.destination().unwrap(), Some(PathBuf::from("out/model.bin")));
	}

	#[test]
	fn options_follow_flags() {
		let args = Args::parse_from([
			"rs-ngram",
			"alice.txt",
			"--legacy-tokenizer",
			"--title",
			"Alice",
			"--author",
			"Lewis Carroll",
		]);
		let options = args.build_options().unwrap();
		assert_eq!(options.mode, TokenizerMode::Legacy);
		assert_eq!(options.title(), Some("Alice"));
		assert_eq!(options.author, "Lewis Carroll");
	}

	#[test]
	fn blank_title_is_rejected() {
		let args = Args::parse_from(["rs-ngram", "alice.txt", "--title", "  "]);
		assert!(args.build_options().is_err());
	}

	#[test]
	fn json_counts_are_scaled_unless_raw() {
		let args = Args::parse_from(["rs-ngram", "alice.txt", "-f", "json"]);
		assert_eq!(args.count_scale(), CountScale::Decimal);
		let args = Args::parse_from(["rs-ngram", "alice.txt", "-f", "json", "--raw"]);
		assert_eq!(args.count_scale(), CountScale::Raw);
	}

	#[test]
	fn summary_lists_statistics_then_rows() -> anyhow::Result<()> {
		let options = BuildOptions::default().with_title("Cats")?;
		let model = BigramModel::from_text("the cat sat. the cat ran.", &options)?;
		let rows = relational_rows(model.vocabulary(), model.table())?;

		let mut out = Vec::new();
		print_summary(&model, &rows, &mut out)?;
		let text = String::from_utf8(out)?;
		assert!(text.contains("Title: Cats\n"));
		assert!(!text.contains("Author:"));
		assert!(text.contains("Total tokens in text: 6\n"));
		assert!(text.contains("Most common bigram: 'the' followed by 'cat' (2 occurrences)\n"));
		assert!(text.ends_with("cat ran 1\ncat sat 1\nsat the 1\nthe cat 2\n"));
		Ok(())
	}

	#[test]
	fn verbosity_levels() {
		let args = Args::parse_from(["rs-ngram", "alice.txt", "-vv"]);
		assert_eq!(args.log.level(), log::LevelFilter::Debug);
		let args = Args::parse_from(["rs-ngram", "alice.txt", "-q"]);
		assert_eq!(args.log.level(), log::LevelFilter::Off);
	}
}
