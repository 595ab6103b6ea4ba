use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{ModelError, ModelResult};

/// Reads a whole text file and decodes it as UTF-8.
///
/// - Reads the entire file into memory, the handle is closed on every exit path
/// - A missing file, an unreadable file and undecodable bytes are reported
///   as three distinct errors
pub fn read_text<P: AsRef<Path>>(filename: P) -> ModelResult<String> {
	let path = filename.as_ref();
	let mut bytes = Vec::new();

	File::open(path)
		.and_then(|mut file| file.read_to_end(&mut bytes))
		.map_err(|source| match source.kind() {
			io::ErrorKind::NotFound => ModelError::FileNotFound { path: path.to_owned() },
			_ => ModelError::Unreadable { path: path.to_owned(), source },
		})?;

	String::from_utf8(bytes).map_err(|_| ModelError::Decode { path: path.to_owned() })
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/input.txt` + `"csv"` → `data/input.csv`
pub fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./books/alice.txt"` → `"alice"`
/// - `"alice.txt"` → `"alice"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn reads_utf8_text() -> ModelResult<()> {
		let mut file = NamedTempFile::new()?;
		write!(file, "naïve café")?;
		assert_eq!(read_text(file.path())?, "naïve café");
		Ok(())
	}

	#[test]
	fn missing_file_is_not_found() {
		let err = read_text("/definitely/not/here.txt").unwrap_err();
		assert!(matches!(err, ModelError::FileNotFound { .. }));
	}

	#[test]
	fn directory_is_unreadable() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_text(dir.path()).unwrap_err();
		assert!(matches!(err, ModelError::Unreadable { .. }));
	}

	#[test]
	fn invalid_utf8_is_decode_error() -> ModelResult<()> {
		let mut file = NamedTempFile::new()?;
		file.write_all(&[0x66, 0x6f, 0xff, 0xfe])?;
		let err = read_text(file.path()).unwrap_err();
		assert!(matches!(err, ModelError::Decode { .. }));
		Ok(())
	}

	#[test]
	fn output_path_replaces_extension() {
		let path = build_output_path("books/alice.txt", "csv").unwrap();
		assert_eq!(path, PathBuf::from("books/alice.csv"));
	}

	#[test]
	fn filename_is_stem() {
		assert_eq!(get_filename("./books/alice.txt").unwrap(), "alice");
	}
}
