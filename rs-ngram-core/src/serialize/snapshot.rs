use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::model::{BigramModel, FrequencyTable, Metadata};

/// Serialized form of a model.
///
/// Only the inputs of `BigramModel::from_parts` are stored; vocabulary and
/// statistics are derived again on load.
#[derive(Serialize, Deserialize)]
struct Snapshot {
	metadata: Metadata,
	total_tokens: usize,
	table: FrequencyTable,
}

/// Encodes a model with `postcard`.
pub fn to_bytes(model: &BigramModel) -> ModelResult<Vec<u8>> {
	let snapshot = Snapshot {
		metadata: model.metadata().clone(),
		total_tokens: model.total_tokens(),
		table: model.table().clone(),
	};
	Ok(postcard::to_stdvec(&snapshot)?)
}

/// Decodes a model written by `to_bytes`.
///
/// # Errors
/// - `Snapshot` if the bytes are not a valid snapshot.
/// - `EmptyFrequencyTable` if the snapshot holds no pair.
pub fn from_bytes(bytes: &[u8]) -> ModelResult<BigramModel> {
	let snapshot: Snapshot = postcard::from_bytes(bytes)?;
	BigramModel::from_parts(snapshot.metadata, snapshot.total_tokens, snapshot.table)
}

/// Writes the snapshot of a model to `path`.
pub fn save<P: AsRef<Path>>(model: &BigramModel, path: P) -> ModelResult<()> {
	let bytes = to_bytes(model)?;
	std::fs::write(&path, bytes)?;
	log::info!("wrote snapshot to '{}'", path.as_ref().display());
	Ok(())
}

/// Loads a snapshot written by `save`.
pub fn load<P: AsRef<Path>>(path: P) -> ModelResult<BigramModel> {
	let path = path.as_ref();
	let bytes = std::fs::read(path).map_err(|source| match source.kind() {
		std::io::ErrorKind::NotFound => ModelError::FileNotFound { path: path.to_owned() },
		_ => ModelError::Unreadable { path: path.to_owned(), source },
	})?;
	from_bytes(&bytes)
}
