use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::frequency_table::FrequencyTable;
use crate::error::Result;
use crate::io::{file_stem, read_corpus, sibling_path};

/// A trained frequency table tied to a language name.
///
/// # Responsibilities
/// - Train a table from an in-memory corpus or a corpus file
/// - Cache trained tables on disk for fast loading
/// - Score text samples against the table
///
/// # Invariants
/// - The table is created once by training and never mutated afterwards
/// - The name comes from the caller or the corpus file stem, never from
///   the serialized payload
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LanguageModel {
	name: String,
	table: FrequencyTable,
}

impl LanguageModel {
	/// Trains a model from a corpus held in memory.
	pub fn from_corpus(name: &str, corpus: &str) -> Self {
		Self {
			name: name.to_owned(),
			table: FrequencyTable::train(corpus),
		}
	}

	/// Loads a model from a corpus file, using a binary cache if present.
	///
	/// - `filepath` is the text corpus (conventionally `<language>.dat`).
	/// - If a sibling `<language>.bin` exists it is decoded directly.
	/// - Otherwise the corpus is read, trained, and the encoded table is
	///   written to `<language>.bin` for future fast loading.
	/// - The language name is the file stem in both cases.
	///
	/// # Errors
	/// Fails if the corpus cannot be read, or if the cache cannot be
	/// decoded or written.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let name = file_stem(&filepath)?;
		let cache_path = sibling_path(&filepath, "bin")?;

		let table = if cache_path.exists() {
			log::info!("loading cached table for '{}' from {}", name, cache_path.display());
			let bytes = fs::read(&cache_path)?;
			postcard::from_bytes(&bytes)?
		} else {
			log::info!("training '{}' from {}", name, filepath.as_ref().display());
			let corpus = read_corpus(&filepath)?;
			let table = FrequencyTable::train(&corpus);
			fs::write(&cache_path, postcard::to_stdvec(&table)?)?;
			table
		};

		Ok(Self { name, table })
	}

	/// Name of the language this model was trained for.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Read-only access to the trained table.
	pub fn table(&self) -> &FrequencyTable {
		&self.table
	}

	/// Scores a text sample against this language.
	///
	/// Returns `None` when the model takes no part in a comparison
	/// (empty text or an empty table), see `FrequencyTable::score`.
	pub fn score(&self, text: &str) -> Option<f64> {
		self.table.score(text)
	}
}
