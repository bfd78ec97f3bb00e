use std::path::Path;

use super::language_model::LanguageModel;
use crate::error::{Error, Result};
use crate::io::{list_files, normalize_folder};

/// An ordered set of candidate languages.
///
/// # Responsibilities
/// - Load one `LanguageModel` per corpus file from a folder
/// - Keep candidates in a stable order (the tie-break order)
/// - Classify text samples by scoring every candidate
///
/// # Invariants
/// - Language names are unique within a set
/// - The set is read-only after construction; classification never
///   mutates a model
#[derive(Debug, Default)]
pub struct LanguageSet {
	languages: Vec<LanguageModel>,
}

impl LanguageSet {
	/// Creates a set by loading all `.dat` corpora from a directory.
	///
	/// # Parameters
	/// - `filepath`: Path to a directory containing corpus files.
	///   Both `"folder"` and `"folder/"` are accepted.
	///
	/// # Behavior
	/// - Lists all files with the `.dat` extension in the given directory.
	/// - Loads each corpus as one language, named after the file stem.
	/// - Files are visited in sorted name order, so the candidate order
	///   (and with it the tie-break order) is stable across platforms.
	///
	/// # Errors
	/// - Returns an error if the path does not exist or is not a directory.
	/// - Returns an error if a model fails to load.
	///
	/// # Notes
	/// - Only files directly contained in the directory are loaded
	///   (subdirectories are ignored).
	pub fn new<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let mut set = Self::default();

		let string_path = match filepath.as_ref().to_str() {
			Some(s) => s,
			None => return Err(Error::NotAFolder(filepath.as_ref().to_path_buf())),
		};
		// Normalize "folder" / "folder/"
		let folder = normalize_folder(string_path);

		if !folder.is_dir() {
			return Err(Error::NotAFolder(folder));
		}

		for file in list_files(&folder, "dat")? {
			let full_path = folder.join(&file);
			set.add(LanguageModel::load(&full_path)?)?;
		}

		log::debug!("loaded {} language(s) from {}", set.len(), folder.display());
		Ok(set)
	}

	/// Appends a language model to the set.
	///
	/// The insertion order is preserved and decides ties during
	/// classification.
	///
	/// # Errors
	/// Returns an error if a model with the same name is already loaded.
	pub fn add(&mut self, model: LanguageModel) -> Result<()> {
		if self.languages.iter().any(|l| l.name() == model.name()) {
			return Err(Error::DuplicateLanguage(model.name().to_owned()));
		}
		self.languages.push(model);
		Ok(())
	}

	/// Returns the loaded language names, in candidate order.
	pub fn get_language_names(&self) -> Vec<String> {
		self.languages.iter().map(|l| l.name().to_owned()).collect()
	}

	/// Number of loaded languages.
	pub fn len(&self) -> usize {
		self.languages.len()
	}

	/// True if no language is loaded.
	pub fn is_empty(&self) -> bool {
		self.languages.is_empty()
	}

	/// Scores a text against every candidate, in candidate order.
	///
	/// Candidates that take no part in the comparison (empty tables, or
	/// an empty text) are absent from the result rather than scored 0.
	pub fn scores<'a>(&'a self, text: &str) -> Vec<(&'a str, f64)> {
		self.languages
			.iter()
			.filter_map(|language| language.score(text).map(|score| (language.name(), score)))
			.collect()
	}

	/// Identifies the most likely language for a text sample.
	///
	/// Scores every candidate in order and returns the name of the one
	/// with the strictly greatest log-likelihood. On an exact tie the
	/// first candidate wins: the running best is only replaced on strict
	/// improvement.
	///
	/// # Errors
	/// - `Error::EmptyInput` if `text` is empty: an empty sample scores
	///   against no language at all.
	/// - `Error::NoCandidates` if no language produced a score: the set
	///   is empty, or every table in it is degenerate (empty vocabulary).
	pub fn classify(&self, text: &str) -> Result<&str> {
		if text.is_empty() {
			return Err(Error::EmptyInput);
		}

		let mut best: Option<(&str, f64)> = None;
		for language in &self.languages {
			if let Some(score) = language.score(text) {
				match best {
					Some((_, best_score)) if score <= best_score => (),
					_ => best = Some((language.name(), score)),
				}
			}
		}

		match best {
			Some((name, _)) => Ok(name),
			None => Err(Error::NoCandidates),
		}
	}
}
