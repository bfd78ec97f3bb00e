use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while loading language models or classifying text.
#[derive(Error, Debug)]
pub enum Error {
	/// Reading a corpus, cache or test file failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Encoding or decoding a cached frequency table failed.
	#[error("model codec error: {0}")]
	Postcard(#[from] postcard::Error),

	/// A folder of corpora was expected but the path is not a directory.
	#[error("expected a directory, got: {}", .0.display())]
	NotAFolder(PathBuf),

	/// Two language models with the same name were added to one set.
	#[error("language already loaded: {0}")]
	DuplicateLanguage(String),

	/// Classification was asked for an empty text.
	#[error("cannot identify an empty text")]
	EmptyInput,

	/// No language produced a score, so there is nothing to return.
	#[error("no language candidates to score against")]
	NoCandidates,
}
