use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a whole corpus file into a `String`.
///
/// The trainer owns line splitting, so the raw text is returned as-is.
/// Fails with an IO error if the file is missing or not valid UTF-8.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Builds a sibling path with the same stem and a different extension.
///
/// Example:
/// `data/english.dat` + `"bin"` → `data/english.bin`
///
/// Fails if the path carries no filename to derive the sibling from.
pub fn sibling_path<P: AsRef<Path>>(input_path: P, extension: &str) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();
	let stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no filename"))?;

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let mut sibling = parent.join(stem);
	sibling.set_extension(extension);
	Ok(sibling)
}

/// Extracts the base filename without extension.
///
/// This is where a loaded language gets its name from:
/// `"./data/english.dat"` → `"english"`.
pub fn file_stem<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	input_path
		.as_ref()
		.file_stem()
		.map(|stem| stem.to_string_lossy().to_string())
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no filename"))
}

/// Normalize a folder path.
///
/// `"."` and `"./"` resolve to the current working directory so that log
/// lines and errors show a concrete location; any other path is taken
/// as-is, without canonicalization.
pub fn normalize_folder(input: &str) -> PathBuf {
	match input {
		"." | "./" => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
		other => PathBuf::from(other),
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted lexicographically.
/// Directory iteration order is platform dependent; the sort keeps the
/// candidate order of a loaded language set stable.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
