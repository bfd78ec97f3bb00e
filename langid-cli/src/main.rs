use std::io::{Write, stdin, stdout};
use std::{env, fs, process};

use langid_core::io::{read_corpus, sibling_path};
use langid_core::model::language_set::LanguageSet;

/// Default folder scanned for `.dat` corpora.
const DATA_FOLDER: &str = "./data";

fn print_help() {
	println!(
		"Usage:
    langid-cli train [folder]             Train every corpus in the folder and cache the tables
    langid-cli identify <file> [folder]   Identify each line of the file, write a <stem>.out report
    langid-cli prompt [folder]            Read samples from stdin and print the identified language

The folder defaults to {DATA_FOLDER} and holds one <language>.dat corpus per language."
	);
}

/// Loads a language set and fails early when the folder holds no corpus.
fn load_languages(folder: &str) -> Result<LanguageSet, Box<dyn std::error::Error>> {
	let languages = LanguageSet::new(folder)?;
	if languages.is_empty() {
		return Err(format!("no .dat corpus found in {folder}").into());
	}
	Ok(languages)
}

/// Trains (or re-caches) every corpus in the folder.
///
/// Loading a corpus builds its table and writes the binary cache as a
/// side effect, so a plain load is the whole batch step.
fn train(folder: &str) -> Result<(), Box<dyn std::error::Error>> {
	let languages = load_languages(folder)?;
	println!(
		"Trained {} language(s): {}",
		languages.len(),
		languages.get_language_names().join(", ")
	);
	Ok(())
}

/// Identifies each line of a test file.
///
/// Writes `<line-number> <language>` lines to a sibling `.out` report.
/// Lines that cannot be identified (empty ones, in practice) are logged
/// and left out of the report rather than assigned a default language.
fn identify_file(file: &str, folder: &str) -> Result<(), Box<dyn std::error::Error>> {
	let languages = load_languages(folder)?;
	let text = read_corpus(file)?;

	let mut report = String::new();
	for (index, line) in text.lines().enumerate() {
		match languages.classify(line) {
			Ok(name) => {
				report.push_str(&format!("{} {}\n", index + 1, name));
			}
			Err(e) => log::warn!("line {} skipped: {}", index + 1, e),
		}
	}

	let output_path = sibling_path(file, "out")?;
	fs::write(&output_path, report)?;
	println!("Report written to {}", output_path.display());
	Ok(())
}

/// Interactive mode: one sample per line, `q` or `quit` to leave.
fn prompt(folder: &str) -> Result<(), Box<dyn std::error::Error>> {
	let languages = load_languages(folder)?;

	println!("Press q to quit");
	loop {
		print!("> ");
		stdout().flush()?;

		let mut line = String::new();
		if stdin().read_line(&mut line)? == 0 {
			// EOF
			break;
		}
		let text = line.trim_end_matches(['\r', '\n']);

		if text == "q" || text == "quit" {
			break;
		}
		if text.is_empty() {
			continue;
		}

		match languages.classify(text) {
			Ok(name) => println!("{name}"),
			Err(e) => eprintln!("{e}"),
		}
	}
	Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let args: Vec<String> = env::args().collect();
	let mode = match args.get(1) {
		Some(mode) => mode.as_str(),
		None => {
			print_help();
			process::exit(1);
		}
	};

	match mode {
		"train" => train(args.get(2).map(String::as_str).unwrap_or(DATA_FOLDER)),
		"identify" => match args.get(2) {
			Some(file) => identify_file(file, args.get(3).map(String::as_str).unwrap_or(DATA_FOLDER)),
			None => {
				print_help();
				process::exit(1);
			}
		},
		"prompt" => prompt(args.get(2).map(String::as_str).unwrap_or(DATA_FOLDER)),
		_ => {
			print_help();
			process::exit(1);
		}
	}
}
