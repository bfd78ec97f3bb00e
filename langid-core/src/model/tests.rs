//! Tests for classification over a candidate set.
//!
//! Covers the argmax contract (ordering, ties, determinism), the error
//! contracts for empty inputs and empty candidate sets, and the
//! two-language identification scenario.

use crate::error::Error;
use crate::model::language_model::LanguageModel;
use crate::model::language_set::LanguageSet;

fn set_from(corpora: &[(&str, &str)]) -> LanguageSet {
	let mut set = LanguageSet::default();
	for (name, corpus) in corpora {
		set.add(LanguageModel::from_corpus(name, corpus)).unwrap();
	}
	set
}

#[test]
fn classifies_the_closer_language() {
	let set = set_from(&[("A", "hello\nworld"), ("B", "bonjour\nmonde")]);

	assert_eq!(set.classify("hello").unwrap(), "A");
	assert_eq!(set.classify("bonjour").unwrap(), "B");
}

#[test]
fn classification_is_deterministic() {
	let set = set_from(&[("A", "hello\nworld"), ("B", "bonjour\nmonde")]);

	let first = set.classify("monde on world").unwrap().to_owned();
	let second = set.classify("monde on world").unwrap().to_owned();
	assert_eq!(first, second);
}

#[test]
fn exact_ties_go_to_the_first_candidate() {
	// Identical corpora give identical tables, so every sample ties
	let set = set_from(&[("first", "same text"), ("second", "same text")]);

	assert_eq!(set.classify("same").unwrap(), "first");

	// Swapping the order swaps the winner
	let swapped = set_from(&[("second", "same text"), ("first", "same text")]);
	assert_eq!(swapped.classify("same").unwrap(), "second");
}

#[test]
fn empty_text_is_rejected() {
	let set = set_from(&[("A", "hello")]);

	assert!(matches!(set.classify(""), Err(Error::EmptyInput)));
}

#[test]
fn empty_set_has_no_candidates() {
	let set = LanguageSet::default();

	assert!(matches!(set.classify("hello"), Err(Error::NoCandidates)));
}

#[test]
fn languages_with_empty_tables_are_skipped() {
	// "void" was trained on an empty corpus and can never be scored
	let set = set_from(&[("void", ""), ("A", "hello")]);

	assert_eq!(set.classify("hello").unwrap(), "A");

	let only_void = set_from(&[("void", "")]);
	assert!(matches!(only_void.classify("hello"), Err(Error::NoCandidates)));
}

#[test]
fn duplicate_language_names_are_rejected() {
	let mut set = set_from(&[("A", "hello")]);

	let result = set.add(LanguageModel::from_corpus("A", "other text"));
	assert!(matches!(result, Err(Error::DuplicateLanguage(name)) if name == "A"));
}

#[test]
fn scores_preserve_candidate_order() {
	let set = set_from(&[("A", "hello\nworld"), ("void", ""), ("B", "bonjour\nmonde")]);

	let scores = set.scores("hello");
	let names: Vec<&str> = scores.iter().map(|(name, _)| *name).collect();
	// "void" is absent, the others keep their insertion order
	assert_eq!(names, ["A", "B"]);
	assert!(scores.iter().all(|(_, score)| *score <= 0.0));
}

#[test]
fn classify_agrees_with_the_best_reported_score() {
	let set = set_from(&[("A", "hello\nworld"), ("B", "bonjour\nmonde")]);

	let scores = set.scores("world");
	let best = scores
		.iter()
		.fold(None::<(&str, f64)>, |best, &(name, score)| match best {
			Some((_, best_score)) if score <= best_score => best,
			_ => Some((name, score)),
		})
		.unwrap();

	assert_eq!(set.classify("world").unwrap(), best.0);
}
