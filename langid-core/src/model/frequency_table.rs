use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The symbol observed at the "previous character" position of a bigram.
///
/// `Start` marks the beginning of a line and is distinct from every real
/// character by construction, so line-initial characters get their own
/// transition counts instead of blending into the rest of the corpus.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
	/// Virtual start-of-line marker.
	Start,
	/// A real character from the corpus.
	Char(char),
}

/// Character and bigram frequency counts for one language.
///
/// The `FrequencyTable` stores raw occurrence counts collected from a
/// training corpus and scores unseen text against them.
///
/// # Responsibilities
/// - Accumulate unigram and bigram counts from lower-cased corpus lines
/// - Expose get-or-zero accessors over the count maps
/// - Score a text sample as a smoothed log-likelihood
///
/// # Invariants
/// - Both maps are built from the same lower-cased corpus
/// - Every stored count is >= 1; absent keys mean a count of zero
/// - Counts are raw: smoothing and normalization happen at scoring time,
///   never during training
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
	/// Occurrences of each character.
	unigram: HashMap<char, usize>,
	/// Occurrences of each (previous, current) character pair.
	bigram: HashMap<(Symbol, char), usize>,
}

impl FrequencyTable {
	/// Trains a table from a whole corpus.
	///
	/// The corpus is treated as a sequence of lines; each line starts a
	/// fresh `Symbol::Start` context. An empty corpus yields an empty
	/// table (vocabulary size 0), which is skipped at scoring time.
	pub fn train(corpus: &str) -> Self {
		let mut table = Self::default();
		for line in corpus.lines() {
			table.add_line(line);
		}
		table
	}

	/// Adds one corpus line to the table.
	///
	/// The line is lower-cased before counting, so the table is
	/// case-insensitive by construction. Scans characters left to right,
	/// counting the character itself and its transition from the previous
	/// symbol; the first character transitions from `Symbol::Start`.
	///
	/// # Notes
	/// - An empty line contributes no counts.
	pub fn add_line(&mut self, line: &str) {
		let mut previous = Symbol::Start;
		for current in line.to_lowercase().chars() {
			*self.unigram.entry(current).or_insert(0) += 1;
			*self.bigram.entry((previous, current)).or_insert(0) += 1;
			previous = Symbol::Char(current);
		}
	}

	/// Returns how often `symbol` was observed as a character.
	///
	/// `Symbol::Start` is virtual and never counted, so it is always 0.
	pub fn unigram_count(&self, symbol: Symbol) -> usize {
		match symbol {
			Symbol::Start => 0,
			Symbol::Char(c) => self.unigram.get(&c).copied().unwrap_or(0),
		}
	}

	/// Returns how often the transition `previous` → `current` was observed.
	pub fn bigram_count(&self, previous: Symbol, current: char) -> usize {
		self.bigram.get(&(previous, current)).copied().unwrap_or(0)
	}

	/// Number of distinct characters observed during training.
	///
	/// Used as the additive smoothing denominator when scoring.
	pub fn vocabulary_size(&self) -> usize {
		self.unigram.len()
	}

	/// Scores a text sample as a log-likelihood against this table.
	///
	/// Each character contributes `ln((bigram + 1) / (unigram + V))` where
	/// `bigram` is the count of the transition from the previous symbol,
	/// `unigram` is the count of the **previous** symbol itself and `V` is
	/// the vocabulary size. The start symbol is injected once, before the
	/// first character of the whole input; embedded newlines are scored as
	/// ordinary characters.
	///
	/// The result grows more negative with text length and with mismatch;
	/// it is not a calibrated probability and is only meaningful relative
	/// to other tables' scores for the same text.
	///
	/// # Notes
	/// - Returns `None` for an empty text: the table then takes no part in
	///   the comparison at all.
	/// - Returns `None` for an empty table: with a vocabulary of zero every
	///   denominator would be zero.
	/// - The text is scored as-is, without case folding.
	pub fn score(&self, text: &str) -> Option<f64> {
		if text.is_empty() {
			return None;
		}

		let vocabulary = self.vocabulary_size();
		if vocabulary == 0 {
			return None;
		}

		let mut previous = Symbol::Start;
		let mut log_score = 0.0;
		for current in text.chars() {
			let bigram = self.bigram_count(previous, current);
			let unigram = self.unigram_count(previous);
			log_score += ((bigram + 1) as f64 / (unigram + vocabulary) as f64).ln();
			previous = Symbol::Char(current);
		}

		Some(log_score)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn training_counts_every_character_once() {
		let table = FrequencyTable::train("hello\nworld");

		// 10 characters across both lines, line separator excluded
		assert_eq!(table.unigram.values().sum::<usize>(), 10);
		// One bigram per character, start transitions included
		assert_eq!(table.bigram.values().sum::<usize>(), 10);
	}

	#[test]
	fn training_resets_context_on_every_line() {
		let table = FrequencyTable::train("ab\ncd");

		assert_eq!(table.bigram_count(Symbol::Start, 'a'), 1);
		assert_eq!(table.bigram_count(Symbol::Start, 'c'), 1);
		// The line separator itself is never counted
		assert_eq!(table.unigram_count(Symbol::Char('\n')), 0);
		assert_eq!(table.bigram_count(Symbol::Char('b'), 'c'), 0);
	}

	#[test]
	fn training_is_case_insensitive() {
		assert_eq!(FrequencyTable::train("ABC"), FrequencyTable::train("abc"));
	}

	#[test]
	fn empty_lines_only_reset_the_context() {
		let with_blank = FrequencyTable::train("ab\n\ncd");
		let without_blank = FrequencyTable::train("ab\ncd");

		assert_eq!(with_blank, without_blank);
	}

	#[test]
	fn empty_corpus_yields_an_empty_table() {
		let table = FrequencyTable::train("");

		assert_eq!(table.vocabulary_size(), 0);
		assert_eq!(table.score("anything"), None);
	}

	#[test]
	fn score_skips_empty_text() {
		let table = FrequencyTable::train("hello");

		assert_eq!(table.score(""), None);
	}

	#[test]
	fn smoothing_denominator_uses_the_preceding_character_count() {
		// "aab" → unigram a:2 b:1 (V = 2), bigram (start,a):1 (a,a):1 (a,b):1
		let table = FrequencyTable::train("aab");

		// (start,'a'): ln((1+1)/(0+2)); ('a','b'): ln((1+1)/(2+2)).
		// The second denominator holds the count of 'a', not of 'b'.
		let expected = (2.0f64 / 2.0).ln() + (2.0f64 / 4.0).ln();
		let score = table.score("ab").unwrap();
		assert!((score - expected).abs() < 1e-12);
	}

	#[test]
	fn unseen_characters_degrade_to_a_small_probability() {
		let table = FrequencyTable::train("a");

		assert_eq!(table.vocabulary_size(), 1);
		// (start,'z'): ln((0+1)/(0+1)) = 0, no division by zero
		let score = table.score("z").unwrap();
		assert!((score - 0.0).abs() < 1e-12);
	}

	#[test]
	fn larger_vocabulary_strictly_lowers_a_matching_score() {
		let small = FrequencyTable::train("ab");
		let large = FrequencyTable::train("ab\ncd");

		// Same bigram counts along "ab", but V grows from 2 to 4
		assert!(small.score("ab").unwrap() > large.score("ab").unwrap());
	}

	#[test]
	fn repeated_context_strictly_lowers_a_matching_score() {
		// u('a') grows from 1 to 2 while V, (start,'a') and ('a','b')
		// keep the same counts, so only the denominator moves
		let rare = FrequencyTable::train("ab");
		let frequent = FrequencyTable::train("ab\nba");

		assert_eq!(rare.vocabulary_size(), frequent.vocabulary_size());
		assert!(rare.score("ab").unwrap() > frequent.score("ab").unwrap());
	}

	#[test]
	fn newlines_are_ordinary_characters_when_scoring() {
		let table = FrequencyTable::train("ab\ncd");

		// Scoring never re-injects the start symbol: '\n' is just an
		// unseen character, and 'c' is scored after it rather than after
		// a fresh start context.
		let expected = (2.0f64 / 4.0).ln() // (start,'a'), count 1
			+ (1.0f64 / 5.0).ln() // ('a','\n'), unseen after u('a') = 1
			+ (1.0f64 / 4.0).ln(); // ('\n','c'), unseen after unseen
		let score = table.score("a\nc").unwrap();
		assert!((score - expected).abs() < 1e-12);
	}
}
