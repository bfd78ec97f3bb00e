//! Top-level module for the language identification system.
//!
//! This module provides a character-bigram language identifier, including:
//! - Per-language count tables (`FrequencyTable`)
//! - Named, persistable models (`LanguageModel`)
//! - An ordered candidate set with classification (`LanguageSet`)

/// Unigram/bigram count tables and the scoring arithmetic.
///
/// Handles corpus ingestion with per-line start contexts, get-or-zero
/// count accessors, and smoothed log-likelihood scoring.
pub mod frequency_table;

/// A frequency table tied to a language name.
///
/// Supports training from in-memory corpora and loading corpus files
/// with a binary cache.
pub mod language_model;

/// Ordered candidate languages and argmax classification.
///
/// Exposes folder loading, candidate introspection, per-language scores
/// and the top-level `classify` operation.
pub mod language_set;

#[cfg(test)]
mod tests;
