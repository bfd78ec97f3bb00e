use langid_core::model::language_model::LanguageModel;
use langid_core::model::language_set::LanguageSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a candidate set from in-memory corpora.
    // For real corpora, LanguageSet::new("./data") loads every .dat file
    // in the folder (and caches the trained tables as .bin files).
    let mut languages = LanguageSet::default();
    languages.add(LanguageModel::from_corpus(
        "english",
        "the quick brown fox jumps over the lazy dog\nhello world",
    ))?;
    languages.add(LanguageModel::from_corpus(
        "french",
        "portez ce vieux whisky au juge blond qui fume\nbonjour le monde",
    ))?;

    // The candidate order is the insertion order; on an exact score tie
    // the first language wins
    println!("Loaded languages: {}", languages.get_language_names().join(", "));

    // Identify a few samples
    for sample in ["hello the world", "bonjour du monde", "whisky"] {
        println!("'{}' -> {}", sample, languages.classify(sample)?);
    }

    // Per-language log-likelihood scores, for inspection
    for (name, score) in languages.scores("hello the world") {
        println!("{}: {}", name, score);
    }

    // Attempting to identify an empty text
    match languages.classify("") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Empty texts are rejected: {e}"),
    }

    // Attempting to add a language that already exists
    match languages.add(LanguageModel::from_corpus("english", "more text")) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Duplicate languages are rejected: {e}"),
    }

    // Attempting to classify with no candidates at all
    let empty = LanguageSet::default();
    match empty.classify("hello") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("An empty set cannot answer: {e}"),
    }

    Ok(())
}
