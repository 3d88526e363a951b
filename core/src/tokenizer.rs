use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
}

/// Reduce a single term to its English (porter2) stem.
///
/// This is the only normalization applied to query terms: callers hand in
/// terms that are already lowercase and punctuation-free, matching how the
/// index side preprocessed document text.
pub fn stem(term: &str) -> String {
    STEMMER.stem(term).to_string()
}

/// Tokenize document text: NFKC normalization, lowercase, split at
/// whitespace, strip ASCII punctuation from each piece, drop pieces that
/// become empty, stem the survivors.
///
/// Always succeeds; an empty result just contributes nothing to scoring.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    normalized
        .split_whitespace()
        .map(strip_punctuation)
        .filter(|piece| !piece.is_empty())
        .map(|piece| stem(&piece))
        .collect()
}

// ASCII punctuation only, matching the preprocessing the persisted
// collections were built with.
fn strip_punctuation(piece: &str) -> String {
    piece.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
