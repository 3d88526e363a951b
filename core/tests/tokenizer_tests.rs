use docfind_core::tokenizer::{stem, tokenize};

#[test]
fn lowercases_strips_punctuation_and_stems() {
    assert_eq!(tokenize("The Cat, sat."), vec!["the", "cat", "sat"]);
}

#[test]
fn keeps_repeated_tokens() {
    assert_eq!(tokenize("cat cat dog"), vec!["cat", "cat", "dog"]);
}

#[test]
fn tokenizing_normalized_text_is_idempotent() {
    let once = tokenize("The cat sat on the mat with a dog and a fish");
    let again = tokenize(&once.join(" "));
    assert_eq!(once, again);
}

#[test]
fn empty_and_punctuation_only_input_yields_nothing() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("!!! ... ---").is_empty());
}

#[test]
fn unicode_text_is_normalized_before_casefolding() {
    // NFKC folds the ligature, lowercasing handles the rest
    assert_eq!(tokenize("ﬁsh Food"), vec!["fish", "food"]);
}

#[test]
fn stem_is_the_query_side_normalization() {
    assert_eq!(stem("cats"), "cat");
    assert_eq!(stem("running"), "run");
}
