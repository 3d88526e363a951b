use std::collections::{BTreeMap, BTreeSet};

use crate::vocab::Vocabulary;
use crate::{Corpus, DocId, TermId};

/// Term frequencies for one token sequence: each distinct token's raw count
/// divided by the maximal raw count in the sequence. The token (or tokens,
/// on a tie) with the highest count therefore maps to exactly 1.0.
///
/// Shared by document indexing and query scoring, which treats the query as
/// a one-off document. An empty sequence yields an empty map.
pub fn term_frequencies(tokens: &[String]) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let max = counts.values().copied().max().unwrap_or(0);
    counts
        .into_iter()
        .map(|(token, count)| (token.to_owned(), count as f64 / max as f64))
        .collect()
}

/// Per-document normalized term frequencies, keyed by document id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIndex {
    docs: BTreeMap<DocId, BTreeMap<String, f64>>,
}

impl TfIndex {
    /// Compute the tf table of every document in the corpus.
    pub fn build(corpus: &Corpus) -> Self {
        let docs: BTreeMap<DocId, BTreeMap<String, f64>> = corpus
            .iter()
            .map(|(id, tokens)| (id.clone(), term_frequencies(tokens)))
            .collect();
        tracing::debug!(num_docs = docs.len(), "built tf index");
        Self { docs }
    }

    /// Insert one persisted (document, token, tf) entry. Used by the index
    /// loader; entries built by [`TfIndex::build`] never go through here.
    pub fn insert(&mut self, doc_id: DocId, token: String, value: f64) {
        self.docs.entry(doc_id).or_default().insert(token, value);
    }

    pub fn doc(&self, id: &str) -> Option<&BTreeMap<String, f64>> {
        self.docs.get(id)
    }

    /// Document ids in sorted order.
    pub fn doc_ids(&self) -> impl Iterator<Item = &DocId> {
        self.docs.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocId, &BTreeMap<String, f64>)> {
        self.docs.iter()
    }

    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }
}

/// Inverse document frequency of every token observed in the corpus:
/// `ln(N / df)` where `df` counts documents containing the token at least
/// once. Tokens absent from the corpus have no entry; lookups for them
/// return `None` and consumers substitute a weight of 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfIndex {
    weights: BTreeMap<String, f64>,
}

impl IdfIndex {
    /// Compute idf over the full corpus. Every token that appears in at
    /// least one document gets an entry, so `df` is never zero.
    pub fn build(corpus: &Corpus) -> Self {
        let num_docs = corpus.len() as f64;
        let mut df: BTreeMap<&str, u64> = BTreeMap::new();
        for (_, tokens) in corpus.iter() {
            let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in distinct {
                *df.entry(token).or_insert(0) += 1;
            }
        }

        let weights = df
            .into_iter()
            .map(|(token, df)| (token.to_owned(), (num_docs / df as f64).ln()))
            .collect();
        tracing::debug!(num_docs = corpus.len(), "built idf index");
        Self { weights }
    }

    /// Insert one persisted (token, idf) entry. Used by the index loader.
    pub fn insert(&mut self, token: String, value: f64) {
        self.weights.insert(token, value);
    }

    /// `None` for tokens never seen in the corpus; callers treat that as a
    /// weight of 0 rather than an error.
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, f64)> {
        self.weights.iter().map(|(token, value)| (token, *value))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Idf weights as a dense vector indexed by [`TermId`]. Vocabulary terms
    /// without an idf entry (possible only on inconsistent loaded indexes)
    /// get 0.
    pub fn dense_weights(&self, vocabulary: &Vocabulary) -> Vec<f64> {
        vocabulary
            .terms()
            .iter()
            .map(|term| self.weights.get(term).copied().unwrap_or(0.0))
            .collect()
    }
}

/// Dense term-by-document view of the corpus term frequencies, rows indexed
/// by [`TermId`] and columns by position in the sorted document id list.
///
/// The sparse [`TfIndex`] is the form scoring and persistence work with;
/// this view exists for consumers that want the whole matrix at once.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseTfMatrix {
    doc_ids: Vec<DocId>,
    num_terms: usize,
    values: Vec<f64>,
}

impl DenseTfMatrix {
    pub fn build(corpus: &Corpus, vocabulary: &Vocabulary) -> Self {
        let doc_ids: Vec<DocId> = corpus.iter().map(|(id, _)| id.clone()).collect();
        let num_terms = vocabulary.len();
        let mut values = vec![0.0; num_terms * doc_ids.len()];
        for (col, (_, tokens)) in corpus.iter().enumerate() {
            for (token, tf) in term_frequencies(tokens) {
                if let Some(term_id) = vocabulary.id(&token) {
                    values[term_id as usize * doc_ids.len() + col] = tf;
                }
            }
        }
        Self {
            doc_ids,
            num_terms,
            values,
        }
    }

    pub fn value(&self, term: TermId, doc: usize) -> f64 {
        self.values[term as usize * self.doc_ids.len() + doc]
    }

    pub fn num_terms(&self) -> usize {
        self.num_terms
    }

    pub fn num_docs(&self) -> usize {
        self.doc_ids.len()
    }

    /// Document ids in column order.
    pub fn doc_ids(&self) -> &[DocId] {
        &self.doc_ids
    }
}
