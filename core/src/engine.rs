use serde::Serialize;

use crate::index::{IdfIndex, TfIndex};
use crate::similarity::similarity;
use crate::tokenizer::stem;
use crate::vocab::Vocabulary;
use crate::{Corpus, DocId, Error};

/// Upper bound on the number of results a query returns.
pub const TOP_K: usize = 10;

/// One ranked query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub doc_id: DocId,
    pub score: f64,
}

/// Read-only tf/idf index pair with query execution.
///
/// Built once per collection, either from a tokenized [`Corpus`] or from
/// persisted tables, and never mutated afterwards. Concurrent queries
/// against a built engine are safe; rebuilding while queries are in flight
/// is not supported.
pub struct SearchEngine {
    tf: TfIndex,
    idf: IdfIndex,
}

impl SearchEngine {
    /// Build both index tables from a tokenized corpus.
    ///
    /// Vocabulary construction runs first and aborts the build on an empty
    /// token, before any table is produced.
    pub fn build(corpus: &Corpus) -> Result<Self, Error> {
        let vocabulary = Vocabulary::build(corpus)?;
        tracing::info!(
            num_docs = corpus.len(),
            num_terms = vocabulary.len(),
            "building index"
        );
        Ok(Self {
            tf: TfIndex::build(corpus),
            idf: IdfIndex::build(corpus),
        })
    }

    /// Assemble an engine from already-built tables, e.g. loaded from disk.
    pub fn from_parts(tf: TfIndex, idf: IdfIndex) -> Self {
        Self { tf, idf }
    }

    pub fn tf(&self) -> &TfIndex {
        &self.tf
    }

    pub fn idf(&self) -> &IdfIndex {
        &self.idf
    }

    /// Score every indexed document against the query and return the top
    /// results: at most [`TOP_K`], sorted by score descending, zero scores
    /// dropped.
    ///
    /// Query terms receive stemming only; they are expected to arrive
    /// lowercase and punctuation-free already, so document-style
    /// tokenization is deliberately not re-applied. Documents whose
    /// similarity is undefined score 0. Equal scores order by document id
    /// ascending, which makes result order deterministic.
    ///
    /// `None` means no document scored above zero, distinguishing "nothing
    /// matched" from a truncated result list.
    pub fn execute_query(&self, terms: &[String]) -> Option<Vec<Hit>> {
        let stemmed: Vec<String> = terms.iter().map(|term| stem(term)).collect();
        tracing::debug!(num_terms = stemmed.len(), "executing query");

        let mut scored: Vec<Hit> = self
            .tf
            .doc_ids()
            .map(|id| Hit {
                doc_id: id.clone(),
                score: similarity(&stemmed, id, &self.tf, &self.idf).unwrap_or(0.0),
            })
            .collect();
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        scored.truncate(TOP_K);
        scored.retain(|hit| hit.score != 0.0);

        if scored.is_empty() {
            None
        } else {
            Some(scored)
        }
    }
}
