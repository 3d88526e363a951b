use std::collections::{BTreeSet, HashMap};

use crate::{Corpus, Error, TermId};

/// Dense numeric identities for every distinct token in a corpus.
///
/// Ids are contiguous from 0 and assigned in lexicographic token order, so
/// rebuilding the vocabulary from the same corpus reproduces the same
/// mapping. The ordering has no scoring significance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    ids: HashMap<String, TermId>,
}

impl Vocabulary {
    /// Collect the distinct tokens of the whole corpus and assign ids.
    ///
    /// Fails with [`Error::EmptyToken`] if any token is the empty string;
    /// index construction must abort rather than index a broken corpus.
    pub fn build(corpus: &Corpus) -> Result<Self, Error> {
        let mut distinct: BTreeSet<&str> = BTreeSet::new();
        for (_, tokens) in corpus.iter() {
            for token in tokens {
                if token.is_empty() {
                    return Err(Error::EmptyToken);
                }
                distinct.insert(token.as_str());
            }
        }

        let terms: Vec<String> = distinct.into_iter().map(str::to_owned).collect();
        let ids = terms
            .iter()
            .enumerate()
            .map(|(id, term)| (term.clone(), id as TermId))
            .collect();
        tracing::debug!(num_terms = terms.len(), "built vocabulary");
        Ok(Self { terms, ids })
    }

    pub fn id(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// All terms in id order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
