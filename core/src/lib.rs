//! Batch tf-idf retrieval over a document collection: tokenization,
//! vocabulary and index construction, cosine-similarity ranking, and the
//! flat-file index codec. Collection parsing and the interactive console
//! live in the `docfind` binary crate.

use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod engine;
pub mod index;
pub mod persist;
pub mod similarity;
pub mod tokenizer;
pub mod vocab;

pub use engine::{Hit, SearchEngine};
pub use index::{DenseTfMatrix, IdfIndex, TfIndex};
pub use vocab::Vocabulary;

/// External document identifier, e.g. `NYT_ENG_19950101.0001`.
pub type DocId = String;
/// Dense numeric identity of a vocabulary term.
pub type TermId = u32;

/// Failures surfaced by index construction and the persisted-index codec.
///
/// Unknown-term lookups and zero-norm similarities are not errors; they are
/// handled as `Option` values at the lookup site (see [`similarity`]).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An empty token reached vocabulary construction. Tokenization drops
    /// empty pieces, so this means upstream preprocessing is broken and the
    /// index build must abort.
    #[error("corpus contains an empty token")]
    EmptyToken,
    /// A persisted index line did not split into the expected field count.
    #[error("{}:{}: expected {} tab-separated fields", .path.display(), .line, .expected)]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        expected: usize,
    },
    /// A persisted weight field failed to parse as a float.
    #[error("{}:{}: invalid weight {:?}", .path.display(), .line, .value)]
    InvalidWeight {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A tokenized document collection, ordered by document id.
///
/// Built once per collection and passed by reference into the index
/// builders. Token order within a document is irrelevant for scoring but
/// repeated tokens must be preserved for counting.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: BTreeMap<DocId, Vec<String>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize raw document texts into a corpus.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = (DocId, S)>,
        S: AsRef<str>,
    {
        let docs = texts
            .into_iter()
            .map(|(id, text)| (id, tokenizer::tokenize(text.as_ref())))
            .collect();
        Self { docs }
    }

    /// Insert an already-tokenized document, replacing any previous tokens
    /// stored under the same id.
    pub fn insert_tokens(&mut self, id: DocId, tokens: Vec<String>) {
        self.docs.insert(id, tokens);
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Documents in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&DocId, &[String])> {
        self.docs.iter().map(|(id, tokens)| (id, tokens.as_slice()))
    }
}
