use crate::index::{term_frequencies, IdfIndex, TfIndex};

/// Cosine similarity between a query and one indexed document.
///
/// The query's own tf table is computed exactly like a document's (counts
/// normalized by the query's most frequent term). Query terms unknown to the
/// corpus take idf 0, so they contribute to neither the dot product nor the
/// query norm. The document norm runs over the document's full tf table.
///
/// Returns `None` when the similarity is undefined: the document id is not
/// in the index, or either vector has zero norm (an empty document, an empty
/// query, or a query made entirely of unknown terms). Callers substitute a
/// score of 0 and keep going.
pub fn similarity(
    query_tokens: &[String],
    doc_id: &str,
    tf: &TfIndex,
    idf: &IdfIndex,
) -> Option<f64> {
    let doc_tf = tf.doc(doc_id)?;
    let query_tf = term_frequencies(query_tokens);

    let mut dot = 0.0;
    let mut query_sq = 0.0;
    for (term, tf_q) in &query_tf {
        let idf_t = idf.weight(term).unwrap_or(0.0);
        let weight_q = tf_q * idf_t;
        let weight_d = doc_tf.get(term).copied().unwrap_or(0.0) * idf_t;
        dot += weight_q * weight_d;
        query_sq += weight_q * weight_q;
    }

    let mut doc_sq = 0.0;
    for (term, tf_d) in doc_tf {
        let idf_t = idf.weight(term).unwrap_or(0.0);
        let weight_d = tf_d * idf_t;
        doc_sq += weight_d * weight_d;
    }

    let norm = query_sq.sqrt() * doc_sq.sqrt();
    if norm == 0.0 {
        return None;
    }
    Some(dot / norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Corpus;

    fn indexed(corpus: &Corpus) -> (TfIndex, IdfIndex) {
        (TfIndex::build(corpus), IdfIndex::build(corpus))
    }

    #[test]
    fn unknown_document_is_undefined() {
        let corpus = Corpus::from_texts([("doc1".to_string(), "cat sat")]);
        let (tf, idf) = indexed(&corpus);
        let query = vec!["cat".to_string()];
        assert_eq!(similarity(&query, "missing", &tf, &idf), None);
    }

    #[test]
    fn fully_unknown_query_is_undefined() {
        let corpus = Corpus::from_texts([("doc1".to_string(), "cat sat")]);
        let (tf, idf) = indexed(&corpus);
        let query = vec!["zeppelin".to_string()];
        assert_eq!(similarity(&query, "doc1", &tf, &idf), None);
    }

    #[test]
    fn empty_document_is_undefined() {
        let mut corpus = Corpus::from_texts([("doc1".to_string(), "cat sat")]);
        corpus.insert_tokens("doc2".to_string(), Vec::new());
        let (tf, idf) = indexed(&corpus);
        let query = vec!["cat".to_string()];
        assert_eq!(similarity(&query, "doc2", &tf, &idf), None);
    }
}
