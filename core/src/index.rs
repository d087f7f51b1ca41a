use crate::document::average_rating;
use crate::{DocumentData, DocumentId, DocumentStatus, Error, Result, StopWords};
use std::collections::BTreeMap;

/// Posting list of one term: document id -> relative term frequency.
pub type Postings = BTreeMap<DocumentId, f64>;

static NO_POSTINGS: Postings = BTreeMap::new();

/// Append-only inverted index. Term frequencies are computed once, when the
/// document is added, and never revisited.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    stop_words: StopWords,
    postings: BTreeMap<String, Postings>,
    documents: BTreeMap<DocumentId, DocumentData>,
    num_docs: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn set_stop_words(&mut self, text: &str) {
        self.stop_words.extend_from_text(text);
        tracing::debug!(stop_words = self.stop_words.len(), "stop words updated");
    }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if self.documents.contains_key(&id) {
            tracing::warn!(id, "rejected duplicate document id");
            return Err(Error::DuplicateDocument(id));
        }
        let words: Vec<&str> = self.stop_words.filter(text).collect();
        if words.is_empty() {
            tracing::warn!(id, "rejected document without indexable words");
            return Err(Error::InvalidDocument { id });
        }

        let freq = 1.0 / words.len() as f64;
        for word in &words {
            *self
                .postings
                .entry((*word).to_string())
                .or_default()
                .entry(id)
                .or_insert(0.0) += freq;
        }
        let rating = average_rating(ratings);
        self.documents.insert(id, DocumentData { rating, status });
        self.num_docs += 1;

        tracing::debug!(id, words = words.len(), rating, ?status, "document indexed");
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.num_docs }

    /// Postings for `term`; empty when the term was never indexed.
    pub fn postings(&self, term: &str) -> &Postings {
        self.postings.get(term).unwrap_or(&NO_POSTINGS)
    }

    pub fn metadata(&self, id: DocumentId) -> Result<DocumentData> {
        self.documents.get(&id).copied().ok_or(Error::NotFound(id))
    }

    /// Inverse document frequency, `ln(N / df)`. `None` for unindexed terms.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let df = self.postings(term).len();
        if df == 0 {
            return None;
        }
        Some((self.num_docs as f64 / df as f64).ln())
    }

    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.documents.keys().copied()
    }

    pub fn term_count(&self) -> usize { self.postings.len() }
}
