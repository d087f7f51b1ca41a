use crate::{Document, DocumentId, DocumentStatus, InvertedIndex, Query, Result};
use std::collections::BTreeMap;

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are treated as equal and ordered by rating.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Decides whether a document may appear in ranked results.
pub trait DocumentPredicate {
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, i32) -> bool,
{
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: i32) -> bool {
        self(id, status, rating)
    }
}

impl DocumentPredicate for DocumentStatus {
    fn matches(&self, _id: DocumentId, status: DocumentStatus, _rating: i32) -> bool { *self == status }
}

/// Scores every document that passes `predicate` and contains a plus word,
/// then drops documents containing any minus word. Output is in id order.
pub fn find_all_documents<P>(index: &InvertedIndex, query: &Query, predicate: &P) -> Result<Vec<Document>>
where
    P: DocumentPredicate + ?Sized,
{
    let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();
    for word in &query.plus_words {
        let Some(idf) = index.idf(word) else { continue };
        for (&id, &term_freq) in index.postings(word) {
            let meta = index.metadata(id)?;
            if predicate.matches(id, meta.status, meta.rating) {
                *relevance.entry(id).or_insert(0.0) += idf * term_freq;
            }
        }
    }
    for word in &query.minus_words {
        for id in index.postings(word).keys() {
            relevance.remove(id);
        }
    }

    relevance
        .into_iter()
        .map(|(id, relevance)| {
            let rating = index.metadata(id)?.rating;
            Ok(Document { id, relevance, rating })
        })
        .collect()
}

/// Orders by relevance descending. Documents whose relevance lies within
/// `RELEVANCE_EPSILON` of the head of their run are ordered by rating
/// descending, then by id.
pub fn sort_by_relevance(documents: &mut [Document]) {
    documents.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    let mut start = 0;
    while start < documents.len() {
        let head = documents[start].relevance;
        let mut end = start + 1;
        while end < documents.len() && head - documents[end].relevance < RELEVANCE_EPSILON {
            end += 1;
        }
        documents[start..end].sort_by(|a, b| b.rating.cmp(&a.rating).then(a.id.cmp(&b.id)));
        start = end;
    }
}

pub fn find_top_documents<P>(index: &InvertedIndex, query: &Query, predicate: &P) -> Result<Vec<Document>>
where
    P: DocumentPredicate + ?Sized,
{
    let mut documents = find_all_documents(index, query, predicate)?;
    let total_hits = documents.len();
    sort_by_relevance(&mut documents);
    documents.truncate(MAX_RESULT_DOCUMENT_COUNT);
    tracing::debug!(
        plus = query.plus_words.len(),
        minus = query.minus_words.len(),
        total_hits,
        returned = documents.len(),
        "ranked query"
    );
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: DocumentId, relevance: f64, rating: i32) -> Document { Document { id, relevance, rating } }

    fn ids(docs: &[Document]) -> Vec<DocumentId> { docs.iter().map(|d| d.id).collect() }

    #[test]
    fn sorts_by_relevance_descending() {
        let mut docs = vec![doc(1, 0.1, 9), doc(2, 0.7, 0), doc(3, 0.4, 5)];
        sort_by_relevance(&mut docs);
        assert_eq!(ids(&docs), vec![2, 3, 1]);
    }

    #[test]
    fn near_ties_fall_back_to_rating() {
        let mut docs = vec![doc(10, 0.5, 2), doc(20, 0.5 + 1e-7, 4), doc(30, 0.5 - 1e-7, -1)];
        sort_by_relevance(&mut docs);
        assert_eq!(ids(&docs), vec![20, 10, 30]);
    }

    #[test]
    fn equal_rating_ties_keep_id_order() {
        let mut docs = vec![doc(7, 0.0, 1), doc(3, 0.0, 1), doc(5, 0.0, 1)];
        sort_by_relevance(&mut docs);
        assert_eq!(ids(&docs), vec![3, 5, 7]);
    }

    #[test]
    fn status_predicate_is_equality() {
        assert!(DocumentStatus::Banned.matches(1, DocumentStatus::Banned, 0));
        assert!(!DocumentStatus::Banned.matches(1, DocumentStatus::Actual, 0));
    }

    #[test]
    fn closures_are_predicates() {
        let even = |id: DocumentId, _: DocumentStatus, _: i32| id % 2 == 0;
        assert!(even.matches(2, DocumentStatus::Removed, 0));
        assert!(!even.matches(3, DocumentStatus::Actual, 0));
    }
}
