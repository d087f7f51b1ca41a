use crate::ranker::{self, DocumentPredicate};
use crate::{matcher, Document, DocumentData, DocumentId, DocumentStatus, InvertedIndex, Query, QueryParser, Result};

/// In-memory full-text search over an append-only document set.
#[derive(Debug, Default)]
pub struct SearchServer {
    index: InvertedIndex,
}

impl SearchServer {
    pub fn new() -> Self { Self::default() }

    /// Builds a server with its stop words already set.
    pub fn with_stop_words(text: &str) -> Self {
        let mut server = Self::new();
        server.set_stop_words(text);
        server
    }

    /// Adds the space-separated words of `text` to the stop-word set.
    pub fn set_stop_words(&mut self, text: &str) { self.index.set_stop_words(text) }

    pub fn is_stop_word(&self, word: &str) -> bool { self.index.stop_words().contains(word) }

    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.index.add_document(id, text, status, ratings)
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn metadata(&self, id: DocumentId) -> Result<DocumentData> { self.index.metadata(id) }

    pub fn document_ids(&self) -> impl Iterator<Item = DocumentId> + '_ { self.index.document_ids() }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn parse_query(&self, raw_query: &str) -> Result<Query> {
        QueryParser::new(self.index.stop_words()).parse(raw_query)
    }

    /// Top documents with status `Actual`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, &DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, &status)
    }

    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: &P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate + ?Sized,
    {
        let query = self.parse_query(raw_query)?;
        ranker::find_top_documents(&self.index, &query, predicate)
    }

    pub fn match_document(&self, raw_query: &str, id: DocumentId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = self.parse_query(raw_query)?;
        matcher::match_document(&self.index, &query, id)
    }
}
