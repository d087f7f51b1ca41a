use crate::ranker::DocumentPredicate;
use crate::{Document, DocumentId, DocumentStatus, Result, SearchServer};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle for sharing one server between threads.
///
/// Queries run under a read lock and may proceed in parallel; mutations take
/// the write lock and wait for in-flight queries to finish.
#[derive(Clone, Default)]
pub struct SharedSearchServer {
    inner: Arc<RwLock<SearchServer>>,
}

impl SharedSearchServer {
    pub fn new(server: SearchServer) -> Self { Self { inner: Arc::new(RwLock::new(server)) } }

    pub fn set_stop_words(&self, text: &str) { self.inner.write().set_stop_words(text) }

    pub fn add_document(&self, id: DocumentId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.inner.write().add_document(id, text, status, ratings)
    }

    pub fn document_count(&self) -> usize { self.inner.read().document_count() }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents(raw_query)
    }

    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: &P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate + ?Sized,
    {
        self.inner.read().find_top_documents_with(raw_query, predicate)
    }

    pub fn match_document(&self, raw_query: &str, id: DocumentId) -> Result<(Vec<String>, DocumentStatus)> {
        self.inner.read().match_document(raw_query, id)
    }

    /// Runs `f` against the server under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&SearchServer) -> R) -> R { f(&self.inner.read()) }
}
