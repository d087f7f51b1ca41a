use crate::DocumentId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("document {id} has no indexable words after stop-word removal")]
    InvalidDocument { id: DocumentId },

    #[error("document {0} not found")]
    NotFound(DocumentId),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("document {0} already exists")]
    DuplicateDocument(DocumentId),
}

pub type Result<T> = core::result::Result<T, Error>;
