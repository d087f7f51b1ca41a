pub mod document;
pub mod error;
pub mod index;
pub mod matcher;
pub mod query;
pub mod ranker;
pub mod server;
pub mod shared;
pub mod stop_words;
pub mod tokenizer;

pub use document::{Document, DocumentData, DocumentId, DocumentStatus};
pub use error::{Error, Result};
pub use index::InvertedIndex;
pub use query::{Query, QueryParser};
pub use ranker::{DocumentPredicate, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
pub use server::SearchServer;
pub use shared::SharedSearchServer;
pub use stop_words::StopWords;
