use crate::{DocumentId, DocumentStatus, InvertedIndex, Query, Result};

/// Plus words of `query` found in document `id`, in term order, with the
/// document's status. Any minus word present in the document clears the list.
pub fn match_document(index: &InvertedIndex, query: &Query, id: DocumentId) -> Result<(Vec<String>, DocumentStatus)> {
    let status = index.metadata(id)?.status;

    let excluded = query.minus_words.iter().any(|word| index.postings(word).contains_key(&id));
    if excluded {
        return Ok((Vec::new(), status));
    }

    let matched = query
        .plus_words
        .iter()
        .filter(|word| index.postings(word).contains_key(&id))
        .cloned()
        .collect();
    Ok((matched, status))
}
