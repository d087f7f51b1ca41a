use crate::{Error, Result, StopWords};
use std::collections::BTreeSet;

/// Parsed query. Both sets are ordered by term, so iteration is deterministic.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool { self.plus_words.is_empty() && self.minus_words.is_empty() }
}

pub struct QueryParser<'a> {
    stop_words: &'a StopWords,
}

impl<'a> QueryParser<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self { Self { stop_words } }

    /// Splits `raw` into plus and minus words.
    ///
    /// A `-word` token lands in the minus set and, stripped of its dash, in the
    /// plus set as well; minus words are removed after scoring, so the visible
    /// effect is exclusion only. A minus word that is itself a stop word is
    /// dropped. A lone `-` is rejected.
    pub fn parse(&self, raw: &str) -> Result<Query> {
        let mut query = Query::default();
        for word in self.stop_words.filter(raw) {
            match word.strip_prefix('-') {
                Some("") => return Err(Error::InvalidQuery(format!("empty minus word in {raw:?}"))),
                Some(bare) => {
                    if self.stop_words.contains(bare) {
                        continue;
                    }
                    query.minus_words.insert(bare.to_string());
                    query.plus_words.insert(bare.to_string());
                }
                None => {
                    query.plus_words.insert(word.to_string());
                }
            }
        }
        Ok(query)
    }
}
