use crate::tokenizer::tokenize;
use std::collections::BTreeSet;

/// Words ignored during both indexing and querying.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Adds every word of `text`. Repeated calls accumulate.
    pub fn extend_from_text(&mut self, text: &str) {
        self.words.extend(tokenize(text).map(str::to_string));
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    /// Words of `text` that are not stop words, in input order.
    pub fn filter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        tokenize(text).filter(move |word| !self.contains(word))
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
