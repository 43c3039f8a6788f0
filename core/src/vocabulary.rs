use crate::stopwords::StopWords;
use indexmap::IndexSet;

/// Ordered, duplicate-free corpus terms. A term's position is its vector dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    /// Build from already normalized terms, keeping first occurrences.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { terms: terms.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Dimension of `term`, if it is part of the vocabulary.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }
}

/// Accumulates surviving terms in first-encountered order.
pub struct VocabularyBuilder<'a> {
    stop_words: &'a StopWords,
    terms: IndexSet<String>,
}

impl<'a> VocabularyBuilder<'a> {
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words, terms: IndexSet::new() }
    }

    /// Add a document's tokens and return the dimension of each surviving one,
    /// in token order. Stop-words and empty tokens are dropped.
    pub fn add_tokens<'t, I>(&mut self, tokens: I) -> Vec<usize>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut dims = Vec::new();
        for token in tokens {
            if token.is_empty() || self.stop_words.contains(token) {
                continue;
            }
            let dim = match self.terms.get_index_of(token) {
                Some(dim) => dim,
                None => self.terms.insert_full(token.to_string()).0,
            };
            dims.push(dim);
        }
        dims
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn finish(self) -> Vocabulary {
        Vocabulary { terms: self.terms }
    }
}
