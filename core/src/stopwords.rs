use crate::error::{Error, Result};
use crate::tokenizer::{normalize_term, tokenize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Fixed set of filler words excluded from the vocabulary.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a stop-word list with one word per line. Blank lines are ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("cannot load stop words from {}: {e}", path.display()))
        })?;
        let words = Self::parse(&text);
        tracing::info!(path = %path.display(), words = words.len(), "loaded stop words");
        Ok(words)
    }

    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize_term(w.as_ref()))
            .filter(|w| !w.is_empty())
            .inspect(|w| {
                if !is_single_token(w) {
                    tracing::warn!(word = %w, "stop word is not a single letter run and will never match a token");
                }
            })
            .collect();
        Self { words }
    }

    /// Exact match against an already normalized term.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// True when the tokenizer would turn `term` into exactly `term`.
fn is_single_token(term: &str) -> bool {
    let tokens = tokenize(term);
    let mut iter = tokens.iter();
    matches!((iter.next(), iter.next()), (Some(only), None) if only == term)
}
