use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Startup configuration is unusable: bad root directory or stop-word resource.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A document or directory could not be read while building the index.
    #[error("failed to read document {path}: {source}")]
    Indexing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A vocabulary term was found in no document, so its IDF is undefined.
    #[error("term {term:?} occurs in no document; idf is undefined")]
    ZeroDocumentFrequency { term: String },

    /// Vector dimensions disagree with the vocabulary. Never expected in practice.
    #[error("vector has {found} dimensions but the vocabulary has {expected}")]
    Ranking { expected: usize, found: usize },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("result index {index} is out of range; last query returned {len} results")]
    ResultOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
