use crate::corpus::discover_documents;
use crate::error::{Error, Result};
use crate::stopwords::StopWords;
use crate::tokenizer::{tokenize, Tokens};
use crate::vector::TermVector;
use crate::vocabulary::{Vocabulary, VocabularyBuilder};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Abort the build when a document or directory cannot be read. When false it
    /// is logged and left out of the corpus.
    pub abort_on_document_read_error: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self { abort_on_document_read_error: true }
    }
}

/// Everything needed to build an index from disk.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub root: PathBuf,
    pub stop_words: PathBuf,
    pub options: IndexOptions,
}

/// Load the stop-word resource and index every document beneath the root.
pub fn build_index(config: &IndexConfig) -> Result<SearchIndex> {
    let stop_words = StopWords::load(&config.stop_words)?;
    SearchIndex::build(&config.root, &stop_words, config.options)
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedDocument {
    pub path: PathBuf,
    /// TF-IDF weights over the vocabulary.
    pub vector: TermVector,
}

/// Immutable vocabulary, IDF vector and per-document TF-IDF vectors.
///
/// Documents keep corpus insertion order, which is the tie-break order for ranking.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    vocabulary: Vocabulary,
    idf: TermVector,
    documents: Vec<IndexedDocument>,
}

// A document after the vocabulary pass: the dimension of each surviving token.
struct PendingDocument {
    path: PathBuf,
    dims: Vec<usize>,
}

impl SearchIndex {
    pub fn build<P: AsRef<Path>>(root: P, stop_words: &StopWords, options: IndexOptions) -> Result<Self> {
        let root = root.as_ref();
        let files = discover_documents(root, options)?;
        tracing::info!(root = %root.display(), files = files.len(), "discovered documents");

        let mut builder = VocabularyBuilder::new(stop_words);
        let mut pending = Vec::with_capacity(files.len());
        for path in files {
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(source) if !options.abort_on_document_read_error => {
                    tracing::warn!(path = %path.display(), error = %source, "skipping unreadable document");
                    continue;
                }
                Err(source) => return Err(Error::Indexing { path, source }),
            };
            let dims = builder.add_tokens(&tokenize(&text));
            tracing::debug!(path = %path.display(), terms = dims.len(), "tokenized document");
            pending.push(PendingDocument { path, dims });
        }

        Self::assemble(pending, builder.finish())
    }

    /// Index in-memory texts. Order of `documents` is the corpus order.
    pub fn from_texts<I, P, S>(documents: I, stop_words: &StopWords) -> Result<Self>
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        let mut builder = VocabularyBuilder::new(stop_words);
        let pending = documents
            .into_iter()
            .map(|(path, text)| PendingDocument {
                path: path.into(),
                dims: builder.add_tokens(&tokenize(text.as_ref())),
            })
            .collect();
        Self::assemble(pending, builder.finish())
    }

    fn assemble(pending: Vec<PendingDocument>, vocabulary: Vocabulary) -> Result<Self> {
        let tf: Vec<TermVector> = pending
            .iter()
            .map(|doc| {
                let mut vector = TermVector::zeros(vocabulary.len());
                for &dim in &doc.dims {
                    vector.increment(dim);
                }
                vector
            })
            .collect();
        let idf = inverse_document_frequencies(&tf, &vocabulary)?;

        let documents = pending
            .into_iter()
            .zip(tf)
            .map(|(doc, tf)| Ok(IndexedDocument { path: doc.path, vector: tf.hadamard(&idf)? }))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(documents = documents.len(), terms = vocabulary.len(), "built search index");
        Ok(Self { vocabulary, idf, documents })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &TermVector {
        &self.idf
    }

    pub fn documents(&self) -> &[IndexedDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Raw term counts of `tokens` over the vocabulary; unknown tokens are ignored.
pub fn term_frequencies(tokens: &Tokens, vocabulary: &Vocabulary) -> TermVector {
    let mut vector = TermVector::zeros(vocabulary.len());
    for dim in tokens.iter().filter_map(|t| vocabulary.index_of(t)) {
        vector.increment(dim);
    }
    vector
}

/// `idf[i] = log10(N / df[i])` where `df[i]` counts vectors non-zero at `i`.
pub fn inverse_document_frequencies(tf: &[TermVector], vocabulary: &Vocabulary) -> Result<TermVector> {
    let mut df = vec![0usize; vocabulary.len()];
    for vector in tf {
        if vector.len() != vocabulary.len() {
            return Err(Error::Ranking { expected: vocabulary.len(), found: vector.len() });
        }
        for (count, &value) in df.iter_mut().zip(vector.as_slice()) {
            if value != 0.0 {
                *count += 1;
            }
        }
    }

    let total = tf.len() as f64;
    df.iter()
        .enumerate()
        .map(|(i, &count)| {
            if count == 0 {
                let term = vocabulary.term(i).unwrap_or_default().to_string();
                return Err(Error::ZeroDocumentFrequency { term });
            }
            Ok((total / count as f64).log10())
        })
        .collect::<Result<Vec<f64>>>()
        .map(TermVector::from)
}
