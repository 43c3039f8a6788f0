pub mod corpus;
pub mod error;
pub mod index;
pub mod rank;
pub mod session;
pub mod stopwords;
pub mod tokenizer;
pub mod vector;
pub mod vocabulary;

pub use corpus::{discover_documents, read_document_text};
pub use error::{Error, Result};
pub use index::{build_index, IndexConfig, IndexOptions, IndexedDocument, SearchIndex};
pub use rank::{DisplayPolicy, QueryVector, RankedResult};
pub use session::Session;
pub use stopwords::StopWords;
pub use vector::TermVector;
pub use vocabulary::{Vocabulary, VocabularyBuilder};
