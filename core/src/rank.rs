use crate::error::Result;
use crate::index::{term_frequencies, SearchIndex};
use crate::tokenizer::tokenize;
use crate::vector::TermVector;
use std::cmp::Ordering;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub path: PathBuf,
    /// Cosine similarity in [-1, 1].
    pub similarity: f64,
}

/// A query after tokenization and TF-IDF weighting.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    /// Query tokens found in the vocabulary, in query order.
    pub terms: Vec<String>,
    pub vector: TermVector,
}

impl QueryVector {
    /// True when no query token was known, so every similarity is 0.
    pub fn is_degenerate(&self) -> bool {
        self.vector.is_zero()
    }
}

impl SearchIndex {
    pub fn vectorize_query(&self, text: &str) -> Result<QueryVector> {
        let tokens = tokenize(text);
        let terms = tokens
            .iter()
            .filter(|t| self.vocabulary().contains(t))
            .map(str::to_string)
            .collect();
        let vector = term_frequencies(&tokens, self.vocabulary()).hadamard(self.idf())?;
        Ok(QueryVector { terms, vector })
    }

    /// Rank every document against a free-text query.
    pub fn rank(&self, text: &str) -> Result<Vec<RankedResult>> {
        let query = self.vectorize_query(text)?;
        self.rank_vector(&query.vector)
    }

    /// Rank every document against an already weighted query vector.
    ///
    /// Sorted by descending similarity; equal scores keep corpus order.
    pub fn rank_vector(&self, query: &TermVector) -> Result<Vec<RankedResult>> {
        let mut results = self
            .documents()
            .iter()
            .map(|doc| {
                Ok(RankedResult { path: doc.path.clone(), similarity: query.cosine(&doc.vector)? })
            })
            .collect::<Result<Vec<_>>>()?;
        results.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(Ordering::Equal));
        Ok(results)
    }
}

/// How much of a ranked list to show. Ranking itself never truncates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayPolicy {
    pub limit: usize,
    /// Listing stops at the first result scoring below this.
    pub min_similarity: f64,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self { limit: 10, min_similarity: 1e-6 }
    }
}

impl DisplayPolicy {
    /// Visible results paired with their position in the full list.
    pub fn select<'a>(&self, results: &'a [RankedResult]) -> impl Iterator<Item = (usize, &'a RankedResult)> + 'a {
        let min = self.min_similarity;
        results
            .iter()
            .enumerate()
            .take(self.limit)
            .take_while(move |(_, r)| r.similarity >= min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::StopWords;

    fn index(docs: &[(&str, &str)]) -> SearchIndex {
        SearchIndex::from_texts(docs.iter().copied(), &StopWords::empty()).unwrap()
    }

    #[test]
    fn query_ranks_matching_document_first() {
        let index = index(&[("doc1", "CAT CAT DOG"), ("doc2", "DOG FISH FISH")]);
        let results = index.rank("cat").unwrap();
        assert_eq!(results[0].path, PathBuf::from("doc1"));
        assert!((results[0].similarity - 1.0).abs() < 1e-12);
        assert_eq!(results[1].path, PathBuf::from("doc2"));
        assert_eq!(results[1].similarity, 0.0);
    }

    #[test]
    fn unknown_words_give_zero_similarity_in_corpus_order() {
        let index = index(&[("doc1", "CAT DOG"), ("doc2", "DOG FISH")]);
        let query = index.vectorize_query("bird").unwrap();
        assert!(query.terms.is_empty());
        assert!(query.is_degenerate());

        let results = index.rank("bird").unwrap();
        let paths: Vec<_> = results.iter().map(|r| r.path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("doc1"), PathBuf::from("doc2")]);
        assert!(results.iter().all(|r| r.similarity == 0.0));
    }

    #[test]
    fn query_terms_keep_only_known_tokens() {
        let index = index(&[("doc1", "CAT DOG"), ("doc2", "DOG FISH")]);
        let query = index.vectorize_query("Cat, bird; fish cat").unwrap();
        assert_eq!(query.terms, vec!["CAT", "FISH", "CAT"]);
    }

    #[test]
    fn ties_keep_corpus_order() {
        let index = index(&[("b", "APPLE PEAR"), ("a", "APPLE PEAR"), ("c", "PLUM"), ("d", "PLUM")]);
        let results = index.rank("pear").unwrap();
        let paths: Vec<_> = results.iter().map(|r| r.path.to_string_lossy().into_owned()).collect();
        assert_eq!(paths, vec!["b", "a", "c", "d"]);
        assert!(results[0].similarity > 0.0);
        assert_eq!(results[0].similarity, results[1].similarity);
    }

    #[test]
    fn mismatched_query_vector_is_rejected() {
        let index = index(&[("doc1", "CAT DOG")]);
        assert!(index.rank_vector(&TermVector::zeros(5)).is_err());
    }

    #[test]
    fn display_policy_limits_and_stops_below_threshold() {
        let results: Vec<RankedResult> = [0.9, 0.5, 0.0, 0.4]
            .iter()
            .enumerate()
            .map(|(i, &s)| RankedResult { path: PathBuf::from(format!("d{i}")), similarity: s })
            .collect();
        let shown: Vec<usize> = DisplayPolicy::default().select(&results).map(|(i, _)| i).collect();
        assert_eq!(shown, vec![0, 1]);

        let policy = DisplayPolicy { limit: 1, min_similarity: 0.0 };
        assert_eq!(policy.select(&results).count(), 1);
    }
}
