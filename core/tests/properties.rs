//! Property tests for tokenization, indexing and ranking invariants.

use docsearch_core::tokenizer::tokenize;
use docsearch_core::{SearchIndex, StopWords};
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "mačka", "pas", "riba", "kuća", "šuma", "đak", "žaba", "čovjek", "i", "ali", "je", "more",
    ])
    .prop_map(str::to_string)
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..12).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document_strategy(), 1..6)
}

fn stop_words() -> StopWords {
    StopWords::from_words(["i", "ali", "je"])
}

fn build(corpus: &[String]) -> SearchIndex {
    let docs = corpus.iter().enumerate().map(|(i, text)| (format!("doc{i}.txt"), text.as_str()));
    SearchIndex::from_texts(docs, &stop_words()).unwrap()
}

proptest! {
    #[test]
    fn prop_tokenizing_joined_tokens_is_idempotent(text in "[a-zA-ZčćđšžČĆĐŠŽ0-9 ,.!?-]{0,64}") {
        let first: Vec<String> = tokenize(&text).iter().map(str::to_string).collect();
        let joined = first.join(" ");
        let second: Vec<String> = tokenize(&joined).iter().map(str::to_string).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_vocabulary_excludes_stop_words_and_empty_terms(corpus in corpus_strategy()) {
        let index = build(&corpus);
        let stop = stop_words();
        for term in index.vocabulary().iter() {
            prop_assert!(!term.is_empty());
            prop_assert!(!stop.contains(term));
        }
    }

    #[test]
    fn prop_all_vectors_match_vocabulary_size(corpus in corpus_strategy()) {
        let index = build(&corpus);
        let n = index.vocabulary().len();
        prop_assert_eq!(index.idf().len(), n);
        for doc in index.documents() {
            prop_assert_eq!(doc.vector.len(), n);
        }
    }

    #[test]
    fn prop_rarer_terms_have_higher_idf(corpus in corpus_strategy()) {
        let index = build(&corpus);
        let df: Vec<usize> = index
            .vocabulary()
            .iter()
            .map(|term| corpus.iter().filter(|text| tokenize(text).iter().any(|t| t == term)).count())
            .collect();
        let idf = index.idf().as_slice();
        for i in 0..df.len() {
            for j in 0..df.len() {
                if df[i] < df[j] {
                    prop_assert!(idf[i] >= idf[j]);
                }
            }
        }
    }

    #[test]
    fn prop_similarity_is_bounded(corpus in corpus_strategy(), query in document_strategy()) {
        let index = build(&corpus);
        for result in index.rank(&query).unwrap() {
            prop_assert!((-1.0..=1.0).contains(&result.similarity));
        }
    }

    #[test]
    fn prop_document_ranks_itself_at_the_top(corpus in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let index = build(&corpus);
        let doc = &index.documents()[pick.index(index.len())];
        let results = index.rank_vector(&doc.vector).unwrap();
        let best = results[0].similarity;
        let own = results.iter().find(|r| r.path == doc.path).unwrap().similarity;
        prop_assert!((best - own).abs() < 1e-9);
    }

    #[test]
    fn prop_unknown_query_scores_zero_in_corpus_order(corpus in corpus_strategy()) {
        let index = build(&corpus);
        let results = index.rank("nepoznato xyz").unwrap();
        prop_assert!(results.iter().all(|r| r.similarity == 0.0));
        let expected: Vec<_> = index.documents().iter().map(|d| d.path.clone()).collect();
        let actual: Vec<_> = results.into_iter().map(|r| r.path).collect();
        prop_assert_eq!(actual, expected);
    }
}
