//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; every stage consumes the full output of the
//! previous one and produces a fresh artifact, so stages share no mutable
//! state.

use crate::freq::FrequencyTable;
use crate::nlp::{PatternFilter, StopwordFilter, WordTokenizer};
use crate::types::{Corpus, RankedEntry, TokenStream};

/// Turns the raw corpus into a flat, lower-cased token stream.
///
/// # Contract
///
/// - Output order is document order, then sentence order, then in-sentence
///   order.
/// - Empty corpus entries contribute no tokens.
/// - Deterministic: the same corpus always yields the same stream.
pub trait Tokenizer {
    fn tokenize(&self, corpus: &Corpus) -> TokenStream;
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, corpus: &Corpus) -> TokenStream {
        self.tokenize_corpus(corpus)
    }
}

/// Removes noise tokens from a stream.
///
/// # Contract
///
/// - Output is a subsequence of the input: survivor order is preserved and
///   nothing is added, so `output.len() <= input.len()`.
/// - Idempotent: filtering already-filtered output changes nothing.
pub trait TokenFilter {
    /// Short stable name for stage reports and logging.
    fn name(&self) -> &'static str;

    /// Apply the filter, consuming the input stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;
}

impl TokenFilter for StopwordFilter {
    fn name(&self) -> &'static str {
        "stopwords"
    }

    fn filter(&self, tokens: TokenStream) -> TokenStream {
        StopwordFilter::filter(self, tokens)
    }
}

impl TokenFilter for PatternFilter {
    fn name(&self) -> &'static str {
        "patterns"
    }

    fn filter(&self, tokens: TokenStream) -> TokenStream {
        PatternFilter::filter(self, tokens)
    }
}

/// Produces the ranked frequency view of the surviving tokens.
pub trait Ranker {
    /// Return at most `top_k` entries sorted by count descending, ties
    /// broken by first occurrence in `tokens`.
    fn rank(&self, tokens: &TokenStream, top_k: usize) -> Vec<RankedEntry>;
}

/// Default ranker backed by [`FrequencyTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRanker;

impl Ranker for FrequencyRanker {
    fn rank(&self, tokens: &TokenStream, top_k: usize) -> Vec<RankedEntry> {
        FrequencyTable::from_tokens(tokens).top_k(top_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(tokens: &[&str]) -> TokenStream {
        TokenStream::from_tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_filters_report_stable_names() {
        assert_eq!(TokenFilter::name(&StopwordFilter::empty()), "stopwords");
        assert_eq!(TokenFilter::name(&PatternFilter::empty()), "patterns");
    }

    #[test]
    fn test_filter_output_is_subset_of_input() {
        let input = stream(&["the", "cat", "42", "dog"]);
        let stopwords = StopwordFilter::from_list(&["the"]);
        let out = TokenFilter::filter(&stopwords, input.clone());

        assert!(out.len() <= input.len());
        let mut remaining = input.iter();
        for survivor in out.iter() {
            assert!(
                remaining.any(|t| t == survivor),
                "{survivor:?} out of order or not in input"
            );
        }
    }

    #[test]
    fn test_frequency_ranker_bounds_output() {
        let tokens = stream(&["a", "b", "a", "c"]);
        let ranker = FrequencyRanker;
        assert_eq!(ranker.rank(&tokens, 2).len(), 2);
        assert_eq!(ranker.rank(&tokens, 0).len(), 0);
        assert_eq!(ranker.rank(&tokens, 99).len(), 3);
    }

    #[test]
    fn test_word_tokenizer_implements_stage_trait() {
        let mut corpus = Corpus::new();
        corpus.push_entry("feed", "One two.");
        let stream = Tokenizer::tokenize(&WordTokenizer::new(), &corpus);
        assert_eq!(stream.tokens(), &["one", "two"]);
    }
}
