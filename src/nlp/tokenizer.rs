//! Word tokenization
//!
//! Splits raw text into a flat, lower-cased token stream using Unicode
//! sentence and word boundary rules from the `unicode-segmentation` crate.

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Corpus, TokenStream};

/// Sentence-aware word tokenizer.
///
/// Each text block is split into sentences, each sentence into word tokens
/// (punctuation and whitespace are never tokens), and every token is
/// lower-cased before emission. Emission order is document order, then
/// sentence order, then in-sentence order.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a single text block.
    pub fn tokenize_block(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .flat_map(|sentence| sentence.unicode_words())
            .map(|word| word.to_lowercase())
            .collect()
    }

    /// Tokenize every entry of the corpus into one flat stream.
    pub fn tokenize_corpus(&self, corpus: &Corpus) -> TokenStream {
        let mut tokens = Vec::new();
        for entry in corpus.entries() {
            tokens.extend(self.tokenize_block(entry));
        }
        debug!(entries = corpus.len(), tokens = tokens.len(), "tokenized corpus");
        TokenStream::from_tokens(tokens)
    }
}
