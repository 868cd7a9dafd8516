//! Core data types shared across pipeline stages.

use serde::{Deserialize, Serialize};

/// One named source and its harvested text entries, in harvest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocs {
    /// Source name (feed title, site name, ...). Unique within a corpus.
    pub name: String,
    /// Raw text entries, one per harvested item.
    pub entries: Vec<String>,
}

/// The full collection of harvested text, grouped by source.
///
/// Sources and entries keep their insertion order. The backing store is a
/// `Vec` rather than a hash map so that iteration order is deterministic,
/// which downstream tie-breaking depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sources: Vec<SourceDocs>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to the source named `name`, creating the source if it
    /// does not exist yet.
    pub fn push_entry(&mut self, name: &str, entry: impl Into<String>) {
        match self.sources.iter_mut().find(|s| s.name == name) {
            Some(source) => source.entries.push(entry.into()),
            None => self.sources.push(SourceDocs {
                name: name.to_string(),
                entries: vec![entry.into()],
            }),
        }
    }

    /// Register a source with no entries yet.
    pub fn push_source(&mut self, name: &str) {
        if !self.sources.iter().any(|s| s.name == name) {
            self.sources.push(SourceDocs {
                name: name.to_string(),
                entries: Vec::new(),
            });
        }
    }

    /// All sources in insertion order.
    pub fn sources(&self) -> &[SourceDocs] {
        &self.sources
    }

    /// Iterate over every text entry in document order, flattened across
    /// sources.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.sources
            .iter()
            .flat_map(|s| s.entries.iter().map(String::as_str))
    }

    /// Total number of text entries across all sources.
    pub fn len(&self) -> usize {
        self.sources.iter().map(|s| s.entries.len()).sum()
    }

    /// Returns `true` if the corpus contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered sequence of lower-cased word tokens produced by the tokenizer and
/// consumed by the filter stages.
///
/// Token order is document order, then sentence order, then in-sentence
/// order. Frequency counting is order-independent, but the order must stay
/// deterministic because ranking ties break on first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
}

impl TokenStream {
    /// Build a stream from already-normalized tokens.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// The tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Consume the stream, yielding the token vector.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stream holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl FromIterator<String> for TokenStream {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// One row of the ranked frequency view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// The token.
    pub token: String,
    /// Number of occurrences in the filtered stream.
    pub count: usize,
}

impl RankedEntry {
    pub fn new(token: impl Into<String>, count: usize) -> Self {
        Self {
            token: token.into(),
            count,
        }
    }
}
