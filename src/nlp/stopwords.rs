//! Stopword filtering
//!
//! Removes noise words using the baseline lexicon from the `stop-words`
//! crate, optionally supplemented by a custom list loaded from a file.

use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use tracing::{debug, warn};

use crate::error::{ProfileError, Result};
use crate::types::TokenStream;

/// A filter that removes stopwords from a token stream.
///
/// The stopword set is the union of a fixed baseline lexicon for one
/// language and any supplementary words added afterwards. Membership checks
/// assume tokens are already lower-cased; supplementary entries are
/// lower-cased on load.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a filter backed by the baseline lexicon for `language`.
    ///
    /// Returns [`ProfileError::UnsupportedLanguage`] when no lexicon exists
    /// for the requested language; the run must not proceed with a silently
    /// empty baseline.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            other => return Err(ProfileError::UnsupportedLanguage(other.to_string())),
        };

        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Ok(Self { stopwords })
    }

    /// Create an empty filter (no baseline lexicon, no filtering).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from an explicit word list, lower-casing each entry.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Union a supplementary list into the filter, lower-casing each entry.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.stopwords.insert(word.to_lowercase());
            }
        }
    }

    /// Load a supplementary list from a file, one word per line.
    ///
    /// A missing or unreadable file behaves as an empty list: the run
    /// proceeds with a logged note instead of aborting. Only the baseline
    /// lexicon is required.
    pub fn load_supplement(&mut self, path: &Path) -> Result<()> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "supplementary stopword list unreadable, treating as empty"
                );
                return Ok(());
            }
        };

        let before = self.stopwords.len();
        self.add_words(contents.lines());
        debug!(
            path = %path.display(),
            added = self.stopwords.len() - before,
            "loaded supplementary stopwords"
        );
        Ok(())
    }

    /// Check if a word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Remove stopwords from the stream, preserving the order of survivors.
    pub fn filter(&self, tokens: TokenStream) -> TokenStream {
        tokens
            .into_tokens()
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Returns `true` if the filter holds no stopwords.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
