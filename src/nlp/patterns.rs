//! Regex denylist filtering
//!
//! Removes tokens matching any of an ordered list of regular expressions.
//!
//! Matching is deliberately unanchored: a token is dropped when a pattern
//! matches *anywhere* within it, not only when the whole token matches.
//! Denylist authors who want whole-token classification anchor their
//! patterns with `^...$`.

use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{ProfileError, Result};
use crate::types::TokenStream;

/// A filter that removes tokens matching any denylist pattern.
///
/// Patterns are compiled once at load time; a malformed pattern is a fatal
/// configuration error and is never deferred to per-token evaluation.
/// List order is preserved and patterns are evaluated in order with a
/// short-circuit on the first match.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    patterns: Vec<Regex>,
}

impl PatternFilter {
    /// Create a filter with no patterns (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile an ordered list of pattern strings.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            let regex = Regex::new(pattern).map_err(|e| ProfileError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            })?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }

    /// Load a denylist from a file, one pattern per line.
    ///
    /// A missing file behaves as an empty denylist; a pattern that fails to
    /// compile aborts the load.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "pattern denylist missing, skipping");
                return Ok(Self::empty());
            }
            Err(e) => return Err(ProfileError::io(path, e)),
        };

        let filter = Self::from_patterns(contents.lines())?;
        debug!(
            path = %path.display(),
            patterns = filter.len(),
            "loaded pattern denylist"
        );
        Ok(filter)
    }

    /// Check whether any pattern matches within `token`.
    pub fn matches(&self, token: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(token))
    }

    /// Remove matching tokens from the stream, preserving the order of
    /// survivors.
    pub fn filter(&self, tokens: TokenStream) -> TokenStream {
        if self.patterns.is_empty() {
            return tokens;
        }
        tokens
            .into_tokens()
            .into_iter()
            .filter(|t| !self.matches(t))
            .collect()
    }

    /// The pattern strings in list order, for diagnostics.
    pub fn pattern_strings(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.as_str()).collect()
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the denylist holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn stream(tokens: &[&str]) -> TokenStream {
        TokenStream::from_tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_anchored_pattern_removes_only_full_matches() {
        let filter = PatternFilter::from_patterns(["^[0-9]+$"]).unwrap();
        let out = filter.filter(stream(&["a1", "123", "b2"]));
        assert_eq!(out.tokens(), &["a1", "b2"]);
    }

    #[test]
    fn test_unanchored_pattern_matches_within_token() {
        // Search semantics: "\d" hits any token containing a digit.
        let filter = PatternFilter::from_patterns([r"\d"]).unwrap();
        let out = filter.filter(stream(&["a1", "123", "word"]));
        assert_eq!(out.tokens(), &["word"]);
    }

    #[test]
    fn test_malformed_pattern_is_fatal_at_load() {
        let err = PatternFilter::from_patterns(["[unclosed"]).unwrap_err();
        match err {
            ProfileError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let filter = PatternFilter::from_patterns(["", "  ", "^x$"]).unwrap();
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_list_order_is_preserved() {
        let filter = PatternFilter::from_patterns(["^a", "b$", "c"]).unwrap();
        assert_eq!(filter.pattern_strings(), vec!["^a", "b$", "c"]);
    }

    #[test]
    fn test_empty_denylist_passes_everything() {
        let filter = PatternFilter::empty();
        let out = filter.filter(stream(&["123", "abc"]));
        assert_eq!(out.tokens(), &["123", "abc"]);
    }

    #[test]
    fn test_missing_file_means_no_filtering() {
        let filter = PatternFilter::load(Path::new("/nonexistent/patterns.txt")).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "^[0-9]+$\n\nhttps?").unwrap();

        let filter = PatternFilter::load(file.path()).unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.matches("42"));
        assert!(filter.matches("http://example.com"));
        assert!(!filter.matches("word"));
    }
}
