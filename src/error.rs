//! Error types for corpus loading, configuration, and filter setup.
//!
//! Per-item failures (one bad text line in a dump) are absorbed where they
//! occur and logged; only resource-level failures surface through
//! [`ProfileError`] and terminate the run.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProfileError>;

/// A fatal condition that aborts the whole profiling run.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// A required resource could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A denylist entry failed to compile. Surfaced at load time, never
    /// deferred per-token.
    #[error("invalid denylist pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// No baseline stopword lexicon exists for the requested language.
    #[error("no baseline stopword lexicon for language {0:?}")]
    UnsupportedLanguage(String),

    /// The configured top-K limit is negative.
    #[error("top_k must be non-negative, got {0}")]
    InvalidTopK(i64),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_resource() {
        let err = ProfileError::io(
            "config/patterns.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("config/patterns.txt"), "{msg}");

        let err = ProfileError::UnsupportedLanguage("tlh".into());
        assert!(err.to_string().contains("tlh"));

        let err = ProfileError::InvalidTopK(-5);
        assert!(err.to_string().contains("-5"));
    }
}
