//! Run configuration.
//!
//! A [`ProfileConfig`] describes the single tunable of the core pipeline
//! (the top-K limit) plus the external resources the filter stages load.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "top_k": 100,
//!   "language": "en",
//!   "stopword_file": "config/stopwords.txt",
//!   "pattern_file": "config/regex_patterns.txt"
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

fn default_top_k() -> i64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

/// Configuration for a profiling run.
///
/// `top_k` is kept signed in the serialized form so that a negative value in
/// a config document is rejected by [`validate`](Self::validate) instead of
/// failing to deserialize with an opaque message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Number of top-ranked entries to return.
    #[serde(default = "default_top_k")]
    pub top_k: i64,

    /// Language of the baseline stopword lexicon (e.g. `"en"`).
    #[serde(default = "default_language")]
    pub language: String,

    /// Optional supplementary stopword list, one lower-case word per line.
    /// A missing file is treated as an empty list.
    #[serde(default)]
    pub stopword_file: Option<PathBuf>,

    /// Optional regex denylist, one pattern per line. A missing file means
    /// no pattern filtering; a malformed pattern is a fatal load error.
    #[serde(default)]
    pub pattern_file: Option<PathBuf>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            language: default_language(),
            stopword_file: None,
            pattern_file: None,
        }
    }
}

impl ProfileConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| ProfileError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the configuration before any stage executes.
    pub fn validate(&self) -> Result<()> {
        if self.top_k < 0 {
            return Err(ProfileError::InvalidTopK(self.top_k));
        }
        Ok(())
    }

    /// The validated top-K limit as a usize.
    ///
    /// Callers run [`validate`](Self::validate) first; a negative value here
    /// clamps to zero rather than panicking.
    pub fn top_k(&self) -> usize {
        usize::try_from(self.top_k).unwrap_or(0)
    }

    /// Set the top-K limit.
    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the baseline lexicon language.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = ProfileConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.top_k(), 10);
        assert_eq!(cfg.language, "en");
    }

    #[test]
    fn test_parse_minimal_json() {
        let cfg = ProfileConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg.top_k, 10);
        assert!(cfg.stopword_file.is_none());
        assert!(cfg.pattern_file.is_none());
    }

    #[test]
    fn test_parse_full_json() {
        let cfg = ProfileConfig::from_json_str(
            r#"{
                "top_k": 100,
                "language": "de",
                "stopword_file": "config/stopwords.txt",
                "pattern_file": "config/regex_patterns.txt"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.top_k(), 100);
        assert_eq!(cfg.language, "de");
        assert_eq!(
            cfg.stopword_file.as_deref(),
            Some(std::path::Path::new("config/stopwords.txt"))
        );
    }

    #[test]
    fn test_negative_top_k_rejected() {
        let err = ProfileConfig::from_json_str(r#"{ "top_k": -1 }"#).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidTopK(-1)));

        let cfg = ProfileConfig::default().with_top_k(-7);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = ProfileConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ProfileError::Config(_)));
    }
}
