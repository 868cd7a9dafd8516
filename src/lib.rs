//! feedlex — word-frequency profiling for harvested feed corpora.
//!
//! Builds a ranked word-frequency profile from a collection of text
//! documents: tokenize, remove stopwords (baseline lexicon + supplementary
//! list), drop regex-denylisted tokens, then rank the survivors by count.
//!
//! Feed acquisition and HTML scraping live behind the
//! [`CorpusSource`](corpus::CorpusSource) seam; the pipeline itself only
//! consumes a flat text corpus.
//!
//! # Quick start
//!
//! ```
//! use feedlex::{profile, Corpus, ProfileConfig};
//!
//! let mut corpus = Corpus::new();
//! corpus.push_entry("feed1", "The cat sat. The dog ran.");
//!
//! let cfg = ProfileConfig::default().with_top_k(10);
//! let ranking = profile(&corpus, &cfg).unwrap();
//! assert_eq!(ranking[0].token, "cat");
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod freq;
pub mod nlp;
pub mod pipeline;
pub mod types;

pub use config::ProfileConfig;
pub use error::{ProfileError, Result};
pub use types::{Corpus, RankedEntry, TokenStream};

use corpus::CorpusSource;
use pipeline::{DefaultPipeline, NoopObserver};

/// Run the default pipeline over an in-memory corpus.
///
/// Validates the configuration and loads all filter resources before any
/// stage executes; any of those failures aborts the whole run.
pub fn profile(corpus: &Corpus, cfg: &ProfileConfig) -> Result<Vec<RankedEntry>> {
    let pipeline = DefaultPipeline::from_config(cfg)?;
    Ok(pipeline.run(corpus, cfg.top_k(), &mut NoopObserver))
}

/// Load a corpus from `source` and run the default pipeline over it.
pub fn profile_source(source: &impl CorpusSource, cfg: &ProfileConfig) -> Result<Vec<RankedEntry>> {
    let pipeline = DefaultPipeline::from_config(cfg)?;
    let corpus = source.load()?;
    Ok(pipeline.run(&corpus, cfg.top_k(), &mut NoopObserver))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_profile_end_to_end() {
        let mut corpus = Corpus::new();
        corpus.push_entry("feed1", "The Rust compiler. The Rust borrow checker.");

        let ranking = profile(&corpus, &ProfileConfig::default()).unwrap();
        assert_eq!(ranking[0], RankedEntry::new("rust", 2));
        assert!(ranking.iter().any(|e| e.token == "compiler"));
        assert!(!ranking.iter().any(|e| e.token == "the"));
    }

    #[test]
    fn test_profile_validates_before_running() {
        let corpus = Corpus::new();
        let cfg = ProfileConfig::default().with_top_k(-3);
        assert!(matches!(
            profile(&corpus, &cfg),
            Err(ProfileError::InvalidTopK(-3))
        ));
    }

    #[test]
    fn test_profile_source_reads_dump() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "= Feed One\nThe cat sat. The cat slept.").unwrap();

        let source = corpus::TextDumpSource::new(file.path());
        let ranking = profile_source(&source, &ProfileConfig::default()).unwrap();
        assert_eq!(ranking[0], RankedEntry::new("cat", 2));
    }
}
