//! Corpus sources
//!
//! A [`CorpusSource`] delivers the harvested text; the pipeline never
//! performs network or HTML work itself. [`TextDumpSource`] reads the dump
//! format the harvester writes: a `= <name>` header line opens a source,
//! every following non-empty line is one text entry for that source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ProfileError, Result};
use crate::types::Corpus;

/// Marker that opens a new source section in a text dump.
const SOURCE_HEADER: &str = "= ";

/// Fallback source name for entries appearing before any header.
const DEFAULT_SOURCE: &str = "corpus";

/// Supplies the corpus to the pipeline.
pub trait CorpusSource {
    /// Load the full corpus. Called once at pipeline start.
    fn load(&self) -> Result<Corpus>;
}

/// In-memory corpora pass straight through, for harvesters that hand over
/// text directly.
impl CorpusSource for Corpus {
    fn load(&self) -> Result<Corpus> {
        Ok(self.clone())
    }
}

/// Reads a corpus from the harvester's text dump.
#[derive(Debug, Clone)]
pub struct TextDumpSource {
    path: PathBuf,
}

impl TextDumpSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The dump location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for TextDumpSource {
    /// Read the dump line by line.
    ///
    /// A missing or unreadable file is fatal. A line that is not valid
    /// UTF-8 is skipped with a warning; one bad entry never aborts the run.
    fn load(&self) -> Result<Corpus> {
        let file = File::open(&self.path).map_err(|e| ProfileError::io(&self.path, e))?;
        let mut reader = BufReader::new(file);

        let mut corpus = Corpus::new();
        let mut current = DEFAULT_SOURCE.to_string();
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        let mut skipped = 0usize;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| ProfileError::io(&self.path, e))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(s) => s.trim_end_matches(['\n', '\r']),
                Err(_) => {
                    warn!(
                        path = %self.path.display(),
                        line = line_no,
                        "skipping corpus line with invalid UTF-8"
                    );
                    skipped += 1;
                    continue;
                }
            };

            if let Some(name) = line.strip_prefix(SOURCE_HEADER) {
                current = name.trim().to_string();
                corpus.push_source(&current);
            } else if !line.trim().is_empty() {
                corpus.push_entry(&current, line);
            }
        }

        debug!(
            path = %self.path.display(),
            sources = corpus.sources().len(),
            entries = corpus.len(),
            skipped,
            "loaded corpus dump"
        );
        Ok(corpus)
    }
}
