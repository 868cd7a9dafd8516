//! Corpus acquisition boundary
//!
//! The core pipeline consumes a flat text corpus and does not care how it
//! was produced. This module defines the seam to the harvesting
//! collaborator and a reader for the simple on-disk text dump format.

pub mod source;

pub use source::{CorpusSource, TextDumpSource};
