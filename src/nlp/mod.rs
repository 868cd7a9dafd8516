//! Natural language processing components
//!
//! This module provides tokenization, stopword filtering, and regex
//! denylist filtering.

pub mod patterns;
pub mod stopwords;
pub mod tokenizer;

pub use patterns::PatternFilter;
pub use stopwords::StopwordFilter;
pub use tokenizer::WordTokenizer;
