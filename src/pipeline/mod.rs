//! Pipeline orchestration
//!
//! Composes the tokenizer, the two filter stages, and the frequency ranker
//! into a single batch run. Stages are statically dispatched; an observer
//! hook receives timing and size reports at each stage boundary.

pub mod observer;
pub mod runner;
pub mod traits;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{DefaultPipeline, Pipeline, PipelineBuilder};
pub use traits::{FrequencyRanker, Ranker, TokenFilter, Tokenizer};
