//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! token counts, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::types::{RankedEntry, TokenStream};

/// Stage name constants used in reports and tracing spans.
///
/// The filter stages report under the installed filter's
/// [`TokenFilter::name`](crate::pipeline::traits::TokenFilter::name);
/// [`STAGE_STOPWORDS`] and [`STAGE_PATTERNS`] are what the default filters
/// report.
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_STOPWORDS: &str = "stopwords";
pub const STAGE_PATTERNS: &str = "patterns";
pub const STAGE_RANK: &str = "rank";

/// Wall-clock timer for one stage.
#[derive(Debug)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Metrics for one completed stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    elapsed: Duration,
    tokens_in: Option<usize>,
    tokens_out: Option<usize>,
}

impl StageReport {
    /// A report carrying only elapsed time.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            tokens_in: None,
            tokens_out: None,
        }
    }

    /// A report for a stage that consumed and produced token streams.
    pub fn with_counts(elapsed: Duration, tokens_in: usize, tokens_out: usize) -> Self {
        Self {
            elapsed,
            tokens_in: Some(tokens_in),
            tokens_out: Some(tokens_out),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn tokens_in(&self) -> Option<usize> {
        self.tokens_in
    }

    pub fn tokens_out(&self) -> Option<usize> {
        self.tokens_out
    }
}

/// Callbacks fired at stage boundaries.
///
/// All methods have empty default bodies, so implementors override only what
/// they need. Pass [`NoopObserver`] for zero-overhead execution.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called with the token stream after tokenization and after each
    /// filter stage.
    fn on_tokens(&mut self, _stage: &'static str, _tokens: &TokenStream) {}

    /// Called with the final ranked entries.
    fn on_ranked(&mut self, _entries: &[RankedEntry]) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per stage, in execution order.
#[derive(Debug, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected reports in stage execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
