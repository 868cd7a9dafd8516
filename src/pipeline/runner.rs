//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline
//! stages. Calling [`Pipeline::run`] executes them in order (tokenize,
//! stopword filter, pattern filter, rank), threading each stage's artifact
//! into the next and notifying a [`PipelineObserver`] at every boundary.
//!
//! Execution is single-threaded and fully synchronous: each stage runs to
//! completion before the next begins, and every artifact is freshly
//! constructed, so no locking is needed anywhere.

use tracing::{debug, info_span};

use crate::config::ProfileConfig;
use crate::error::Result;
use crate::nlp::{PatternFilter, StopwordFilter, WordTokenizer};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_RANK, STAGE_TOKENIZE,
};
use crate::pipeline::traits::{FrequencyRanker, Ranker, TokenFilter, Tokenizer};
use crate::types::{Corpus, RankedEntry};

/// A pipeline composed of concrete stage implementations.
///
/// # Type parameters
///
/// | Param  | Trait         | Default impl        |
/// |--------|---------------|---------------------|
/// | `Tok`  | [`Tokenizer`]   | [`WordTokenizer`]   |
/// | `Stop` | [`TokenFilter`] | [`StopwordFilter`]  |
/// | `Pat`  | [`TokenFilter`] | [`PatternFilter`]   |
/// | `Rnk`  | [`Ranker`]      | [`FrequencyRanker`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Tok, Stop, Pat, Rnk> {
    pub tokenizer: Tok,
    pub stopword_filter: Stop,
    pub pattern_filter: Pat,
    pub ranker: Rnk,
}

/// Type alias for the default profiling pipeline.
pub type DefaultPipeline = Pipeline<WordTokenizer, StopwordFilter, PatternFilter, FrequencyRanker>;

impl DefaultPipeline {
    /// Build the default pipeline from a validated configuration.
    ///
    /// Loads the baseline lexicon for the configured language, the optional
    /// supplementary stopword list, and the optional pattern denylist. Any
    /// load failure aborts before a single stage executes.
    pub fn from_config(cfg: &ProfileConfig) -> Result<Self> {
        cfg.validate()?;

        let mut stopword_filter = StopwordFilter::for_language(&cfg.language)?;
        if let Some(path) = &cfg.stopword_file {
            stopword_filter.load_supplement(path)?;
        }

        let pattern_filter = match &cfg.pattern_file {
            Some(path) => PatternFilter::load(path)?,
            None => PatternFilter::empty(),
        };

        Ok(Pipeline {
            tokenizer: WordTokenizer::new(),
            stopword_filter,
            pattern_filter,
            ranker: FrequencyRanker,
        })
    }
}

impl<Tok, Stop, Pat, Rnk> Pipeline<Tok, Stop, Pat, Rnk>
where
    Tok: Tokenizer,
    Stop: TokenFilter,
    Pat: TokenFilter,
    Rnk: Ranker,
{
    /// Execute the pipeline over `corpus`, returning the top `top_k` ranked
    /// entries.
    ///
    /// Stages run in order:
    /// 1. Tokenize (flatten, lower-case)
    /// 2. Stopword filter
    /// 3. Pattern filter
    /// 4. Rank (count, sort, truncate)
    ///
    /// The `observer` receives callbacks at each stage boundary. The two
    /// filter stages report under their [`TokenFilter::name`]; tokenize and
    /// rank use the fixed [`STAGE_TOKENIZE`] and [`STAGE_RANK`] names.
    pub fn run(
        &self,
        corpus: &Corpus,
        top_k: usize,
        observer: &mut impl PipelineObserver,
    ) -> Vec<RankedEntry> {
        // Stage 1: Tokenize
        let span = info_span!("pipeline_stage", stage = STAGE_TOKENIZE).entered();
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let tokens = self.tokenizer.tokenize(corpus);
        let report = StageReport::with_counts(clock.elapsed(), corpus.len(), tokens.len());
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_tokens(STAGE_TOKENIZE, &tokens);
        drop(span);

        // Stage 2: Stopword filter
        let stage = self.stopword_filter.name();
        let span = info_span!("pipeline_stage", stage).entered();
        observer.on_stage_start(stage);
        let clock = StageClock::start();
        let before = tokens.len();
        let tokens = self.stopword_filter.filter(tokens);
        debug!(stage, before, after = tokens.len(), "filter applied");
        let report = StageReport::with_counts(clock.elapsed(), before, tokens.len());
        observer.on_stage_end(stage, &report);
        observer.on_tokens(stage, &tokens);
        drop(span);

        // Stage 3: Pattern filter
        let stage = self.pattern_filter.name();
        let span = info_span!("pipeline_stage", stage).entered();
        observer.on_stage_start(stage);
        let clock = StageClock::start();
        let before = tokens.len();
        let tokens = self.pattern_filter.filter(tokens);
        debug!(stage, before, after = tokens.len(), "filter applied");
        let report = StageReport::with_counts(clock.elapsed(), before, tokens.len());
        observer.on_stage_end(stage, &report);
        observer.on_tokens(stage, &tokens);
        drop(span);

        // Stage 4: Rank
        let span = info_span!("pipeline_stage", stage = STAGE_RANK).entered();
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let entries = self.ranker.rank(&tokens, top_k);
        let report = StageReport::with_counts(clock.elapsed(), tokens.len(), entries.len());
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_ranked(&entries);
        drop(span);

        entries
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from empty filters and the default tokenizer and ranker, then
/// allows overriding individual stages.
///
/// ```
/// use feedlex::nlp::StopwordFilter;
/// use feedlex::pipeline::PipelineBuilder;
///
/// let pipeline = PipelineBuilder::new()
///     .stopword_filter(StopwordFilter::from_list(&["the", "a"]))
///     .build();
/// # let _ = pipeline;
/// ```
pub struct PipelineBuilder<
    Tok = WordTokenizer,
    Stop = StopwordFilter,
    Pat = PatternFilter,
    Rnk = FrequencyRanker,
> {
    tokenizer: Tok,
    stopword_filter: Stop,
    pattern_filter: Pat,
    ranker: Rnk,
}

impl PipelineBuilder {
    /// Start building from default stages with empty filters.
    pub fn new() -> Self {
        PipelineBuilder {
            tokenizer: WordTokenizer::new(),
            stopword_filter: StopwordFilter::empty(),
            pattern_filter: PatternFilter::empty(),
            ranker: FrequencyRanker,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tok, Stop, Pat, Rnk> PipelineBuilder<Tok, Stop, Pat, Rnk> {
    /// Override the tokenizer stage.
    pub fn tokenizer<T: Tokenizer>(self, t: T) -> PipelineBuilder<T, Stop, Pat, Rnk> {
        PipelineBuilder {
            tokenizer: t,
            stopword_filter: self.stopword_filter,
            pattern_filter: self.pattern_filter,
            ranker: self.ranker,
        }
    }

    /// Override the stopword filter stage.
    pub fn stopword_filter<S: TokenFilter>(self, s: S) -> PipelineBuilder<Tok, S, Pat, Rnk> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            stopword_filter: s,
            pattern_filter: self.pattern_filter,
            ranker: self.ranker,
        }
    }

    /// Override the pattern filter stage.
    pub fn pattern_filter<P: TokenFilter>(self, p: P) -> PipelineBuilder<Tok, Stop, P, Rnk> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            stopword_filter: self.stopword_filter,
            pattern_filter: p,
            ranker: self.ranker,
        }
    }

    /// Override the ranker stage.
    pub fn ranker<R: Ranker>(self, r: R) -> PipelineBuilder<Tok, Stop, Pat, R> {
        PipelineBuilder {
            tokenizer: self.tokenizer,
            stopword_filter: self.stopword_filter,
            pattern_filter: self.pattern_filter,
            ranker: r,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Tok, Stop, Pat, Rnk> {
        Pipeline {
            tokenizer: self.tokenizer,
            stopword_filter: self.stopword_filter,
            pattern_filter: self.pattern_filter,
            ranker: self.ranker,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
