#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! End-to-end corpus processing.
//!
//! [`run_corpus`] runs the stages in their fixed order, each one only if the
//! previous succeeded:
//!
//! 1. [`DatasetValidator`] - nothing is touched under an invalid layout
//! 2. [`CorpusIndex::scan`]
//! 3. [`AnnotationPipeline`] - writes the three artifacts per document
//! 4. [`FrequencyAggregator`] - writes `pos_frequencies` into metadata

mod config;

use std::path::Path;

use layered_annotation::{AnnotationError, AnnotationPipeline, MorphAnalyzer, SingleParseTagger};
use layered_corpus::{CorpusIndex, DatasetError, DatasetValidator, FsCorpusStore};
use layered_pos_frequency::{FrequencyAggregator, FrequencyError, Visualizer};
use thiserror::Error;

pub use config::{ConfigError, RunnerConfig};

/// Any failure of a corpus run, tagged by stage.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    #[error(transparent)]
    Frequency(#[from] FrequencyError),
}

/// What a completed run processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
}

/// External engines used by a run, constructed once by the caller.
pub struct Collaborators<'a> {
    pub analyzer: &'a dyn MorphAnalyzer,
    pub tagger: &'a dyn SingleParseTagger,
    pub visualizer: &'a dyn Visualizer,
}

/// Validate, index, annotate and aggregate the corpus in `dir`.
pub fn run_corpus(
    dir: &Path,
    config: &RunnerConfig,
    collaborators: &Collaborators<'_>,
) -> Result<RunSummary, CorpusError> {
    DatasetValidator::new(config.corpus.dataset.clone()).validate(dir)?;

    let index = CorpusIndex::scan(dir, &config.corpus.layout)?;
    let store = FsCorpusStore::new(dir, config.corpus.layout.clone());

    let aggregator = FrequencyAggregator::new(&store, collaborators.visualizer, &config.frequency)?;

    AnnotationPipeline::new(&store, collaborators.analyzer, collaborators.tagger).run(&index)?;
    aggregator.run(&index)?;

    tracing::info!("processed {} documents in {}", index.len(), dir.display());
    Ok(RunSummary {
        documents: index.len(),
    })
}
