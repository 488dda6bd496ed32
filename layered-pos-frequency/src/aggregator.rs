//! Per-document POS statistics written back into metadata.

use layered_corpus::{ArtifactKind, ArticleId, CorpusIndex, CorpusStore, StatisticsKind};
use serde::{Deserialize, Serialize};

use crate::errors::FrequencyError;
use crate::histogram::{pos_histogram, CaseExtractor, CaseHistogramConfig, Histogram};
use crate::metadata::merge_pos_frequencies;
use crate::visualizer::Visualizer;

/// Configuration for [`FrequencyAggregator`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Also count noun cases when set.
    pub case_histogram: Option<CaseHistogramConfig>,
}

impl FrequencyConfig {
    /// POS histogram plus Mystem noun-case histogram.
    pub fn with_cases() -> Self {
        Self {
            case_histogram: Some(CaseHistogramConfig::default()),
        }
    }
}

/// Statistics computed for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStatistics {
    pub pos: Histogram,
    pub cases: Option<Histogram>,
}

/// Reads each document's single-tagged artifact, counts tags, merges the
/// counts into metadata and passes them to a [`Visualizer`].
pub struct FrequencyAggregator<'a> {
    store: &'a dyn CorpusStore,
    visualizer: &'a dyn Visualizer,
    cases: Option<CaseExtractor>,
}

impl<'a> FrequencyAggregator<'a> {
    pub fn new(
        store: &'a dyn CorpusStore,
        visualizer: &'a dyn Visualizer,
        config: &FrequencyConfig,
    ) -> Result<Self, FrequencyError> {
        let cases = config
            .case_histogram
            .as_ref()
            .map(CaseExtractor::new)
            .transpose()?;
        Ok(Self {
            store,
            visualizer,
            cases,
        })
    }

    /// Aggregate every document of `index` in id order.
    ///
    /// A missing, empty or non-text tagged artifact aborts the whole pass: it
    /// means annotation never finished for that document.
    pub fn run(&self, index: &CorpusIndex) -> Result<(), FrequencyError> {
        tracing::info!("aggregating POS frequencies for {} documents", index.len());
        for id in index.ids() {
            self.process_document(id)?;
        }
        Ok(())
    }

    pub fn process_document(&self, id: ArticleId) -> Result<DocumentStatistics, FrequencyError> {
        let bytes = self
            .store
            .read_artifact(id, ArtifactKind::SingleTagged)
            .map_err(|source| FrequencyError::ArtifactRead { id, source })?;
        let text = validate_annotation(id, &bytes)?;

        let stats = self.statistics(text);

        let metadata_err = |source| FrequencyError::Metadata { id, source };
        let mut metadata = self.store.read_metadata(id).map_err(metadata_err)?;
        merge_pos_frequencies(&mut metadata, &stats.pos);
        self.store
            .write_metadata(id, &metadata)
            .map_err(metadata_err)?;

        self.visualizer.render(
            &stats.pos,
            &self
                .store
                .statistics_destination(id, StatisticsKind::PosFrequencies),
        );
        if let Some(cases) = stats.cases.as_ref().filter(|cases| !cases.is_empty()) {
            self.visualizer.render(
                cases,
                &self
                    .store
                    .statistics_destination(id, StatisticsKind::CaseFrequencies),
            );
        }

        tracing::debug!("article {}: {} POS codes", id, stats.pos.len());
        Ok(stats)
    }

    /// Histograms for one document's tagged text.
    pub fn statistics(&self, text: &str) -> DocumentStatistics {
        DocumentStatistics {
            pos: pos_histogram(text),
            cases: self.cases.as_ref().map(|extractor| extractor.histogram(text)),
        }
    }
}

/// The tagged artifact must be non-empty UTF-8 text.
pub fn validate_annotation(id: ArticleId, bytes: &[u8]) -> Result<&str, FrequencyError> {
    if bytes.is_empty() {
        return Err(FrequencyError::EmptyAnnotationInput { id });
    }
    std::str::from_utf8(bytes)
        .map_err(|source| FrequencyError::IncorrectAnnotationFormat { id, source })
}
