//! Dual-analyzer annotation of every indexed document.

use layered_corpus::{ArtifactSet, CorpusIndex, CorpusStore, Document};

use crate::analyzer::{AnalyzerError, MorphAnalyzer, SingleParseTagger};
use crate::errors::AnnotationError;
use crate::repair::repair_text;
use crate::token::{admit, MorphologicalToken};

/// Turns each document's raw text into cleaned, single-tagged and
/// multiple-tagged artifacts.
///
/// Analyzer handles are built once by the caller and borrowed for the run,
/// which also lets tests substitute deterministic doubles.
pub struct AnnotationPipeline<'a> {
    store: &'a dyn CorpusStore,
    analyzer: &'a dyn MorphAnalyzer,
    tagger: &'a dyn SingleParseTagger,
}

impl<'a> AnnotationPipeline<'a> {
    pub fn new(
        store: &'a dyn CorpusStore,
        analyzer: &'a dyn MorphAnalyzer,
        tagger: &'a dyn SingleParseTagger,
    ) -> Self {
        Self {
            store,
            analyzer,
            tagger,
        }
    }

    /// Annotate every document of `index` in id order.
    ///
    /// Stops at the first failing document. Its artifacts are left untouched;
    /// documents before it keep their freshly written artifacts.
    pub fn run(&self, index: &CorpusIndex) -> Result<(), AnnotationError> {
        tracing::info!("annotating {} documents", index.len());
        for doc in index.list() {
            self.process_document(doc)?;
        }
        Ok(())
    }

    /// Annotate and persist a single document.
    pub fn process_document(&self, doc: &Document) -> Result<(), AnnotationError> {
        let id = doc.id();
        let raw = doc
            .raw_text()
            .map_err(|source| AnnotationError::RawText { id, source })?;

        let tokens = self
            .tokenize(&raw)
            .map_err(|source| AnnotationError::Analyzer { id, source })?;
        let artifacts = render_artifacts(&tokens);

        self.store
            .write_artifacts(id, &artifacts)
            .map_err(|source| AnnotationError::Store { id, source })?;

        tracing::debug!("article {}: wrote {} annotated tokens", id, tokens.len());
        Ok(())
    }

    /// Repair, analyze, filter and tag `raw`, keeping text order.
    pub fn tokenize(&self, raw: &str) -> Result<Vec<MorphologicalToken>, AnalyzerError> {
        let text = repair_text(raw);
        let surfaces = self.analyzer.analyze(&text)?;
        let total = surfaces.len();

        let tokens = surfaces
            .into_iter()
            .filter_map(admit)
            .map(|admitted| {
                let secondary = self.tagger.tag(&admitted.surface)?;
                Ok(MorphologicalToken::new(
                    &admitted.surface,
                    &admitted.lemma,
                    &admitted.primary_tag,
                    &secondary,
                ))
            })
            .collect::<Result<Vec<_>, AnalyzerError>>()?;

        tracing::trace!("admitted {} of {} surface tokens", tokens.len(), total);
        Ok(tokens)
    }
}

/// Join the three renderings of `tokens` with single spaces.
pub fn render_artifacts(tokens: &[MorphologicalToken]) -> ArtifactSet {
    ArtifactSet {
        cleaned: join_rendered(tokens, |t| t.cleaned().to_string()),
        single_tagged: join_rendered(tokens, MorphologicalToken::single_tagged),
        multiple_tagged: join_rendered(tokens, MorphologicalToken::multiple_tagged),
    }
}

fn join_rendered(
    tokens: &[MorphologicalToken],
    render: impl Fn(&MorphologicalToken) -> String,
) -> String {
    tokens.iter().map(render).collect::<Vec<_>>().join(" ")
}
