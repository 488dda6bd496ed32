//! Error types for the annotation pipeline.

use std::io;

use layered_corpus::ArticleId;
use thiserror::Error;

use crate::analyzer::AnalyzerError;

/// Errors that stop an annotation run.
///
/// Each carries the article being processed; artifacts of earlier articles
/// are already persisted and those of the failing article are not.
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("article {id}: failed to read raw text: {source}")]
    RawText {
        id: ArticleId,
        #[source]
        source: io::Error,
    },

    #[error("article {id}: analyzer failed: {source}")]
    Analyzer {
        id: ArticleId,
        #[source]
        source: AnalyzerError,
    },

    #[error("article {id}: failed to write artifacts: {source}")]
    Store {
        id: ArticleId,
        #[source]
        source: io::Error,
    },
}
