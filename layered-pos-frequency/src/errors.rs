//! Error types for frequency aggregation.

use std::io;
use std::str::Utf8Error;

use layered_corpus::{ArticleId, StoreError};
use thiserror::Error;

/// Errors that abort an aggregation pass.
#[derive(Debug, Error)]
pub enum FrequencyError {
    /// The single-tagged artifact exists but is empty.
    #[error("article {id}: tagged text is empty")]
    EmptyAnnotationInput { id: ArticleId },

    /// The single-tagged artifact is not UTF-8 text.
    #[error("article {id}: tagged artifact is not text: {source}")]
    IncorrectAnnotationFormat {
        id: ArticleId,
        #[source]
        source: Utf8Error,
    },

    /// The single-tagged artifact could not be read at all.
    #[error("article {id}: failed to read tagged artifact: {source}")]
    ArtifactRead {
        id: ArticleId,
        #[source]
        source: io::Error,
    },

    #[error("article {id}: {source}")]
    Metadata {
        id: ArticleId,
        #[source]
        source: StoreError,
    },

    #[error("invalid case pattern: {0}")]
    CasePattern(#[from] regex::Error),
}
