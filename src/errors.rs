//! Error types for dataset validation, indexing and storage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::CompanionRule;
use crate::ArticleId;

/// Errors raised while validating or scanning a dataset directory.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset path does not exist.
    #[error("dataset path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// The dataset path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The dataset directory has no entries.
    #[error("dataset directory is empty: {}", .0.display())]
    EmptyDirectory(PathBuf),

    /// A file carries an extension outside the allowed set.
    #[error("unsupported file format {extension:?}: {file}")]
    UnsupportedFileFormat { file: String, extension: String },

    /// The directory layout breaks a cross-file invariant.
    #[error("inconsistent dataset: {0}")]
    InconsistentDataset(Inconsistency),

    /// Reading the directory itself failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Sub-reasons for [`DatasetError::InconsistentDataset`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Inconsistency {
    /// The file name has no `<N>_` integer prefix.
    #[error("bad name pattern: {file}")]
    BadNamePattern { file: String },

    /// The file has zero length.
    #[error("empty file: {file}")]
    EmptyFile { file: String },

    /// The entry is not a regular file.
    #[error("unexpected entry: {file}")]
    UnexpectedEntry { file: String },

    /// An article has fewer (or more) companion files than the rule allows.
    #[error("article {id} has {found} files, expected {required}")]
    MissingCompanions {
        id: ArticleId,
        found: usize,
        required: CompanionRule,
    },

    /// Article numbering is not the contiguous range `1..=max`.
    #[error("numbering gap, article {first_missing} missing ({missing} missing in total)")]
    NumberingGap {
        first_missing: ArticleId,
        missing: u64,
    },
}

/// Errors raised by a [`crate::CorpusStore`] when reading or writing metadata.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid metadata in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The metadata file holds valid JSON that is not an object.
    #[error("metadata in {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;
