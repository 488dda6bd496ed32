#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Dataset validation and indexing for morphologically annotated corpora.
//!
//! A corpus is a flat directory of files named `<N>_<suffix>.<ext>`, where
//! `N` is a 1-based article id. Each article has at least a raw text file and
//! a JSON metadata record; annotation adds three derived text artifacts.
//!
//! ## Core Types
//!
//! - [`DatasetValidator`] - Integrity gate run before anything else
//! - [`CorpusIndex`] - Immutable id → [`Document`] mapping
//! - [`CorpusStore`] / [`FsCorpusStore`] - Artifact and metadata persistence
//! - [`CorpusConfig`] - Dataset policy and file naming layout
//!
//! ## Example
//!
//! ```no_run
//! use layered_corpus::{CorpusConfig, CorpusIndex, DatasetValidator};
//! use std::path::Path;
//!
//! let config = CorpusConfig::default();
//! let dir = Path::new("assets");
//! DatasetValidator::new(config.dataset.clone()).validate(dir)?;
//! let index = CorpusIndex::scan(dir, &config.layout)?;
//! for doc in index.list() {
//!     println!("{}: {}", doc.id(), doc.raw_path().display());
//! }
//! # Ok::<(), layered_corpus::DatasetError>(())
//! ```

mod config;
mod dataset;
mod document;
mod errors;
mod index;
mod store;

/// 1-based identifier shared by all files of one article.
pub type ArticleId = u32;

pub use config::{CompanionRule, CorpusConfig, DatasetPolicy, FileName, Layout};
pub use dataset::{
    check_companions, check_contiguity, classify_directory, classify_file, parse_article_prefix,
    tally, DatasetValidator, FileClass, FileRecord, ValidationReport,
};
pub use document::{ArtifactKind, ArtifactSet, Document, Metadata, StatisticsKind};
pub use errors::{DatasetError, DatasetResult, Inconsistency, StoreError};
pub use index::CorpusIndex;
pub use store::{CorpusStore, FsCorpusStore};
