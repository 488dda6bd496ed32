//! Dataset integrity checks.
//!
//! Validation runs in three separate passes:
//!
//! 1. [`classify_directory`] stats every entry and records a [`FileClass`]
//!    per file into a [`ValidationReport`]. Nothing fails mid-scan.
//! 2. [`tally`] counts valid files per article id.
//! 3. [`check_companions`] and [`check_contiguity`] evaluate the tally.
//!
//! [`DatasetValidator::validate`] chains them and reports the first failure.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::{CompanionRule, DatasetPolicy};
use crate::errors::{DatasetError, DatasetResult, Inconsistency};
use crate::ArticleId;

/// Outcome of classifying one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileClass {
    Valid { id: ArticleId },
    BadNamePattern,
    EmptyFile,
    Unsupported { extension: String },
    NotAFile,
}

/// A classified directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub class: FileClass,
}

/// Per-file classification of a whole dataset directory, in file name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub records: Vec<FileRecord>,
}

impl ValidationReport {
    /// The first per-file failure, if any.
    pub fn first_failure(&self) -> Option<DatasetError> {
        self.records.iter().find_map(|record| {
            let file = record.name.clone();
            match &record.class {
                FileClass::Valid { .. } => None,
                FileClass::BadNamePattern => Some(DatasetError::InconsistentDataset(
                    Inconsistency::BadNamePattern { file },
                )),
                FileClass::EmptyFile => Some(DatasetError::InconsistentDataset(
                    Inconsistency::EmptyFile { file },
                )),
                FileClass::NotAFile => Some(DatasetError::InconsistentDataset(
                    Inconsistency::UnexpectedEntry { file },
                )),
                FileClass::Unsupported { extension } => Some(DatasetError::UnsupportedFileFormat {
                    file,
                    extension: extension.clone(),
                }),
            }
        })
    }

    pub fn valid_ids(&self) -> impl Iterator<Item = ArticleId> + '_ {
        self.records.iter().filter_map(|record| match record.class {
            FileClass::Valid { id } => Some(id),
            _ => None,
        })
    }
}

/// Parse the leading `<N>_` article id of a file name.
pub fn parse_article_prefix(file_name: &str) -> Option<ArticleId> {
    let (prefix, _) = file_name.split_once('_')?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Classify a single file from its name, size and extension.
///
/// Checks run in order: name pattern, size, extension. Ids are 1-based, so a
/// `0_` prefix breaks the name pattern.
pub fn classify_file(name: &str, len: u64, policy: &DatasetPolicy) -> FileClass {
    let id = match parse_article_prefix(name) {
        Some(id) if id > 0 => id,
        _ => return FileClass::BadNamePattern,
    };
    if len == 0 {
        return FileClass::EmptyFile;
    }
    let extension = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !policy.allows_extension(&extension) {
        return FileClass::Unsupported { extension };
    }
    FileClass::Valid { id }
}

/// First pass: stat every entry of `dir` and classify it.
pub fn classify_directory(dir: &Path, policy: &DatasetPolicy) -> DatasetResult<ValidationReport> {
    let io_err = |source| DatasetError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut records = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let meta = entry.metadata().map_err(|source| DatasetError::Io {
            path: entry.path(),
            source,
        })?;
        let class = if meta.is_file() {
            classify_file(&name, meta.len(), policy)
        } else {
            FileClass::NotAFile
        };
        records.push(FileRecord { name, class });
    }
    records.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(ValidationReport { records })
}

/// Second pass: count valid files per article id.
pub fn tally(report: &ValidationReport) -> BTreeMap<ArticleId, usize> {
    let mut counts = BTreeMap::new();
    for id in report.valid_ids() {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
}

/// Every article id must satisfy the companion rule.
pub fn check_companions(
    counts: &BTreeMap<ArticleId, usize>,
    rule: CompanionRule,
) -> Result<(), Inconsistency> {
    match counts.iter().find(|&(_, &count)| !rule.accepts(count)) {
        Some((&id, &found)) => Err(Inconsistency::MissingCompanions {
            id,
            found,
            required: rule,
        }),
        None => Ok(()),
    }
}

const FIRST_ID: ArticleId = 1;

/// Article ids must be exactly `1..=max`.
///
/// Runs in the number of ids present, not in `max`. Id 0 is rejected earlier
/// by [`classify_file`] and ignored here.
pub fn check_contiguity(counts: &BTreeMap<ArticleId, usize>) -> Result<(), Inconsistency> {
    let max = match counts.keys().next_back() {
        Some(&max) if max > 0 => max,
        _ => return Ok(()),
    };
    let present = counts.range(FIRST_ID..).count() as u64;
    if present == u64::from(max) {
        return Ok(());
    }

    // ids are sorted and distinct, so the first one out of step marks the gap
    let first_missing = counts
        .range(FIRST_ID..)
        .map(|(&id, _)| id)
        .zip(FIRST_ID..)
        .find(|&(id, expected)| id != expected)
        .map_or(max, |(_, expected)| expected);
    Err(Inconsistency::NumberingGap {
        first_missing,
        missing: u64::from(max) - present,
    })
}

/// Gatekeeper run before any document is indexed.
#[derive(Debug, Clone, Default)]
pub struct DatasetValidator {
    policy: DatasetPolicy,
}

impl DatasetValidator {
    pub fn new(policy: DatasetPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DatasetPolicy {
        &self.policy
    }

    /// Validate `dir`, returning the first integrity violation found.
    pub fn validate(&self, dir: &Path) -> DatasetResult<()> {
        if !dir.exists() {
            return Err(DatasetError::PathNotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(DatasetError::NotADirectory(dir.to_path_buf()));
        }

        let report = classify_directory(dir, &self.policy)?;
        if report.records.is_empty() {
            return Err(DatasetError::EmptyDirectory(dir.to_path_buf()));
        }
        if let Some(err) = report.first_failure() {
            return Err(err);
        }

        let counts = tally(&report);
        check_companions(&counts, self.policy.companions)
            .and_then(|()| check_contiguity(&counts))
            .map_err(DatasetError::InconsistentDataset)?;

        tracing::info!(
            "dataset {} is valid: {} articles, {} files",
            dir.display(),
            counts.len(),
            report.records.len()
        );
        Ok(())
    }
}
