//! Persistence of derived artifacts and per-article metadata.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Layout;
use crate::document::{ArtifactKind, ArtifactSet, Metadata, StatisticsKind};
use crate::errors::StoreError;
use crate::ArticleId;

/// Where derived artifacts and metadata records are kept.
///
/// File identities are the store's concern; callers address artifacts by
/// article id and [`ArtifactKind`] only.
pub trait CorpusStore {
    /// Persist all three artifacts of one article.
    ///
    /// Implementations must not leave a partially written set behind on error.
    fn write_artifacts(&self, id: ArticleId, artifacts: &ArtifactSet) -> io::Result<()>;

    fn read_artifact(&self, id: ArticleId, kind: ArtifactKind) -> io::Result<Vec<u8>>;

    fn read_metadata(&self, id: ArticleId) -> Result<Metadata, StoreError>;

    /// Replace the whole metadata record.
    fn write_metadata(&self, id: ArticleId, metadata: &Metadata) -> Result<(), StoreError>;

    /// Destination handed to the visualizer for a rendered statistic.
    fn statistics_destination(&self, id: ArticleId, kind: StatisticsKind) -> PathBuf;
}

/// [`CorpusStore`] keeping everything as files in the dataset directory.
#[derive(Debug, Clone)]
pub struct FsCorpusStore {
    root: PathBuf,
    layout: Layout,
}

impl FsCorpusStore {
    pub fn new(root: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifact_path(&self, id: ArticleId, kind: ArtifactKind) -> PathBuf {
        let name = match kind {
            ArtifactKind::Cleaned => &self.layout.cleaned,
            ArtifactKind::SingleTagged => &self.layout.single_tagged,
            ArtifactKind::MultipleTagged => &self.layout.multiple_tagged,
        };
        self.root.join(name.for_article(id))
    }

    pub fn metadata_path(&self, id: ArticleId) -> PathBuf {
        self.root.join(self.layout.meta.for_article(id))
    }

    fn staging_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".partial");
        path.with_file_name(name)
    }
}

/// Current contents of `path`, or `None` when it does not exist yet.
fn read_existing(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Put `previous` contents back at `path`, best effort.
fn restore(path: &Path, previous: Option<&[u8]>) {
    let _ = match previous {
        Some(bytes) => fs::write(path, bytes),
        None => fs::remove_file(path),
    };
}

/// Replace a single file via a staging file and a rename.
fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let staging = FsCorpusStore::staging_path(path);
    let result = fs::write(&staging, contents).and_then(|()| fs::rename(&staging, path));
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

impl CorpusStore for FsCorpusStore {
    fn write_artifacts(&self, id: ArticleId, artifacts: &ArtifactSet) -> io::Result<()> {
        let targets: Vec<(PathBuf, PathBuf)> = ArtifactKind::ALL
            .iter()
            .map(|&kind| {
                let path = self.artifact_path(id, kind);
                (Self::staging_path(&path), path)
            })
            .collect();

        // Keep the previous set so a failed swap can be rolled back. A target
        // that cannot be read fails the write before anything is touched.
        let previous = targets
            .iter()
            .map(|(_, path)| read_existing(path))
            .collect::<io::Result<Vec<_>>>()?;

        // Stage every file before any of them becomes visible.
        let staged = ArtifactKind::ALL
            .iter()
            .zip(&targets)
            .try_for_each(|(&kind, (staging, _))| fs::write(staging, artifacts.get(kind)));
        if let Err(e) = staged {
            for (staging, _) in &targets {
                let _ = fs::remove_file(staging);
            }
            return Err(e);
        }

        for (swapped, (staging, path)) in targets.iter().enumerate() {
            if let Err(e) = fs::rename(staging, path) {
                for (staging, _) in &targets[swapped..] {
                    let _ = fs::remove_file(staging);
                }
                for ((_, path), old) in targets[..swapped].iter().zip(&previous) {
                    restore(path, old.as_deref());
                }
                tracing::warn!("article {}: rolled back partial artifact write: {}", id, e);
                return Err(e);
            }
        }
        Ok(())
    }

    fn read_artifact(&self, id: ArticleId, kind: ArtifactKind) -> io::Result<Vec<u8>> {
        fs::read(self.artifact_path(id, kind))
    }

    fn read_metadata(&self, id: ArticleId) -> Result<Metadata, StoreError> {
        let path = self.metadata_path(id);
        let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        match serde_json::from_str(&content) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::NotAnObject { path }),
            Err(source) => Err(StoreError::Json { path, source }),
        }
    }

    fn write_metadata(&self, id: ArticleId, metadata: &Metadata) -> Result<(), StoreError> {
        let path = self.metadata_path(id);

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        serde::Serialize::serialize(metadata, &mut ser).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        replace_file(&path, &buf).map_err(|source| StoreError::Io { path, source })
    }

    fn statistics_destination(&self, id: ArticleId, kind: StatisticsKind) -> PathBuf {
        let name = match kind {
            StatisticsKind::PosFrequencies => &self.layout.pos_image,
            StatisticsKind::CaseFrequencies => &self.layout.case_image,
        };
        self.root.join(name.for_article(id))
    }
}
