//! In-memory index of the documents in a dataset directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::Layout;
use crate::document::Document;
use crate::errors::{DatasetError, DatasetResult};
use crate::ArticleId;

/// Immutable mapping from article id to [`Document`], ordered by id.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    documents: BTreeMap<ArticleId, Document>,
}

impl CorpusIndex {
    /// Register every raw-text file of `dir`.
    ///
    /// Files whose id cannot be parsed are skipped with a warning rather than
    /// failing the whole scan.
    pub fn scan(dir: &Path, layout: &Layout) -> DatasetResult<Self> {
        let io_err = |source| DatasetError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut documents = BTreeMap::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file() {
                continue;
            }
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            let id_text = match layout.raw.strip(name) {
                Some(id_text) => id_text,
                None => continue,
            };

            let id = match id_text.parse::<ArticleId>() {
                Ok(0) => {
                    tracing::warn!("skipping {}: article ids start at 1", name);
                    continue;
                }
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!("skipping {}: cannot parse article id: {}", name, e);
                    continue;
                }
            };

            if documents.contains_key(&id) {
                tracing::warn!("skipping {}: article {} already indexed", name, id);
                continue;
            }
            documents.insert(id, Document::new(id, path.clone()));
        }

        tracing::info!("indexed {} documents from {}", documents.len(), dir.display());
        Ok(Self { documents })
    }

    /// Build an index from already-constructed documents.
    pub fn from_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        Self {
            documents: documents.into_iter().map(|doc| (doc.id(), doc)).collect(),
        }
    }

    pub fn get(&self, id: ArticleId) -> Option<&Document> {
        self.documents.get(&id)
    }

    /// All documents in ascending id order.
    pub fn list(&self) -> impl Iterator<Item = &Document> + '_ {
        self.documents.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = ArticleId> + '_ {
        self.documents.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "Текст").unwrap();
    }

    #[test]
    fn scans_raw_text_files_only() {
        let dir = TempDir::new().unwrap();
        for name in ["1_raw.txt", "1_meta.json", "2_raw.txt", "2_meta.json", "2_raw.pdf"] {
            touch(dir.path(), name);
        }

        let index = CorpusIndex::scan(dir.path(), &Layout::default()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.ids().collect::<Vec<_>>(), vec![1, 2]);

        let doc = index.get(2).unwrap();
        assert_eq!(doc.id(), 2);
        assert_eq!(doc.raw_path(), dir.path().join("2_raw.txt"));
        assert_eq!(doc.raw_text().unwrap(), "Текст");
        assert!(index.get(3).is_none());
    }

    #[test]
    fn unparsable_ids_are_skipped() {
        let dir = TempDir::new().unwrap();
        for name in ["1_raw.txt", "abc_raw.txt", "0_raw.txt", "03_raw.txt", "3_raw.txt"] {
            touch(dir.path(), name);
        }

        let index = CorpusIndex::scan(dir.path(), &Layout::default()).unwrap();
        // "03" and "3" collide; whichever is read first wins
        assert_eq!(index.ids().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn list_is_ordered_by_id() {
        let dir = TempDir::new().unwrap();
        for id in [10, 2, 1] {
            touch(dir.path(), &format!("{}_raw.txt", id));
        }
        let index = CorpusIndex::scan(dir.path(), &Layout::default()).unwrap();
        let ids: Vec<_> = index.list().map(Document::id).collect();
        assert_eq!(ids, vec![1, 2, 10]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = CorpusIndex::scan(&dir.path().join("nope"), &Layout::default());
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
