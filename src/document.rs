//! Documents and the artifacts derived from them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::ArticleId;

/// Open metadata record stored next to each article.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// One article of the corpus.
///
/// Holds only the id and where its raw text lives; the text is read on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: ArticleId,
    raw_path: PathBuf,
}

impl Document {
    pub fn new(id: ArticleId, raw_path: PathBuf) -> Self {
        Self { id, raw_path }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn raw_path(&self) -> &Path {
        &self.raw_path
    }

    /// Load the raw text body.
    pub fn raw_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.raw_path)
    }
}

/// The three text artifacts derived from a document's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    /// Lowercased surface forms.
    Cleaned,
    /// `lemma<TAG>` from the multi-candidate analyzer.
    SingleTagged,
    /// `lemma<TAG>(TAG)` with the single-parse tagger's tag appended.
    MultipleTagged,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Cleaned,
        ArtifactKind::SingleTagged,
        ArtifactKind::MultipleTagged,
    ];
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Cleaned => write!(f, "cleaned"),
            ArtifactKind::SingleTagged => write!(f, "single_tagged"),
            ArtifactKind::MultipleTagged => write!(f, "multiple_tagged"),
        }
    }
}

/// All three artifacts of one document, produced together from a single token pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    pub cleaned: String,
    pub single_tagged: String,
    pub multiple_tagged: String,
}

impl ArtifactSet {
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Cleaned => &self.cleaned,
            ArtifactKind::SingleTagged => &self.single_tagged,
            ArtifactKind::MultipleTagged => &self.multiple_tagged,
        }
    }
}

/// Which statistic a rendered image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsKind {
    PosFrequencies,
    CaseFrequencies,
}
