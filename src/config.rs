//! Dataset policy and on-disk naming layout.

use serde::{Deserialize, Serialize};

use crate::ArticleId;

/// How many files each article id must have in the dataset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanionRule {
    /// At least `n` files share the prefix.
    AtLeast(usize),
    /// Exactly `n` files share the prefix.
    Exactly(usize),
}

impl CompanionRule {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            CompanionRule::AtLeast(n) => count >= n,
            CompanionRule::Exactly(n) => count == n,
        }
    }
}

impl std::fmt::Display for CompanionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanionRule::AtLeast(n) => write!(f, "at least {}", n),
            CompanionRule::Exactly(n) => write!(f, "exactly {}", n),
        }
    }
}

/// Integrity policy applied by [`crate::DatasetValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetPolicy {
    pub companions: CompanionRule,
    /// Allowed extensions, without the leading dot. Compared case-insensitively.
    pub allowed_extensions: Vec<String>,
}

impl DatasetPolicy {
    /// Raw text, metadata and the source PDF, exactly three per article.
    pub fn strict() -> Self {
        Self {
            companions: CompanionRule::Exactly(3),
            allowed_extensions: vec!["json".into(), "txt".into(), "pdf".into()],
        }
    }

    /// At least raw text and metadata; rendered images are tolerated.
    pub fn lenient() -> Self {
        Self {
            companions: CompanionRule::AtLeast(2),
            allowed_extensions: vec!["json".into(), "txt".into(), "pdf".into(), "png".into()],
        }
    }

    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

impl Default for DatasetPolicy {
    fn default() -> Self {
        Self::lenient()
    }
}

/// File naming convention `<N>_<suffix>.<ext>` for every file the corpus touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub raw: FileName,
    pub meta: FileName,
    pub cleaned: FileName,
    pub single_tagged: FileName,
    pub multiple_tagged: FileName,
    pub pos_image: FileName,
    pub case_image: FileName,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            raw: FileName::new("raw", "txt"),
            meta: FileName::new("meta", "json"),
            cleaned: FileName::new("cleaned", "txt"),
            single_tagged: FileName::new("single_tagged", "txt"),
            multiple_tagged: FileName::new("multiple_tagged", "txt"),
            pos_image: FileName::new("image", "png"),
            case_image: FileName::new("cases", "png"),
        }
    }
}

/// The `<suffix>.<ext>` part of a corpus file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileName {
    pub suffix: String,
    pub extension: String,
}

impl FileName {
    pub fn new(suffix: &str, extension: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            extension: extension.to_string(),
        }
    }

    /// The full file name for an article.
    pub fn for_article(&self, id: ArticleId) -> String {
        format!("{}_{}.{}", id, self.suffix, self.extension)
    }

    /// The `_<suffix>.<ext>` tail shared by every article's file of this kind.
    pub fn tail(&self) -> String {
        format!("_{}.{}", self.suffix, self.extension)
    }

    /// Strip the tail from `file_name`, returning the would-be id text.
    pub fn strip<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name.strip_suffix(self.tail().as_str())
    }
}

/// Configuration for the core crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub dataset: DatasetPolicy,
    pub layout: Layout,
}
