//! Run configuration loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use layered_corpus::CorpusConfig;
use layered_pos_frequency::FrequencyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a corpus run needs besides the analyzers.
///
/// ```toml
/// [corpus.dataset]
/// companions = { exactly = 3 }
/// allowed_extensions = ["json", "txt", "pdf"]
///
/// [frequency.case_histogram]
/// cases = ["им", "род", "вин"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub corpus: CorpusConfig,
    pub frequency: FrequencyConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl RunnerConfig {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
