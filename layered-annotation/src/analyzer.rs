//! Contracts for the external morphological analyzers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One analysis hypothesis for a surface token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisCandidate {
    /// Normalized dictionary form.
    #[serde(default)]
    pub lemma: Option<String>,
    /// Grammatical tag string, e.g. `S,жен,од=им,ед`.
    #[serde(default)]
    pub tag: Option<String>,
}

impl AnalysisCandidate {
    pub fn new(lemma: &str, tag: &str) -> Self {
        Self {
            lemma: Some(lemma.to_string()),
            tag: Some(tag.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.lemma.is_none() && self.tag.is_none()
    }
}

/// A surface token with its ranked analysis candidates (best first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceToken {
    pub text: String,
    #[serde(default)]
    pub candidates: Vec<AnalysisCandidate>,
}

impl SurfaceToken {
    pub fn new(text: &str, candidates: Vec<AnalysisCandidate>) -> Self {
        Self {
            text: text.to_string(),
            candidates,
        }
    }

    /// A token with no analysis, such as punctuation or whitespace.
    pub fn bare(text: &str) -> Self {
        Self::new(text, Vec::new())
    }
}

/// Failure reported by an analyzer engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{engine}: {message}")]
pub struct AnalyzerError {
    pub engine: String,
    pub message: String,
}

impl AnalyzerError {
    pub fn new(engine: &str, message: impl Into<String>) -> Self {
        Self {
            engine: engine.to_string(),
            message: message.into(),
        }
    }
}

/// Multi-candidate analyzer run over a whole text at once.
pub trait MorphAnalyzer {
    /// Split `text` into surface tokens, in text order, each with its candidates.
    fn analyze(&self, text: &str) -> Result<Vec<SurfaceToken>, AnalyzerError>;
}

/// Single-best-parse tagger queried one surface form at a time.
pub trait SingleParseTagger {
    fn tag(&self, surface: &str) -> Result<String, AnalyzerError>;
}
