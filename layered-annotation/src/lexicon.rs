//! Dictionary-backed analyzer for offline runs and reproducible fixtures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::analyzer::{
    AnalysisCandidate, AnalyzerError, MorphAnalyzer, SingleParseTagger, SurfaceToken,
};

/// Word-list analyzer implementing both analyzer contracts.
///
/// Text is split on Unicode word boundaries (UAX #29); whitespace segments are
/// discarded and everything else, punctuation included, becomes a surface
/// token. Lookups are by lowercased surface form.
///
/// ```
/// use layered_annotation::{AnalysisCandidate, Lexicon, MorphAnalyzer, SingleParseTagger};
///
/// let lexicon = Lexicon::new()
///     .with_word("привет", vec![AnalysisCandidate::new("привет", "ADV")])
///     .with_parse("привет", "INTJ");
/// let tokens = lexicon.analyze("Привет!").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(lexicon.tag("Привет").unwrap(), "INTJ");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Candidates per lowercased surface form, best first.
    #[serde(default)]
    pub analyses: HashMap<String, Vec<AnalysisCandidate>>,
    /// Single-parse tag per lowercased surface form.
    #[serde(default)]
    pub parses: HashMap<String, String>,
    /// Tag returned for surfaces missing from `parses`.
    #[serde(default = "default_unknown_parse")]
    pub unknown_parse: String,
}

fn default_unknown_parse() -> String {
    "UNKN".to_string()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            analyses: HashMap::new(),
            parses: HashMap::new(),
            unknown_parse: default_unknown_parse(),
        }
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_word(mut self, surface: &str, candidates: Vec<AnalysisCandidate>) -> Self {
        self.analyses.insert(surface.to_lowercase(), candidates);
        self
    }

    pub fn with_parse(mut self, surface: &str, tag: &str) -> Self {
        self.parses.insert(surface.to_lowercase(), tag.to_string());
        self
    }
}

impl MorphAnalyzer for Lexicon {
    fn analyze(&self, text: &str) -> Result<Vec<SurfaceToken>, AnalyzerError> {
        Ok(text
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| {
                let candidates = self
                    .analyses
                    .get(&segment.to_lowercase())
                    .cloned()
                    .unwrap_or_default();
                SurfaceToken::new(segment, candidates)
            })
            .collect())
    }
}

impl SingleParseTagger for Lexicon {
    fn tag(&self, surface: &str) -> Result<String, AnalyzerError> {
        Ok(self
            .parses
            .get(&surface.to_lowercase())
            .cloned()
            .unwrap_or_else(|| self.unknown_parse.clone()))
    }
}
