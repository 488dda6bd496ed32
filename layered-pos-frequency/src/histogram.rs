//! Tag frequency counting over single-tagged text.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Label → occurrence count, ordered by label.
pub type Histogram = BTreeMap<String, u64>;

/// `<` followed by the uppercase POS code that opens a tag.
static POS_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([A-Z]+)").unwrap());

/// Count every `<CODE` marker in `text`.
///
/// Only the bracket markers matter; whitespace and the lemmas between them are
/// ignored.
pub fn pos_histogram(text: &str) -> Histogram {
    let mut counts = Histogram::new();
    for caps in POS_MARKER.captures_iter(text) {
        *counts.entry(caps[1].to_string()).or_insert(0) += 1;
    }
    counts
}

/// Patterns locating grammatical case inside noun tags.
///
/// The defaults follow Mystem's tag vocabulary, e.g. `<S,жен,неод=(вин,ед|им,ед)>`.
/// Another analyzer needs its own patterns and case set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseHistogramConfig {
    /// Matches one whole bracketed tag run belonging to a noun.
    pub noun_run_pattern: String,
    /// Matches a case segment; capture group 1 is the case abbreviation.
    pub case_pattern: String,
    /// Closed set of case abbreviations worth counting.
    pub cases: Vec<String>,
}

impl Default for CaseHistogramConfig {
    fn default() -> Self {
        Self {
            noun_run_pattern: r"<S,[^>]*>".to_string(),
            case_pattern: r"([а-яё]+),(?:ед|мн)\b".to_string(),
            cases: ["им", "род", "дат", "вин", "твор", "пр", "парт", "местн", "зват"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// Compiled form of [`CaseHistogramConfig`].
#[derive(Debug, Clone)]
pub struct CaseExtractor {
    noun_run: Regex,
    case: Regex,
    cases: Vec<String>,
}

impl CaseExtractor {
    pub fn new(config: &CaseHistogramConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            noun_run: Regex::new(&config.noun_run_pattern)?,
            case: Regex::new(&config.case_pattern)?,
            cases: config.cases.clone(),
        })
    }

    /// Count known case abbreviations inside noun tag runs.
    pub fn histogram(&self, text: &str) -> Histogram {
        let mut counts = Histogram::new();
        for run in self.noun_run.find_iter(text) {
            for caps in self.case.captures_iter(run.as_str()) {
                let case = match caps.get(1) {
                    Some(case) => case.as_str(),
                    None => continue,
                };
                if self.cases.iter().any(|known| known == case) {
                    *counts.entry(case.to_string()).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}
