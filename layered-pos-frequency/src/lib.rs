#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Part-of-speech statistics for layered-corpus.
//!
//! Works from the single-tagged artifact (`lemma<TAG>` tokens) produced by
//! `layered-annotation`:
//!
//! - [`pos_histogram`] - counts of every `<CODE` marker
//! - [`CaseExtractor`] - optional noun-case counts, patterns configurable
//! - [`merge_pos_frequencies`] - stores the POS counts under `pos_frequencies`
//! - [`FrequencyAggregator`] - runs all of the above per document
//!
//! ```
//! use layered_pos_frequency::pos_histogram;
//!
//! let counts = pos_histogram("кот<NOUN> пес<NOUN> бежать<VERB>");
//! assert_eq!(counts["NOUN"], 2);
//! assert_eq!(counts["VERB"], 1);
//! ```

mod aggregator;
mod errors;
mod histogram;
mod metadata;
mod visualizer;

pub use aggregator::{validate_annotation, DocumentStatistics, FrequencyAggregator, FrequencyConfig};
pub use errors::FrequencyError;
pub use histogram::{pos_histogram, CaseExtractor, CaseHistogramConfig, Histogram};
pub use metadata::{merge_pos_frequencies, pos_frequencies, POS_FREQUENCIES_KEY};
pub use visualizer::{NullVisualizer, Visualizer};

#[cfg(test)]
mod tests;
