#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Morphological annotation for layered-corpus.
//!
//! Every document's raw text goes through:
//!
//! 1. [`repair_text`] - rejoin hyphenated line breaks, flatten lines
//! 2. [`MorphAnalyzer`] - multi-candidate analysis of the whole text
//! 3. [`admit`] - drop punctuation, digits and unanalyzed tokens
//! 4. [`SingleParseTagger`] - secondary tag per surviving surface form
//! 5. [`render_artifacts`] - cleaned, single-tagged and multiple-tagged text
//!
//! The analyzers are external engines; this crate only defines their
//! contracts, plus [`Lexicon`], a word-list implementation of both.
//!
//! ## Example
//!
//! ```ignore
//! use layered_annotation::{AnnotationPipeline, Lexicon};
//! use layered_corpus::{CorpusIndex, FsCorpusStore, Layout};
//!
//! let lexicon = Lexicon::from_json(&lexicon_json)?;
//! let store = FsCorpusStore::new(dir, Layout::default());
//! let index = CorpusIndex::scan(dir, &Layout::default())?;
//! AnnotationPipeline::new(&store, &lexicon, &lexicon).run(&index)?;
//! ```

mod analyzer;
mod errors;
mod lexicon;
mod pipeline;
mod repair;
mod token;

pub use analyzer::{
    AnalysisCandidate, AnalyzerError, MorphAnalyzer, SingleParseTagger, SurfaceToken,
};
pub use errors::AnnotationError;
pub use lexicon::Lexicon;
pub use pipeline::{render_artifacts, AnnotationPipeline};
pub use repair::repair_text;
pub use token::{admit, is_word_initial, Admitted, MorphologicalToken};

#[cfg(test)]
mod tests;
