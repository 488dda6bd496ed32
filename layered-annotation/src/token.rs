//! Per-token annotation record and the admission filter.

use crate::analyzer::SurfaceToken;

/// A token that passed admission, with both analyzers' results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologicalToken {
    original: String,
    cleaned: String,
    lemma: String,
    primary_tag: String,
    secondary_tag: String,
}

impl MorphologicalToken {
    pub fn new(original: &str, lemma: &str, primary_tag: &str, secondary_tag: &str) -> Self {
        Self {
            original: original.to_string(),
            cleaned: original.to_lowercase(),
            lemma: lemma.to_string(),
            primary_tag: primary_tag.to_string(),
            secondary_tag: secondary_tag.to_string(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn primary_tag(&self) -> &str {
        &self.primary_tag
    }

    pub fn secondary_tag(&self) -> &str {
        &self.secondary_tag
    }

    /// Lowercased surface form.
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// `lemma<PRIMARY>`
    pub fn single_tagged(&self) -> String {
        format!("{}<{}>", self.lemma, self.primary_tag)
    }

    /// `lemma<PRIMARY>(SECONDARY)`
    pub fn multiple_tagged(&self) -> String {
        format!("{}<{}>({})", self.lemma, self.primary_tag, self.secondary_tag)
    }
}

/// The parts of a surface token needed once it has been admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admitted {
    pub surface: String,
    pub lemma: String,
    pub primary_tag: String,
}

/// Latin or Cyrillic letter, accented Latin letters included.
pub fn is_word_initial(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(c, '\u{00C0}'..='\u{024F}' | '\u{0400}'..='\u{04FF}' if c.is_alphabetic())
}

/// Decide whether a surface token is annotated or dropped.
///
/// Dropped when it has no candidates, when the best candidate carries neither
/// lemma nor tag, or when it does not start with a letter. A missing lemma
/// falls back to the lowercased surface and a missing tag renders empty.
pub fn admit(token: SurfaceToken) -> Option<Admitted> {
    let best = token.candidates.into_iter().next()?;
    if best.is_blank() {
        return None;
    }
    if !token.text.chars().next().map_or(false, is_word_initial) {
        return None;
    }

    let lemma = best.lemma.unwrap_or_else(|| token.text.to_lowercase());
    Some(Admitted {
        surface: token.text,
        lemma,
        primary_tag: best.tag.unwrap_or_default(),
    })
}
