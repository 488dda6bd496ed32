//! Repairs layout damage left by text extracted from paginated sources.

use once_cell::sync::Lazy;
use regex::Regex;

/// A hyphen at the end of a line, plus any indentation on the next one.
static HYPHENATED_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\r?\n[ \t]*").unwrap());

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Rejoin words split across lines, then flatten the remaining line breaks.
///
/// `"аннота-\nция"` becomes `"аннотация"`; every other run of line breaks
/// becomes a single space.
pub fn repair_text(raw: &str) -> String {
    let joined = HYPHENATED_BREAK.replace_all(raw, "");
    LINE_BREAKS.replace_all(&joined, " ").into_owned()
}
