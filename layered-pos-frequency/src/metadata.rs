//! Merging statistics into an article's metadata record.

use layered_corpus::Metadata;
use serde_json::Value;

use crate::histogram::Histogram;

/// Metadata key holding the POS histogram.
pub const POS_FREQUENCIES_KEY: &str = "pos_frequencies";

/// Insert `frequencies` under [`POS_FREQUENCIES_KEY`], leaving every other key untouched.
///
/// A value from a previous run is replaced in place.
pub fn merge_pos_frequencies(metadata: &mut Metadata, frequencies: &Histogram) {
    let value = frequencies
        .iter()
        .map(|(code, &count)| (code.clone(), Value::from(count)))
        .collect::<serde_json::Map<_, _>>();
    metadata.insert(POS_FREQUENCIES_KEY.to_string(), Value::Object(value));
}

/// Read a POS histogram back out of a metadata record.
pub fn pos_frequencies(metadata: &Metadata) -> Option<Histogram> {
    let object = metadata.get(POS_FREQUENCIES_KEY)?.as_object()?;
    object
        .iter()
        .map(|(code, count)| Some((code.clone(), count.as_u64()?)))
        .collect()
}
