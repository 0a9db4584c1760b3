//! Case-insensitive substring matching over string fields.

use crate::keys::SearchKeys;
use storefront_core::types::Record;

/// Terms shorter than this many UTF-16 units (after trimming) do not filter at all.
pub const MIN_TERM_CHARS: usize = 2;

/// Returns true if the term is long enough to filter the collection.
///
/// Length is measured in UTF-16 code units, as the browser front end counts
/// it, so a single astral character such as an emoji passes the gate.
pub fn is_filtering(term: &str) -> bool {
    term.trim().encode_utf16().count() >= MIN_TERM_CHARS
}

/// Returns true if any key holds a string containing `needle`.
///
/// `needle` must already be lower-cased. Keys are tried in order and the scan
/// stops at the first hit. Missing and non-string fields never match.
pub fn record_matches(record: &Record, keys: &SearchKeys, needle: &str) -> bool {
    keys.iter().any(|key| {
        record
            .text(key.as_str())
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Returns the indices of matching records, in source order.
pub fn filter_indices(source: &[Record], keys: &SearchKeys, term: &str) -> Vec<usize> {
    if !is_filtering(term) {
        return (0..source.len()).collect();
    }

    let needle = term.to_lowercase();
    source
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, keys, &needle))
        .map(|(index, _)| index)
        .collect()
}
