#![forbid(unsafe_code)]

//! Candidate computation: which entries match the current input text.

use crate::entry::{Entry, EntryStore};

/// Maximum candidate set size, bounding render cost.
pub const MAX_CANDIDATES: usize = 100;

/// Compute the ordered candidate set for `query`.
///
/// An empty query yields an empty set: the menu never opens on empty input.
/// Otherwise an entry matches when its label contains the query
/// case-insensitively. The query is matched as literal text; characters that
/// are special in pattern syntax carry no meaning here. Candidates preserve
/// source order and are truncated to the first [`MAX_CANDIDATES`] matches.
#[must_use]
pub fn filter(query: &str, store: &EntryStore) -> Vec<Entry> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    store
        .entries()
        .iter()
        .filter(|entry| entry.label.to_lowercase().contains(&needle))
        .take(MAX_CANDIDATES)
        .cloned()
        .collect()
}
