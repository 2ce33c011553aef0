#![forbid(unsafe_code)]

//! The entry store: selectable entries synced from a source list.

use crate::source::OptionRecord;

/// A selectable `(value, label, source-index)` snapshot.
///
/// `index` is the record's ordinal position in the external source list at
/// the last sync. It is the stable key used to reconcile the selection
/// cursor across recomputation; skipped valueless records leave gaps, so it
/// is a handle into the source, not a dense counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The selectable value.
    pub value: String,
    /// Display label (markup-capable, carried verbatim).
    pub label: String,
    /// Ordinal position in the source list at last sync.
    pub index: usize,
}

/// Ordered sequence of entries, rebuilt wholesale on every source change.
///
/// # Invariants
///
/// 1. Entries with an empty value never appear.
/// 2. Relative source order is preserved.
/// 3. `index` is each surviving record's 0-based position in the *original*
///    source list (gaps allowed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry sequence from a source list.
    ///
    /// Records with an empty value are dropped; the rest keep their original
    /// source position as `index`. An empty source yields an empty store.
    /// There are no error conditions.
    pub fn sync(&mut self, records: &[OptionRecord]) {
        self.entries = records
            .iter()
            .enumerate()
            .filter(|(_, record)| !record.value.is_empty())
            .map(|(index, record)| Entry {
                value: record.value.clone(),
                label: record.label.clone(),
                index,
            })
            .collect();
    }

    /// Discard all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries, in source order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by its stable source index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.iter().find(|e| e.index == index)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
