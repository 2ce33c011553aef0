//! Property-based invariant tests for the suggestion engine primitives.
//!
//! These tests verify the contracts that must hold for any valid inputs:
//!
//! 1. Sync excludes valueless records and preserves original source indices.
//! 2. Every candidate's label contains the query case-insensitively.
//! 3. The candidate set never exceeds the cap.
//! 4. Empty query always yields an empty candidate set.
//! 5. After reconcile, the cursor is `None` or a member of the candidate set.
//! 6. Advance Next then Previous over an unchanged rendered set is the
//!    identity (except when starting from `None`).
//! 7. Candidates preserve relative source order.

use proptest::prelude::*;
use typeahead_core::{Direction, EntryStore, OptionRecord, SelectionCursor, filter, MAX_CANDIDATES};

// ── Helpers ─────────────────────────────────────────────────────────────

fn record_strategy() -> impl Strategy<Value = OptionRecord> {
    ("[a-z]{0,3}", "[a-zA-Z ()]{0,12}").prop_map(|(value, label)| OptionRecord::new(value, label))
}

fn records_strategy() -> impl Strategy<Value = Vec<OptionRecord>> {
    proptest::collection::vec(record_strategy(), 0..200)
}

fn synced_store(records: &[OptionRecord]) -> EntryStore {
    let mut store = EntryStore::new();
    store.sync(records);
    store
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Sync excludes valueless records and preserves source indices
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sync_excludes_valueless_and_keeps_indices(records in records_strategy()) {
        let store = synced_store(&records);

        for entry in store.entries() {
            prop_assert!(!entry.value.is_empty(), "valueless entry survived sync");
            let record = &records[entry.index];
            prop_assert_eq!(&entry.value, &record.value);
            prop_assert_eq!(&entry.label, &record.label);
        }

        let expected = records.iter().filter(|r| !r.value.is_empty()).count();
        prop_assert_eq!(store.len(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2+3. Candidate labels contain the query; set size is capped
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn candidates_contain_query_and_respect_cap(
        records in records_strategy(),
        query in "[a-zA-Z]{1,4}",
    ) {
        let store = synced_store(&records);
        let candidates = filter(&query, &store);

        prop_assert!(candidates.len() <= MAX_CANDIDATES);
        let needle = query.to_lowercase();
        for entry in &candidates {
            prop_assert!(
                entry.label.to_lowercase().contains(&needle),
                "candidate {:?} does not contain {:?}",
                entry.label, query
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Empty query always yields an empty candidate set
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_query_yields_nothing(records in records_strategy()) {
        let store = synced_store(&records);
        prop_assert!(filter("", &store).is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Reconciled cursor is None or a member of the candidate set
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reconciled_cursor_is_member_or_none(
        records in records_strategy(),
        query in "[a-z]{1,3}",
        previous in proptest::option::of(0usize..250),
    ) {
        let store = synced_store(&records);
        let candidates = filter(&query, &store);

        let mut cursor = SelectionCursor::new();
        if let Some(index) = previous {
            // Seed an arbitrary prior selection via a one-entry reconcile.
            cursor.reconcile(&[typeahead_core::Entry {
                value: "seed".into(),
                label: "seed".into(),
                index,
            }]);
        }
        cursor.reconcile(&candidates);

        match cursor.selected() {
            None => prop_assert!(candidates.is_empty()),
            Some(index) => {
                prop_assert!(candidates.iter().any(|e| e.index == index));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Advance is cyclically invertible over an unchanged rendered set
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn advance_next_then_previous_is_identity(
        records in records_strategy(),
        query in "[a-z]{1,3}",
    ) {
        let store = synced_store(&records);
        let rendered = filter(&query, &store);
        prop_assume!(!rendered.is_empty());

        let mut cursor = SelectionCursor::new();
        cursor.reconcile(&rendered);
        let before = cursor.selected();

        cursor.advance(Direction::Next, &rendered);
        cursor.advance(Direction::Previous, &rendered);
        prop_assert_eq!(cursor.selected(), before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Candidates preserve relative source order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn candidates_preserve_source_order(
        records in records_strategy(),
        query in "[a-z]{1,3}",
    ) {
        let store = synced_store(&records);
        let candidates = filter(&query, &store);
        for pair in candidates.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
    }
}
