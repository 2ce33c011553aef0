#![forbid(unsafe_code)]

//! The selection cursor: which candidate is highlighted.

use crate::entry::Entry;

/// Navigation direction for cyclic advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the next rendered item (Down).
    Next,
    /// Move to the previous rendered item (Up).
    Previous,
}

/// Tracks the highlighted candidate by its stable source index.
///
/// The cursor survives candidate recomputation when the referenced index is
/// still present; otherwise it snaps to the first candidate, or to nothing
/// when the set is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    selected: Option<usize>,
}

impl SelectionCursor {
    /// Create a cursor with nothing highlighted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted entry's source index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Drop the highlight.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Point the cursor at an entry by source index.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Re-anchor the cursor after the candidate set changed.
    ///
    /// Keeps the current index when it still appears in `candidates`;
    /// otherwise selects the first candidate, or `None` when empty. After
    /// this call the highlight is always a member of the visible set or
    /// absent.
    pub fn reconcile(&mut self, candidates: &[Entry]) {
        let still_present = self
            .selected
            .is_some_and(|index| candidates.iter().any(|e| e.index == index));
        if !still_present {
            self.selected = candidates.first().map(|e| e.index);
        }
    }

    /// Cyclic move over the currently rendered items.
    ///
    /// Navigation is positional over `rendered` (0-based, independent of
    /// `Entry::index`): past the last item wraps to the first and vice
    /// versa. From no highlight, `Next` selects the first rendered item and
    /// `Previous` the last. A no-op when nothing is rendered.
    pub fn advance(&mut self, direction: Direction, rendered: &[Entry]) {
        if rendered.is_empty() {
            return;
        }
        let current = self
            .selected
            .and_then(|index| rendered.iter().position(|e| e.index == index));
        let position = match (current, direction) {
            (Some(p), Direction::Next) => (p + 1) % rendered.len(),
            (Some(p), Direction::Previous) => (p + rendered.len() - 1) % rendered.len(),
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => rendered.len() - 1,
        };
        self.selected = Some(rendered[position].index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(indices: &[usize]) -> Vec<Entry> {
        indices
            .iter()
            .map(|&index| Entry {
                value: format!("v{index}"),
                label: format!("label {index}"),
                index,
            })
            .collect()
    }

    #[test]
    fn reconcile_keeps_surviving_index() {
        let mut cursor = SelectionCursor::new();
        cursor.reconcile(&entries(&[0, 2, 5]));
        assert_eq!(cursor.selected(), Some(0));

        cursor.advance(Direction::Next, &entries(&[0, 2, 5]));
        assert_eq!(cursor.selected(), Some(2));

        // Index 2 survives the new set, so it is kept.
        cursor.reconcile(&entries(&[2, 7]));
        assert_eq!(cursor.selected(), Some(2));
    }

    #[test]
    fn reconcile_resets_to_first_when_gone() {
        let mut cursor = SelectionCursor::new();
        cursor.reconcile(&entries(&[3, 4]));
        assert_eq!(cursor.selected(), Some(3));

        cursor.reconcile(&entries(&[8, 9]));
        assert_eq!(cursor.selected(), Some(8));
    }

    #[test]
    fn reconcile_empty_set_clears() {
        let mut cursor = SelectionCursor::new();
        cursor.reconcile(&entries(&[1]));
        cursor.reconcile(&[]);
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn advance_wraps_both_ways() {
        // Rendered items [X, Y, Z] at source indices 10, 20, 30; cursor at Y.
        let rendered = entries(&[10, 20, 30]);
        let mut cursor = SelectionCursor::new();
        cursor.reconcile(&rendered);
        cursor.advance(Direction::Next, &rendered);
        assert_eq!(cursor.selected(), Some(20));

        cursor.advance(Direction::Next, &rendered);
        assert_eq!(cursor.selected(), Some(30));

        // Past the last wraps to the first.
        cursor.advance(Direction::Next, &rendered);
        assert_eq!(cursor.selected(), Some(10));

        // Before the first wraps to the last.
        cursor.advance(Direction::Previous, &rendered);
        assert_eq!(cursor.selected(), Some(30));
    }

    #[test]
    fn advance_from_none_selects_ends() {
        let rendered = entries(&[1, 2, 3]);

        let mut cursor = SelectionCursor::new();
        cursor.advance(Direction::Next, &rendered);
        assert_eq!(cursor.selected(), Some(1));

        let mut cursor = SelectionCursor::new();
        cursor.advance(Direction::Previous, &rendered);
        assert_eq!(cursor.selected(), Some(3));
    }

    #[test]
    fn advance_on_empty_rendered_is_noop() {
        let mut cursor = SelectionCursor::new();
        cursor.advance(Direction::Next, &[]);
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn advance_positional_not_index_based() {
        // Source indices with gaps: navigation must step by rendered
        // position, not by index arithmetic.
        let rendered = entries(&[0, 7, 42]);
        let mut cursor = SelectionCursor::new();
        cursor.reconcile(&rendered);
        cursor.advance(Direction::Next, &rendered);
        assert_eq!(cursor.selected(), Some(7));
        cursor.advance(Direction::Next, &rendered);
        assert_eq!(cursor.selected(), Some(42));
    }
}
