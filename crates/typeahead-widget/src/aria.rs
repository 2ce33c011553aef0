#![forbid(unsafe_code)]

//! Accessible widget state: combobox/listbox roles, expanded flag, and the
//! active-descendant reference.
//!
//! Element ids are derived from a per-instance identifier allocated from a
//! process-scoped counter, so two widgets never share listbox or option ids.

use std::sync::atomic::{AtomicU64, Ordering};

/// Role of the widget container.
pub const ROLE_COMBOBOX: &str = "combobox";
/// Role of the suggestion menu.
pub const ROLE_LISTBOX: &str = "listbox";
/// Role of an individual suggestion row.
pub const ROLE_OPTION: &str = "option";

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(0);

/// Allocate a fresh per-instance identifier.
pub(crate) fn next_instance_id() -> u64 {
    NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Accessible id of a widget instance's listbox element.
#[must_use]
pub fn listbox_id(instance: u64) -> String {
    format!("listbox-{instance}")
}

/// Accessible id of a suggestion row, keyed by its stable source index.
#[must_use]
pub fn item_id(instance: u64, entry_index: usize) -> String {
    format!("list-{instance}-item-{entry_index}")
}

/// Accessibility state mirrored by the host's render layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaState {
    instance: u64,
    expanded: bool,
    active_descendant: Option<String>,
}

impl AriaState {
    pub(crate) fn new(instance: u64) -> Self {
        Self {
            instance,
            expanded: false,
            active_descendant: None,
        }
    }

    /// Whether the menu is expanded.
    #[must_use]
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// The currently highlighted row's element id, if any.
    #[must_use]
    pub fn active_descendant(&self) -> Option<&str> {
        self.active_descendant.as_deref()
    }

    /// The listbox element id for this widget instance.
    #[must_use]
    pub fn listbox_id(&self) -> String {
        listbox_id(self.instance)
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Point the active-descendant reference at an entry, or clear it.
    pub(crate) fn set_active(&mut self, entry_index: Option<usize>) {
        self.active_descendant = entry_index.map(|index| item_id(self.instance, index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_get_distinct_ids() {
        let a = next_instance_id();
        let b = next_instance_id();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_embed_instance_and_index() {
        assert_eq!(listbox_id(7), "listbox-7");
        assert_eq!(item_id(7, 42), "list-7-item-42");
    }

    #[test]
    fn active_descendant_tracks_entry() {
        let mut aria = AriaState::new(3);
        assert_eq!(aria.active_descendant(), None);
        aria.set_active(Some(5));
        assert_eq!(aria.active_descendant(), Some("list-3-item-5"));
        aria.set_active(None);
        assert_eq!(aria.active_descendant(), None);
    }
}
