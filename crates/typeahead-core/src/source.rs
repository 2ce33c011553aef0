#![forbid(unsafe_code)]

//! The external option list and its change subscription registry.
//!
//! An [`OptionList`] is the widget's external collaborator: an ordered list
//! of raw `(value, label)` records owned by the host. Structural changes and
//! in-place label edits notify every subscriber with a single coalesced
//! [`SourceChanged`] signal (no per-field diffs); observers react by fully
//! resyncing, never by patching incrementally.
//!
//! Subscriptions follow the subscribe/unsubscribe-by-handle contract:
//! attaching an observer to a new list must first drop the old registration,
//! so there is never a dangling observation. Delivery uses an `mpsc` channel
//! per subscriber; the observer drains its receiver at its own pace.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, channel};

/// A raw option record as exposed by the host.
///
/// The label is markup-capable display text and is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionRecord {
    /// The selectable value. Records with an empty value are not selectable
    /// and are skipped when the entry store syncs.
    pub value: String,
    /// Display text.
    pub label: String,
}

impl OptionRecord {
    /// Create a new option record.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Coalesced "something changed" signal. Carries no diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceChanged;

/// Identifies a live subscription for later removal.
pub type SubscriptionHandle = u64;

/// An ordered list of option records with change observation.
#[derive(Debug, Default)]
pub struct OptionList {
    records: Vec<OptionRecord>,
    subscribers: Vec<(SubscriptionHandle, Sender<SourceChanged>)>,
    next_handle: SubscriptionHandle,
}

impl OptionList {
    /// Create an empty option list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from existing records.
    #[must_use]
    pub fn from_records(records: Vec<OptionRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// The current records, in source order.
    #[must_use]
    pub fn records(&self) -> &[OptionRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // --- Mutations (each sends one coalesced change signal) ---

    /// Append a record.
    pub fn push(&mut self, record: OptionRecord) {
        self.records.push(record);
        self.notify();
    }

    /// Insert a record at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn insert(&mut self, at: usize, record: OptionRecord) {
        self.records.insert(at, record);
        self.notify();
    }

    /// Remove and return the record at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds.
    pub fn remove(&mut self, at: usize) -> OptionRecord {
        let record = self.records.remove(at);
        self.notify();
        record
    }

    /// Edit a record's label in place.
    ///
    /// # Panics
    ///
    /// Panics if `at` is out of bounds.
    pub fn set_label(&mut self, at: usize, label: impl Into<String>) {
        self.records[at].label = label.into();
        self.notify();
    }

    /// Replace all records wholesale.
    pub fn set_records(&mut self, records: Vec<OptionRecord>) {
        self.records = records;
        self.notify();
    }

    // --- Subscription ---

    /// Register an observer. Returns the handle to unsubscribe with and the
    /// receiver the change signals arrive on.
    pub fn subscribe(&mut self) -> (SubscriptionHandle, Receiver<SourceChanged>) {
        let handle = self.next_handle;
        self.next_handle += 1;
        let (tx, rx) = channel();
        self.subscribers.push((handle, tx));
        (handle, rx)
    }

    /// Remove an observer. Returns `true` if the handle was registered.
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(h, _)| *h != handle);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Send one change signal to every subscriber, pruning any whose
    /// receiver has been dropped.
    fn notify(&mut self) {
        self.subscribers
            .retain(|(_, tx)| tx.send(SourceChanged).is_ok());
    }
}

/// Shared handle to an option list.
///
/// The whole system is single-threaded and event-driven; `Rc<RefCell<_>>`
/// is the ownership model, not a concurrency primitive.
pub type SharedOptionList = Rc<RefCell<OptionList>>;

/// Wrap an option list for sharing between the host and widgets.
#[must_use]
pub fn shared(list: OptionList) -> SharedOptionList {
    Rc::new(RefCell::new(list))
}
