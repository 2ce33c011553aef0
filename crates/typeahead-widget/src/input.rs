#![forbid(unsafe_code)]

//! The autocomplete input widget: the interaction state machine tying the
//! entry store, matcher, selection cursor, and menu together.
//!
//! # Usage
//!
//! ```ignore
//! let source = typeahead_core::shared(OptionList::from_records(records));
//! let mut input = AutocompleteInput::new();
//! input.attach(&source);
//!
//! // In your event loop:
//! input.handle_event(&event, Instant::now());
//! if let Some(deadline) = input.next_deadline() {
//!     // wake up at `deadline` and call:
//!     input.tick(Instant::now());
//! }
//! for note in input.take_notifications() {
//!     match note {
//!         Notification::Change { value } => { /* committed value changed */ }
//!         Notification::Input { value } => { /* interactive commit */ }
//!     }
//! }
//! // Render from input.menu() and input.aria().
//! ```

use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use typeahead_core::{
    DebounceSlot, Direction, Entry, EntryStore, Event, KeyCode, KeyEvent, KeyEventKind,
    PointerEvent, PointerEventKind, SelectionCursor, SharedOptionList, SourceChanged,
    SubscriptionHandle, filter,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::aria::{self, AriaState};
use crate::menu::{Menu, ViewportMetrics};

/// Quiet period between the last edit and its filter evaluation.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(150);

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Observable effect emitted by the widget, drained by the host.
///
/// `Change` fires on every commit, programmatic or interactive; `Input`
/// fires only on interactive commits (Enter or pointer activation), so
/// listeners can tell the two apart the way native form-control events do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The committed value changed.
    Change {
        /// The new committed value.
        value: String,
    },
    /// The user committed interactively.
    Input {
        /// The committed value.
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Menu state
// ---------------------------------------------------------------------------

/// The interaction controller's two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Menu hidden, no candidates rendered.
    #[default]
    Closed,
    /// Menu visible with a non-empty candidate set.
    Open,
}

// ---------------------------------------------------------------------------
// Source attachment
// ---------------------------------------------------------------------------

/// A live association to an option list: the shared list, the subscription
/// handle for clean detach, and the channel the change signals arrive on.
#[derive(Debug)]
struct Attachment {
    list: SharedOptionList,
    handle: SubscriptionHandle,
    changes: Receiver<SourceChanged>,
}

// ---------------------------------------------------------------------------
// Autocomplete input widget
// ---------------------------------------------------------------------------

/// A text input with a filtered suggestion menu.
///
/// Headless: the host delivers events and renders from [`menu`](Self::menu)
/// and [`aria`](Self::aria). Arrow/Enter/Escape/pointer/blur handling is
/// synchronous; text edits are debounced, and the host drives the deferred
/// evaluation by calling [`tick`](Self::tick) once
/// [`next_deadline`](Self::next_deadline) has passed.
///
/// # Invariants
///
/// 1. The menu is `Open` only while the candidate set is non-empty.
/// 2. The highlight is always a member of the rendered rows or absent.
/// 3. At most one filter evaluation is ever pending.
/// 4. At most one source list is ever observed.
#[derive(Debug)]
pub struct AutocompleteInput {
    instance: u64,
    /// Raw text being typed; may be a partial query matching nothing.
    query: String,
    /// Committed widget value, distinct from the raw text.
    value: String,
    state: MenuState,
    store: EntryStore,
    cursor: SelectionCursor,
    candidates: Vec<Entry>,
    menu: Menu,
    aria: AriaState,
    debounce: DebounceSlot,
    /// One-shot flag: a pointer press on the menu suppresses the next blur,
    /// so the click that follows can still read its target row.
    cancel_blur: bool,
    metrics: ViewportMetrics,
    attachment: Option<Attachment>,
    notifications: VecDeque<Notification>,
}

impl Default for AutocompleteInput {
    fn default() -> Self {
        Self::new()
    }
}

impl AutocompleteInput {
    /// Create a detached widget. Until [`attach`](Self::attach) is called the
    /// entry store stays empty, every filter yields nothing, and the menu
    /// never opens; that is a valid disabled-like state, not an error.
    #[must_use]
    pub fn new() -> Self {
        let instance = aria::next_instance_id();
        Self {
            instance,
            query: String::new(),
            value: String::new(),
            state: MenuState::Closed,
            store: EntryStore::new(),
            cursor: SelectionCursor::new(),
            candidates: Vec::new(),
            menu: Menu::default(),
            aria: AriaState::new(instance),
            debounce: DebounceSlot::new(DEBOUNCE_DELAY),
            cancel_blur: false,
            metrics: ViewportMetrics::default(),
            attachment: None,
            notifications: VecDeque::new(),
        }
    }

    /// Set viewport metrics (builder).
    #[must_use]
    pub fn with_metrics(mut self, metrics: ViewportMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the debounce quiet period (builder).
    #[must_use]
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce = DebounceSlot::new(delay);
        self
    }

    /// Update viewport metrics; takes effect on the next menu (re)render.
    pub fn set_metrics(&mut self, metrics: ViewportMetrics) {
        self.metrics = metrics;
    }

    // --- Source association ---

    /// Associate the widget with an option list.
    ///
    /// Any previous association is fully dropped first (unsubscribe, store
    /// discarded), then the new list is subscribed and synced immediately.
    pub fn attach(&mut self, list: &SharedOptionList) {
        self.detach();
        let (handle, changes) = list.borrow_mut().subscribe();
        self.store.sync(list.borrow().records());
        tracing::debug!(
            instance = self.instance,
            entries = self.store.len(),
            "attached to option source"
        );
        self.attachment = Some(Attachment {
            list: Rc::clone(list),
            handle,
            changes,
        });
    }

    /// Drop the current source association, if any. The entry store is
    /// discarded; filtering yields nothing until a new source is attached.
    pub fn detach(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            attachment.list.borrow_mut().unsubscribe(attachment.handle);
            self.store.clear();
            tracing::debug!(instance = self.instance, "detached from option source");
        }
    }

    /// Whether the widget is associated with a source list.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Drain pending source-change signals, resyncing the store once if any
    /// arrived. Runs regardless of menu state and never opens or closes the
    /// menu; only the data available to the next filter changes.
    ///
    /// Called automatically at the top of [`handle_event`](Self::handle_event)
    /// and [`tick`](Self::tick).
    pub fn poll_source(&mut self) -> bool {
        let Some(attachment) = &self.attachment else {
            return false;
        };
        if attachment.changes.try_iter().count() == 0 {
            return false;
        }
        self.store.sync(attachment.list.borrow().records());
        tracing::trace!(
            instance = self.instance,
            entries = self.store.len(),
            "resynced entry store"
        );
        true
    }

    // --- Value access ---

    /// The committed widget value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The raw text currently being typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set the committed value programmatically.
    ///
    /// If it differs from the current value, the visible text updates and a
    /// `Change` notification is emitted exactly as a user commit would; the
    /// menu does not open and no `Input` notification fires.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.value {
            return;
        }
        self.query = value.clone();
        self.value = value.clone();
        self.notifications.push_back(Notification::Change { value });
    }

    // --- Widget state access ---

    /// Current menu state.
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// The rendered menu view model.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Accessibility state.
    #[must_use]
    pub fn aria(&self) -> &AriaState {
        &self.aria
    }

    /// The highlighted entry's stable source index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.cursor.selected()
    }

    /// When the pending filter evaluation is due, if one is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Drain emitted notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    // --- Event handling ---

    /// Handle an input event at time `now`.
    ///
    /// Returns `true` if widget state changed. Arrow, Enter, Escape,
    /// pointer, and blur handling is synchronous; character and backspace
    /// edits only schedule the debounced filter evaluation.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> bool {
        let synced = self.poll_source();
        let handled = match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                self.handle_key(key, now)
            }
            Event::Key(_) => false,
            Event::Pointer(pointer) => self.handle_pointer(pointer),
            Event::Focus(false) => self.handle_blur(),
            Event::Focus(true) => false,
        };
        synced || handled
    }

    /// Fire the debounced filter evaluation if its deadline has passed.
    ///
    /// Returns `true` if an evaluation ran or the store resynced.
    pub fn tick(&mut self, now: Instant) -> bool {
        let synced = self.poll_source();
        if self.debounce.fire_if_due(now) {
            self.evaluate_filter();
            return true;
        }
        synced
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.ctrl() => {
                self.query.push(c);
                self.debounce.schedule(now);
                true
            }
            KeyCode::Char(_) => false,
            KeyCode::Backspace => {
                let Some((offset, _)) = self.query.grapheme_indices(true).next_back() else {
                    return false;
                };
                self.query.truncate(offset);
                self.debounce.schedule(now);
                true
            }
            KeyCode::Down => self.navigate(Direction::Next),
            KeyCode::Up => self.navigate(Direction::Previous),
            KeyCode::Enter => {
                if self.state != MenuState::Open {
                    return false;
                }
                let Some(index) = self.cursor.selected() else {
                    return false;
                };
                let Some(entry) = self.candidates.iter().find(|e| e.index == index).cloned()
                else {
                    return false;
                };
                self.commit(entry);
                true
            }
            KeyCode::Escape => {
                self.query.clear();
                self.value.clear();
                self.debounce.cancel();
                self.close_menu();
                true
            }
        }
    }

    /// Arrow navigation: synchronous, never debounced, only meaningful while
    /// open. The committed value is untouched.
    fn navigate(&mut self, direction: Direction) -> bool {
        if self.state != MenuState::Open {
            return false;
        }
        self.cursor.advance(direction, &self.candidates);
        self.menu.set_highlight(self.cursor.selected());
        self.aria.set_active(self.cursor.selected());
        true
    }

    fn handle_pointer(&mut self, pointer: &PointerEvent) -> bool {
        match pointer.kind {
            PointerEventKind::Down => {
                // Pointer-down arrives before the blur it causes; arm the
                // one-shot suppression so the click can still land.
                self.cancel_blur = true;
                false
            }
            PointerEventKind::Click => {
                if self.state != MenuState::Open {
                    return false;
                }
                let Some(entry) = pointer.row.and_then(|row| self.candidates.get(row)).cloned()
                else {
                    return false;
                };
                self.cursor.select(entry.index);
                self.commit(entry);
                true
            }
        }
    }

    fn handle_blur(&mut self) -> bool {
        if self.cancel_blur {
            self.cancel_blur = false;
            return false;
        }
        self.debounce.cancel();
        if self.state == MenuState::Open {
            self.close_menu();
            return true;
        }
        false
    }

    // --- State transitions ---

    /// Run the matcher against the current text and render the result.
    fn evaluate_filter(&mut self) {
        let candidates = filter(&self.query, &self.store);
        tracing::trace!(
            instance = self.instance,
            query = %self.query,
            candidates = candidates.len(),
            "filter evaluated"
        );
        if candidates.is_empty() {
            self.candidates.clear();
            self.close_menu();
            return;
        }
        self.cursor.reconcile(&candidates);
        self.candidates = candidates;
        self.menu = Menu::rebuild(
            &self.candidates,
            self.cursor.selected(),
            self.instance,
            self.metrics,
        );
        self.aria.set_expanded(true);
        self.aria.set_active(self.cursor.selected());
        self.state = MenuState::Open;
    }

    /// Commit an entry interactively: its label becomes the widget value,
    /// the menu closes, and `Change` + `Input` notifications are emitted.
    fn commit(&mut self, entry: Entry) {
        tracing::debug!(
            instance = self.instance,
            index = entry.index,
            label = %entry.label,
            "committed entry"
        );
        self.query = entry.label.clone();
        self.value = entry.label.clone();
        self.debounce.cancel();
        self.notifications.push_back(Notification::Change {
            value: self.value.clone(),
        });
        self.notifications.push_back(Notification::Input {
            value: self.value.clone(),
        });
        self.close_menu();
    }

    fn close_menu(&mut self) {
        self.candidates.clear();
        self.menu.clear();
        self.state = MenuState::Closed;
        self.aria.set_expanded(false);
        self.aria.set_active(None);
        self.cancel_blur = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
