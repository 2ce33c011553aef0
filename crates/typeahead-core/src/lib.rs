#![forbid(unsafe_code)]

//! Core data model and algorithms for the typeahead autocomplete widget.
//!
//! This crate is headless: it knows nothing about rendering, focus, or the
//! hosting surface. It provides the pieces the interaction controller in
//! `typeahead-widget` orchestrates:
//!
//! - [`event`]: canonical input events (keys, pointer activation, focus)
//! - [`source`]: the external option list with a coalesced change
//!   subscription registry
//! - [`entry`]: the entry store synced wholesale from a source list
//! - [`matcher`]: candidate computation (case-insensitive literal substring)
//! - [`cursor`]: the selection cursor with reconcile + cyclic advance
//! - [`debounce`]: the single-slot deferred task used to coalesce rapid edits

pub mod cursor;
pub mod debounce;
pub mod entry;
pub mod event;
pub mod matcher;
pub mod source;

pub use cursor::{Direction, SelectionCursor};
pub use debounce::DebounceSlot;
pub use entry::{Entry, EntryStore};
pub use event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, PointerEventKind,
};
pub use matcher::{MAX_CANDIDATES, filter};
pub use source::{
    OptionList, OptionRecord, SharedOptionList, SourceChanged, SubscriptionHandle, shared,
};
