#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the events the interaction controller consumes. All
//! events derive `Clone`, `PartialEq`, and `Eq` for use in tests and pattern
//! matching.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the host cannot distinguish
//! - `Modifiers` use bitflags for easy combination
//! - Pointer events target a rendered menu row by position, not a coordinate;
//!   hit testing is the host's job

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer event on the suggestion menu.
    Pointer(PointerEvent),

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost (blur).
    Focus(bool),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }
}

/// Key codes for keyboard events.
///
/// Only the keys the controller reacts to are modeled; everything else is
/// the host text field's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,
}

/// The kind of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    /// Key was pressed.
    #[default]
    Press,

    /// Key is being held (auto-repeat).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event on the suggestion menu.
///
/// `Down` covers both mousedown and touchstart: in either case the press
/// arrives before the focus loss it causes, and must suppress the blur-close
/// so the following `Click` can still read its target row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,

    /// Rendered menu row the pointer hit (0-based position), if any.
    pub row: Option<usize>,
}

impl PointerEvent {
    /// A press (mousedown/touchstart) on the menu.
    #[must_use]
    pub const fn down() -> Self {
        Self {
            kind: PointerEventKind::Down,
            row: None,
        }
    }

    /// A completed click on the given rendered row.
    #[must_use]
    pub const fn click(row: usize) -> Self {
        Self {
            kind: PointerEventKind::Click,
            row: Some(row),
        }
    }
}

/// The kind of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Mousedown or touchstart on the menu.
    Down,

    /// A completed click/tap.
    Click,
}
