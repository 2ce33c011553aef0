#![forbid(unsafe_code)]

//! Headless autocomplete input widget.
//!
//! A drop-in replacement for native list-input controls whose behavior is
//! inconsistent across hosts. The widget is a state machine: the host feeds
//! it events and a clock, and renders from its [`menu`](input::AutocompleteInput::menu)
//! and [`aria`](input::AutocompleteInput::aria) view models.

pub mod aria;
pub mod input;
pub mod menu;
pub mod registry;

pub use aria::{AriaState, ROLE_COMBOBOX, ROLE_LISTBOX, ROLE_OPTION};
pub use input::{AutocompleteInput, DEBOUNCE_DELAY, MenuState, Notification};
pub use menu::{Menu, MenuRow, Placement, ViewportMetrics};
pub use registry::{DefineError, WidgetRegistry};
