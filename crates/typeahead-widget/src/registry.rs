#![forbid(unsafe_code)]

//! Widget tag registration.
//!
//! Re-expression of the element-definition step: a host registers the widget
//! under a tag name once; re-registering the same tag fails. The failure is
//! caught and logged by [`WidgetRegistry::define_or_log`] rather than
//! propagated, and never affects widgets already instantiated.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

/// Registration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefineError {
    /// The tag is already registered.
    Duplicate(String),
}

impl fmt::Display for DefineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate(tag) => write!(f, "tag {tag:?} is already defined"),
        }
    }
}

impl Error for DefineError {}

/// Registry of defined widget tag names.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    tags: BTreeSet<String>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `tag`. Fails if it is already registered.
    pub fn define(&mut self, tag: &str) -> Result<(), DefineError> {
        if !self.tags.insert(tag.to_string()) {
            return Err(DefineError::Duplicate(tag.to_string()));
        }
        Ok(())
    }

    /// Register `tag`, logging instead of propagating a duplicate. Returns
    /// whether the registration took effect.
    pub fn define_or_log(&mut self, tag: &str) -> bool {
        match self.define(tag) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "widget tag could not be (re)defined");
                false
            }
        }
    }

    /// Whether `tag` is registered.
    #[must_use]
    pub fn is_defined(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_once_succeeds() {
        let mut registry = WidgetRegistry::new();
        assert!(registry.define("autocomplete-input").is_ok());
        assert!(registry.is_defined("autocomplete-input"));
    }

    #[test]
    fn duplicate_define_errors() {
        let mut registry = WidgetRegistry::new();
        registry.define("autocomplete-input").unwrap();
        assert_eq!(
            registry.define("autocomplete-input"),
            Err(DefineError::Duplicate("autocomplete-input".into()))
        );
    }

    #[test]
    fn define_or_log_swallows_duplicate() {
        let mut registry = WidgetRegistry::new();
        assert!(registry.define_or_log("autocomplete-input"));
        assert!(!registry.define_or_log("autocomplete-input"));
        // Still defined; the failed redefinition changed nothing.
        assert!(registry.is_defined("autocomplete-input"));
    }

    #[test]
    fn define_or_log_warns_under_a_live_subscriber() {
        // The warn path must not panic or propagate with a subscriber installed.
        tracing::subscriber::with_default(tracing_subscriber::registry(), || {
            let mut registry = WidgetRegistry::new();
            registry.define("autocomplete-input").unwrap();
            assert!(!registry.define_or_log("autocomplete-input"));
        });
    }

    #[test]
    fn duplicate_error_names_the_tag() {
        let err = DefineError::Duplicate("x-combo".into());
        assert!(err.to_string().contains("x-combo"));
    }
}
