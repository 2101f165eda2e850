//! Presentation-attribute access by element id.
//!
//! The toggles never keep their own copy of an element's state. They read and
//! write it through [`Dom`], which the browser backend implements over
//! `web_sys::Document` and [`MemoryDom`] implements over a plain map for
//! native hosts and tests.
//!
//! Every method that names an element fails with
//! [`ToggleError::ElementNotFound`] when no element carries that id.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::collections::{BTreeSet, HashMap};

use crate::error::ToggleError;

/// Read and write the presentation attributes the toggles depend on.
pub trait Dom {
    /// Whether an element with `id` exists.
    fn contains(&self, id: &str) -> bool;

    /// Whether the element's class list contains `class`.
    fn has_class(&self, id: &str, class: &str) -> Result<bool, ToggleError>;

    /// Add `class` when `present` is true, remove it otherwise.
    fn set_class(&mut self, id: &str, class: &str, present: bool) -> Result<(), ToggleError>;

    /// Replace the element's text content.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), ToggleError>;

    /// The element's inline `display` value; empty when unset.
    fn display(&self, id: &str) -> Result<String, ToggleError>;

    /// Set the element's inline `display` value.
    fn set_display(&mut self, id: &str, value: &str) -> Result<(), ToggleError>;
}

/// Presentation attributes of one in-memory element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub classes: BTreeSet<String>,
    pub text: String,
    pub display: String,
}

impl ElementState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_owned());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        text.clone_into(&mut self.text);
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: &str) -> Self {
        display.clone_into(&mut self.display);
        self
    }
}

/// A document held in memory, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    elements: HashMap<String, ElementState>,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the element with `id`.
    pub fn insert(&mut self, id: &str, element: ElementState) {
        self.elements.insert(id.to_owned(), element);
    }

    /// Remove the element with `id`, returning its last state.
    pub fn remove(&mut self, id: &str) -> Option<ElementState> {
        self.elements.remove(id)
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    fn get(&self, id: &str) -> Result<&ElementState, ToggleError> {
        self.elements.get(id).ok_or_else(|| ToggleError::not_found(id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ElementState, ToggleError> {
        self.elements.get_mut(id).ok_or_else(|| ToggleError::not_found(id))
    }
}

impl Dom for MemoryDom {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn has_class(&self, id: &str, class: &str) -> Result<bool, ToggleError> {
        Ok(self.get(id)?.classes.contains(class))
    }

    fn set_class(&mut self, id: &str, class: &str, present: bool) -> Result<(), ToggleError> {
        let element = self.get_mut(id)?;
        // Same rule as DOMTokenList: a token is non-empty and has no whitespace.
        if class.is_empty() || class.contains(char::is_whitespace) {
            return Err(ToggleError::Host(format!("invalid class token `{class}`")));
        }
        if present {
            element.classes.insert(class.to_owned());
        } else {
            element.classes.remove(class);
        }
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), ToggleError> {
        text.clone_into(&mut self.get_mut(id)?.text);
        Ok(())
    }

    fn display(&self, id: &str) -> Result<String, ToggleError> {
        Ok(self.get(id)?.display.clone())
    }

    fn set_display(&mut self, id: &str, value: &str) -> Result<(), ToggleError> {
        value.clone_into(&mut self.get_mut(id)?.display);
        Ok(())
    }
}
