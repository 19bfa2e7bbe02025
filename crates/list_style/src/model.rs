//! Typed style model.
//!
//! A [`StyleRule`] produced by the parser always has at least one class.
//! Rules decoded from persisted descriptors may carry any tag; consumers that
//! only handle list elements filter on [`StyleRule::is_list_tag`].

use crate::element::ElementDescriptor;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Element names accepted by the selector grammar.
pub const SUPPORTED_TAGS: [&str; 2] = ["ol", "ul"];

/// One list style preset: an element, its classes and a display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleRule {
    /// Element name (`ol` or `ul` for rules from the text format).
    pub tag: String,
    /// CSS classes in declaration order. Never empty.
    pub classes: Vec<String>,
    /// Trimmed, non-empty label shown to editors.
    pub label: String,
}

impl StyleRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new<I, S>(tag: impl Into<String>, classes: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag: tag.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            label: label.into(),
        }
    }

    /// Decomposes a canonical descriptor into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElement`] if the descriptor has no class values.
    pub fn from_element(element: &ElementDescriptor, label: impl Into<String>) -> Result<Self> {
        let classes = element.classes();
        if classes.is_empty() {
            return Err(Error::invalid_element(
                element.to_string(),
                "expected at least one class value",
            ));
        }
        Ok(Self::new(element.tag.clone(), classes.iter().cloned(), label))
    }

    /// Canonical descriptor, e.g. `<ul class="btn large">`.
    #[must_use]
    pub fn element(&self) -> ElementDescriptor {
        ElementDescriptor::with_classes(self.tag.clone(), self.classes.iter().cloned())
    }

    /// Selector in the text format, e.g. `ul.btn.large`.
    #[must_use]
    pub fn selector(&self) -> String {
        let mut selector = self.tag.clone();
        for class in &self.classes {
            selector.push('.');
            selector.push_str(class);
        }
        selector
    }

    /// Classes joined by single spaces, as used in a `class` attribute.
    #[must_use]
    pub fn class_value(&self) -> String {
        self.classes.join(" ")
    }

    /// Returns true for `ol` and `ul` rules.
    #[must_use]
    pub fn is_list_tag(&self) -> bool {
        SUPPORTED_TAGS.contains(&self.tag.as_str())
    }
}
