//! Canonical element descriptors.
//!
//! A descriptor names one HTML element and the attributes it may carry:
//!
//! ```text
//! <ul class="btn large-button">   class restricted to the listed values
//! <ol class>                      class allowed with any value
//! ```
//!
//! This is the persisted form of a style's markup target and the unit of the
//! allowed-elements view.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name of the attribute that carries CSS classes.
pub const CLASS_ATTRIBUTE: &str = "class";

/// Value constraint of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeValue {
    /// Any value is allowed (`<ol class>`).
    Any,
    /// Space-separated value keys, in order (`<ul class="a b">`).
    Values(Vec<String>),
}

/// A normalized element: tag name plus ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementDescriptor {
    /// Element name, e.g. `ul`.
    pub tag: String,
    /// Attributes in declaration order.
    pub attributes: Vec<(String, AttributeValue)>,
}

impl ElementDescriptor {
    /// Creates a descriptor with no attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// Creates `<tag class="c1 c2 ...">` with classes kept in the given order.
    #[must_use]
    pub fn with_classes<I, S>(tag: impl Into<String>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tag).with_attribute(
            CLASS_ATTRIBUTE,
            AttributeValue::Values(classes.into_iter().map(Into::into).collect()),
        )
    }

    /// Creates `<tag class>`: the class attribute with any value.
    #[must_use]
    pub fn with_any_class(tag: impl Into<String>) -> Self {
        Self::new(tag).with_attribute(CLASS_ATTRIBUTE, AttributeValue::Any)
    }

    /// Adds an attribute, replacing an earlier one with the same name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        let name = name.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Ordered class keys. Empty when the class attribute is absent or
    /// unrestricted.
    pub fn classes(&self) -> &[String] {
        match self.attribute(CLASS_ATTRIBUTE) {
            Some(AttributeValue::Values(values)) => values,
            _ => &[],
        }
    }
}

impl fmt::Display for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = &self.tag;
        write!(f, "<{tag}")?;
        for (name, value) in &self.attributes {
            match value {
                AttributeValue::Any => write!(f, " {name}")?,
                AttributeValue::Values(values) => {
                    let values = values.join(" ");
                    write!(f, " {name}=\"{values}\"")?;
                }
            }
        }
        f.write_str(">")
    }
}

impl FromStr for ElementDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| Error::invalid_element(s, "expected '<tag ...>'"))?;

        let tag_len = inner
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(inner.len());
        let tag = &inner[..tag_len];
        if !tag.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(Error::invalid_element(s, "missing tag name"));
        }

        let mut element = Self::new(tag);
        let mut rest = &inner[tag_len..];

        loop {
            let trimmed = rest.trim_start_matches(' ');
            if trimmed.is_empty() {
                break;
            }
            if trimmed.len() == rest.len() {
                return Err(Error::invalid_element(
                    s,
                    "attributes must be separated by spaces",
                ));
            }

            let name_len = trimmed
                .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':')))
                .unwrap_or(trimmed.len());
            if name_len == 0 {
                return Err(Error::invalid_element(s, "expected attribute name"));
            }
            let name = &trimmed[..name_len];
            if element.attribute(name).is_some() {
                return Err(Error::invalid_element(
                    s,
                    format!("duplicate attribute '{name}'"),
                ));
            }

            let after_name = &trimmed[name_len..];
            if let Some(quoted) = after_name.strip_prefix("=\"") {
                let end = quoted
                    .find('"')
                    .ok_or_else(|| Error::invalid_element(s, "unterminated attribute value"))?;
                let values = quoted[..end]
                    .split(' ')
                    .filter(|v| !v.is_empty())
                    .map(ToString::to_string)
                    .collect();
                element.attributes.push((name.to_string(), AttributeValue::Values(values)));
                rest = &quoted[end + 1..];
            } else if after_name.starts_with('=') {
                return Err(Error::invalid_element(s, "attribute values must be quoted"));
            } else {
                element.attributes.push((name.to_string(), AttributeValue::Any));
                rest = after_name;
            }
        }

        Ok(element)
    }
}

impl Serialize for ElementDescriptor {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElementDescriptor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_restricted_classes() {
        let element = ElementDescriptor::with_classes("ul", ["btn", "large-button"]);
        assert_eq!(element.to_string(), r#"<ul class="btn large-button">"#);
    }

    #[test]
    fn display_any_class() {
        assert_eq!(ElementDescriptor::with_any_class("ol").to_string(), "<ol class>");
        assert_eq!(ElementDescriptor::new("li").to_string(), "<li>");
    }

    #[test]
    fn parse_restricted_classes() {
        let element: ElementDescriptor = r#"<ul class="btn large-button">"#.parse().unwrap();
        assert_eq!(element.tag, "ul");
        assert_eq!(element.classes(), ["btn", "large-button"]);
    }

    #[test]
    fn parse_keeps_duplicate_class_values() {
        let element: ElementDescriptor = r#"<ol class="x x">"#.parse().unwrap();
        assert_eq!(element.classes(), ["x", "x"]);
    }

    #[test]
    fn parse_any_class_and_multiple_attributes() {
        let element: ElementDescriptor = r#"<ol class reversed="true">"#.parse().unwrap();
        assert_eq!(element.attribute("class"), Some(&AttributeValue::Any));
        assert_eq!(
            element.attribute("reversed"),
            Some(&AttributeValue::Values(vec!["true".to_string()]))
        );
        assert!(element.classes().is_empty());
    }

    #[test]
    fn parse_rejects_malformed_descriptors() {
        for input in [
            "ul class",
            "<>",
            "<1ul>",
            r#"<ul class="btn>"#,
            "<ul class=btn>",
            r#"<ul class="a" class="b">"#,
            r#"<ul class="a"id>"#,
            "<ul.btn>",
        ] {
            assert!(
                input.parse::<ElementDescriptor>().is_err(),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn display_then_parse_is_identity() {
        let element = ElementDescriptor::with_classes("ul", ["b", "a", "ünï"]);
        let reparsed: ElementDescriptor = element.to_string().parse().unwrap();
        assert_eq!(reparsed, element);
    }

    #[test]
    fn serde_uses_descriptor_string() {
        let element = ElementDescriptor::with_classes("ol", ["steps"]);
        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(json, r#""<ol class=\"steps\">""#);

        let back: ElementDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn descriptors_order_by_tag() {
        let ol = ElementDescriptor::with_any_class("ol");
        let ul = ElementDescriptor::with_any_class("ul");
        assert!(ol < ul);
    }
}
