//! Line-oriented style parser.
//!
//! Parses the editing form of list style presets into [`StyleRule`] records.
//!
//! # Format
//!
//! ```text
//! ul.btn.large-button|Large buttons
//! ol.steps|Numbered steps
//! ```
//!
//! One rule per line, `tag.class1.class2...|Label`. Blank lines are ignored.
//! There is no escaping for `.` or `|`.
//!
//! Parsing never stops at a bad line: every line that does not match is
//! reported by number in [`ParsedStyles::errors`] and the remaining lines are
//! still parsed.

use crate::config::ListStyleConfig;
use crate::element::ElementDescriptor;
use crate::error::{Error, Result};
use crate::model::{StyleRule, SUPPORTED_TAGS};
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::debug;

/// Separator between the selector and the label.
const LABEL_SEPARATOR: char = '|';

/// Separator between the tag and each class.
const CLASS_SEPARATOR: char = '.';

/// Outcome of parsing a whole text blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStyles {
    /// Valid rules in input line order.
    pub rules: Vec<StyleRule>,
    /// Unparseable lines: 1-based line number to the original line.
    pub errors: BTreeMap<usize, String>,
}

/// Why a single line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    /// No `|` between selector and label.
    #[error("missing '|' between selector and label")]
    MissingSeparator,

    /// More than one `|` on the line.
    #[error("more than one '|' on the line")]
    ExtraSeparator,

    /// Label is empty after trimming.
    #[error("empty label")]
    EmptyLabel,

    /// Tag is not one of the supported list elements.
    #[error("unsupported tag '{0}', expected one of: {tags}", tags = SUPPORTED_TAGS.join(", "))]
    UnsupportedTag(String),

    /// Selector has no `.class` segment.
    #[error("selector needs at least one class")]
    MissingClass,

    /// A class segment between two dots is empty.
    #[error("empty class segment")]
    EmptyClass,

    /// A class contains a character outside the allowed set.
    #[error("invalid character {character:?} in class '{class}'")]
    InvalidClass {
        /// The offending class segment.
        class: String,
        /// First disallowed character.
        character: char,
    },
}

impl ParsedStyles {
    /// Returns true if every non-blank line parsed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Line numbers of unparseable lines, ascending.
    #[must_use]
    pub fn error_lines(&self) -> Vec<usize> {
        self.errors.keys().copied().collect()
    }

    /// Returns the rules, or fails if any line was unparseable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnparseableLines`] listing every bad line.
    pub fn into_rules(self) -> Result<Vec<StyleRule>> {
        if self.errors.is_empty() {
            Ok(self.rules)
        } else {
            Err(Error::UnparseableLines {
                lines: self.error_lines(),
            })
        }
    }
}

/// Parses the text form of list styles.
///
/// Blank lines are skipped. Lines that fail to parse are collected in
/// [`ParsedStyles::errors`] with their 1-based line number.
///
/// # Example
///
/// ```rust
/// use list_style::{parse, StyleRule};
///
/// let parsed = parse("ul.btn.large|Big\nbadline\nul.x|X");
/// assert_eq!(
///     parsed.rules,
///     vec![
///         StyleRule::new("ul", ["btn", "large"], "Big"),
///         StyleRule::new("ul", ["x"], "X"),
///     ]
/// );
/// assert_eq!(parsed.errors.get(&2).map(String::as_str), Some("badline"));
/// ```
pub fn parse(input: &str) -> ParsedStyles {
    let mut parsed = ParsedStyles::default();

    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let line_num = index + 1;
        match parse_line(line) {
            Ok(rule) => parsed.rules.push(rule),
            Err(e) => {
                debug!("Skipping list style line {line_num}: {e}");
                parsed.errors.insert(line_num, line.to_string());
            }
        }
    }

    let (valid, invalid) = (parsed.rules.len(), parsed.errors.len());
    debug!("Parsed {valid} list styles, {invalid} unparseable lines");

    parsed
}

/// Parses a single non-blank line.
fn parse_line(line: &str) -> std::result::Result<StyleRule, LineError> {
    let mut parts = line.split(LABEL_SEPARATOR);
    let selector = parts.next().unwrap_or_default().trim();
    let label = parts.next().ok_or(LineError::MissingSeparator)?.trim();
    if parts.next().is_some() {
        return Err(LineError::ExtraSeparator);
    }
    if label.is_empty() {
        return Err(LineError::EmptyLabel);
    }

    let element = parse_selector(selector)?;
    StyleRule::from_element(&element, label).map_err(|_| LineError::MissingClass)
}

/// Checks a selector against `^(ol|ul)(\.<class>)+$` and returns its
/// canonical descriptor.
///
/// # Errors
///
/// Returns the first [`LineError`] found, scanning left to right.
///
/// # Example
///
/// ```rust
/// use list_style::parse_selector;
///
/// let element = parse_selector("ul.btn.large-button").unwrap();
/// assert_eq!(element.to_string(), r#"<ul class="btn large-button">"#);
/// assert!(parse_selector("a.btn").is_err());
/// ```
pub fn parse_selector(selector: &str) -> std::result::Result<ElementDescriptor, LineError> {
    let (tag, classes) = match selector.split_once(CLASS_SEPARATOR) {
        Some((tag, classes)) => (tag, Some(classes)),
        None => (selector, None),
    };

    if !SUPPORTED_TAGS.contains(&tag) {
        return Err(LineError::UnsupportedTag(tag.to_string()));
    }
    let classes = classes.ok_or(LineError::MissingClass)?;

    let mut segments = Vec::new();
    for class in classes.split(CLASS_SEPARATOR) {
        if class.is_empty() {
            return Err(LineError::EmptyClass);
        }
        if let Some(character) = class.chars().find(|c| !is_class_char(*c)) {
            return Err(LineError::InvalidClass {
                class: class.to_string(),
                character,
            });
        }
        segments.push(class);
    }

    Ok(ElementDescriptor::with_classes(tag, segments))
}

/// ASCII letters and digits, `-`, `_`, and non-whitespace characters in
/// U+00A0..=U+FFFF.
fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '_')
        || (('\u{A0}'..='\u{FFFF}').contains(&c) && !c.is_whitespace())
}

/// Serializes rules to the text form, one line per rule.
///
/// The output parses back to the same rules.
pub fn serialize(rules: &[StyleRule]) -> String {
    let mut output = String::new();

    for rule in rules {
        let element = rule.element();
        output.push_str(&element.tag);
        for class in element.classes() {
            output.push(CLASS_SEPARATOR);
            output.push_str(class);
        }
        let label = &rule.label;
        let _ = writeln!(output, "{LABEL_SEPARATOR}{label}");
    }

    output
}

/// Serializes a persisted configuration to the text form.
///
/// # Errors
///
/// Returns [`Error::InvalidElement`] if a stored descriptor cannot be
/// decomposed.
pub fn serialize_config(config: &ListStyleConfig) -> Result<String> {
    Ok(serialize(&config.rules()?))
}
