//! Error types for list style parsing and persistence.

use thiserror::Error;

/// Errors that can occur during list style operations.
///
/// Individual bad lines in the text format are not errors on their own; they
/// are collected in [`crate::ParsedStyles::errors`]. These variants cover the
/// points where a caller asks for a hard failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// One or more lines of the text format could not be parsed.
    #[error("unparseable {}", describe_lines(.lines))]
    UnparseableLines {
        /// 1-based line numbers, ascending.
        lines: Vec<usize>,
    },

    /// A persisted style has an empty or blank label.
    #[error("empty label for element '{element}'")]
    EmptyLabel {
        /// Descriptor of the unlabeled style.
        element: String,
    },

    /// A persisted element descriptor could not be decomposed.
    #[error("invalid element descriptor '{element}': {reason}")]
    InvalidElement {
        /// The offending descriptor string.
        element: String,
        /// Reason why the descriptor is invalid.
        reason: String,
    },
}

impl Error {
    /// Creates an invalid element error.
    pub fn invalid_element(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidElement {
            element: element.into(),
            reason: reason.into(),
        }
    }
}

fn describe_lines(lines: &[usize]) -> String {
    let noun = if lines.len() == 1 { "line" } else { "lines" };
    let numbers = lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{noun}: {numbers}")
}

/// Result type alias for list style operations.
pub type Result<T> = std::result::Result<T, Error>;
