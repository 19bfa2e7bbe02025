//! List style preset parsing and typed model.
//!
//! This crate provides:
//! - Parsing of the line-oriented `tag.class|Label` preset format
//! - Per-line validation that collects every bad line instead of aborting
//! - Canonical element descriptors (`<ul class="btn large">`) for persistence
//! - Serialization back to the line format for editing
//!
//! # Example
//!
//! ```rust
//! use list_style::parse;
//!
//! let parsed = parse("ul.btn.large|Big buttons\nnot a rule\nol.steps|Steps");
//! assert_eq!(parsed.rules.len(), 2);
//! assert_eq!(parsed.error_lines(), vec![2]);
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod element;
pub mod error;
pub mod model;
pub mod parser;

pub use config::{ListStyleConfig, StyleSetting};
pub use element::{AttributeValue, ElementDescriptor};
pub use error::{Error, Result};
pub use model::{StyleRule, SUPPORTED_TAGS};
pub use parser::{parse, parse_selector, serialize, serialize_config, LineError, ParsedStyles};
