//! Editor configuration for list style presets.
//!
//! This crate is **pure and deterministic**:
//! - No I/O
//! - No shared state
//! - Same rules always produce the same output
//!
//! # Example
//!
//! ```rust
//! use list_style_editor::StyleProjector;
//!
//! let rules = list_style::parse("ul.btn|Button").rules;
//! let decorators = StyleProjector::decorators(&rules);
//! assert_eq!(decorators[0].class_value, "btn");
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod editor;
pub mod error;
pub mod plugin;
pub mod projector;

pub use editor::{Decorator, DecoratorMode, EditorConfig, ListStyleOptions};
pub use error::{Error, Result};
pub use plugin::{EditorPlugin, ListStylePlugin};
pub use projector::{OutputFormat, ProjectOptions, StyleProjector};
