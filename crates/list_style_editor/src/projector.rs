//! Projection of style rules into the two editor views.

use crate::editor::{Decorator, EditorConfig, ListStyleOptions};
use crate::error::{Error, Result};
use list_style::{ElementDescriptor, ListStyleConfig, StyleRule, SUPPORTED_TAGS};
use std::collections::BTreeSet;
use tracing::warn;

/// Output format for rendered editor configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML format (default).
    #[default]
    Yaml,
    /// JSON format.
    Json,
}

/// Projection options.
#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    /// Output format.
    pub format: OutputFormat,
}

/// Turns validated rules into the allowed-elements and decorator views.
#[derive(Debug, Clone, Default)]
pub struct StyleProjector {
    options: ProjectOptions,
}

impl StyleProjector {
    /// Creates a new projector with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new projector with the given options.
    #[must_use]
    pub const fn with_options(options: ProjectOptions) -> Self {
        Self { options }
    }

    /// Element shapes the markup filter must allow.
    ///
    /// The view is coarse: any rule at all allows a `class` attribute on both
    /// `<ol>` and `<ul>`. Specific class values are enforced elsewhere. No
    /// rules means nothing is allowed.
    pub fn allowed_elements(rules: &[StyleRule]) -> BTreeSet<ElementDescriptor> {
        if rules.is_empty() {
            return BTreeSet::new();
        }
        SUPPORTED_TAGS
            .iter()
            .map(|tag| ElementDescriptor::with_any_class(*tag))
            .collect()
    }

    /// Style options for the editor, in rule order.
    ///
    /// Only `ol` and `ul` rules become decorators; anything else (for example
    /// anchor styles left over in stored configuration) is skipped.
    pub fn decorators(rules: &[StyleRule]) -> Vec<Decorator> {
        rules
            .iter()
            .filter_map(|rule| {
                let element = rule.element();
                if !rule.is_list_tag() {
                    let label = &rule.label;
                    warn!("Skipping list style '{label}': unsupported element {element}");
                    return None;
                }
                Some(Decorator::manual(&rule.label, element.classes().join(" ")))
            })
            .collect()
    }

    /// Bundles both views into one editor configuration.
    pub fn editor_config(rules: &[StyleRule]) -> EditorConfig {
        EditorConfig {
            allowed_elements: Self::allowed_elements(rules)
                .iter()
                .map(ToString::to_string)
                .collect(),
            list_style: ListStyleOptions {
                decorators: Self::decorators(rules),
            },
        }
    }

    /// Renders the editor configuration for a persisted style configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A stored element descriptor cannot be decomposed
    /// - Serialization fails
    pub fn project(&self, config: &ListStyleConfig) -> Result<String> {
        let editor_config = Self::editor_config(&config.rules()?);

        match self.options.format {
            OutputFormat::Yaml => serde_yaml::to_string(&editor_config).map_err(Error::from),
            OutputFormat::Json => serde_json::to_string_pretty(&editor_config).map_err(Error::from),
        }
    }
}
