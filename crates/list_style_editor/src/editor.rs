//! Editor configuration output types.

use serde::{Deserialize, Serialize};

/// Configuration handed to the embedding editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Element shapes the markup filter must let through, e.g. `<ul class>`.
    pub allowed_elements: Vec<String>,
    /// List style plugin options.
    pub list_style: ListStyleOptions,
}

/// Options of the editor's list style plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStyleOptions {
    /// Clickable style options in display order.
    pub decorators: Vec<Decorator>,
}

/// One style option offered to editors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decorator {
    /// How the decorator is applied.
    pub mode: DecoratorMode,
    /// Label shown in the editor UI.
    pub label: String,
    /// Classes toggled on the list element, space-separated.
    pub class_value: String,
}

/// Decorator application mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoratorMode {
    /// The editor user toggles the decorator.
    #[default]
    Manual,
}

impl EditorConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a decorator.
    pub fn add_decorator(&mut self, decorator: Decorator) {
        self.list_style.decorators.push(decorator);
    }

    /// Returns true if the configuration neither allows markup nor offers
    /// decorators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowed_elements.is_empty() && self.list_style.decorators.is_empty()
    }
}

impl Decorator {
    /// Creates a manually toggled decorator.
    #[must_use]
    pub fn manual(label: impl Into<String>, class_value: impl Into<String>) -> Self {
        Self {
            mode: DecoratorMode::Manual,
            label: label.into(),
            class_value: class_value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorator_serializes_camel_case() {
        let json = serde_json::to_string(&Decorator::manual("Button", "btn large")).unwrap();
        assert_eq!(
            json,
            r#"{"mode":"manual","label":"Button","classValue":"btn large"}"#
        );
    }

    #[test]
    fn editor_config_keys() {
        let mut config = EditorConfig::new();
        assert!(config.is_empty());

        config.add_decorator(Decorator::manual("Steps", "steps"));
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("allowedElements"));
        assert!(yaml.contains("listStyle"));
        assert!(yaml.contains("classValue: steps"));
        assert!(!config.is_empty());
    }
}
