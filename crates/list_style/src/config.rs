//! Persisted configuration value.
//!
//! The host stores styles as `{ label, element }` records where `element` is
//! the canonical descriptor string. The text format never touches storage.

use crate::element::ElementDescriptor;
use crate::error::{Error, Result};
use crate::model::StyleRule;
use serde::{Deserialize, Serialize};

/// A single persisted style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSetting {
    /// Display label.
    pub label: String,
    /// Canonical descriptor, e.g. `<ul class="btn">`.
    pub element: String,
}

/// The list style configuration owned by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStyleConfig {
    /// Styles in display order. Empty disables the feature.
    #[serde(default)]
    pub styles: Vec<StyleSetting>,
}

impl StyleSetting {
    /// Builds the persisted form of a rule.
    #[must_use]
    pub fn from_rule(rule: &StyleRule) -> Self {
        Self {
            label: rule.label.clone(),
            element: rule.element().to_string(),
        }
    }

    /// Decomposes the stored descriptor back into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidElement`] if `element` is not a descriptor with
    /// class values, or [`Error::EmptyLabel`] if the label is blank.
    pub fn to_rule(&self) -> Result<StyleRule> {
        let element: ElementDescriptor = self.element.parse()?;
        let label = self.label.trim();
        if label.is_empty() {
            return Err(Error::EmptyLabel {
                element: self.element.clone(),
            });
        }
        StyleRule::from_element(&element, label)
    }
}

impl ListStyleConfig {
    /// Builds a configuration from parsed rules, keeping their order.
    #[must_use]
    pub fn from_rules(rules: &[StyleRule]) -> Self {
        Self {
            styles: rules.iter().map(StyleSetting::from_rule).collect(),
        }
    }

    /// Decomposes every stored style into a rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidElement`] or [`Error::EmptyLabel`]
    /// encountered.
    pub fn rules(&self) -> Result<Vec<StyleRule>> {
        self.styles.iter().map(StyleSetting::to_rule).collect()
    }

    /// Returns true when no styles are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl From<&[StyleRule]> for ListStyleConfig {
    fn from(rules: &[StyleRule]) -> Self {
        Self::from_rules(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rules() -> Vec<StyleRule> {
        vec![
            StyleRule::new("ul", ["btn", "large-button"], "Big buttons"),
            StyleRule::new("ol", ["steps"], "Steps"),
        ]
    }

    #[test]
    fn config_from_rules_uses_canonical_elements() {
        let config = ListStyleConfig::from_rules(&sample_rules());
        assert_eq!(
            config.styles,
            vec![
                StyleSetting {
                    label: "Big buttons".to_string(),
                    element: r#"<ul class="btn large-button">"#.to_string(),
                },
                StyleSetting {
                    label: "Steps".to_string(),
                    element: r#"<ol class="steps">"#.to_string(),
                },
            ]
        );
    }

    #[test]
    fn config_rules_roundtrip() {
        let rules = sample_rules();
        let config = ListStyleConfig::from(rules.as_slice());
        assert_eq!(config.rules().unwrap(), rules);
    }

    #[test]
    fn config_rules_rejects_element_without_classes() {
        let config = ListStyleConfig {
            styles: vec![StyleSetting {
                label: "Plain".to_string(),
                element: "<ul>".to_string(),
            }],
        };
        assert!(matches!(config.rules(), Err(Error::InvalidElement { .. })));
    }

    #[test]
    fn config_rules_rejects_blank_label() {
        for label in ["", "   ", "\t"] {
            let config = ListStyleConfig {
                styles: vec![StyleSetting {
                    label: label.to_string(),
                    element: r#"<ul class="btn">"#.to_string(),
                }],
            };
            assert_eq!(
                config.rules(),
                Err(Error::EmptyLabel {
                    element: r#"<ul class="btn">"#.to_string(),
                })
            );
        }
    }

    #[test]
    fn config_rules_trims_stored_label() {
        let config = ListStyleConfig {
            styles: vec![StyleSetting {
                label: "  Steps ".to_string(),
                element: r#"<ol class="steps">"#.to_string(),
            }],
        };
        assert_eq!(
            config.rules().unwrap(),
            vec![StyleRule::new("ol", ["steps"], "Steps")]
        );
    }

    #[test]
    fn config_keeps_stale_tags() {
        let config = ListStyleConfig {
            styles: vec![StyleSetting {
                label: "Link".to_string(),
                element: r#"<a class="button">"#.to_string(),
            }],
        };
        let rules = config.rules().unwrap();
        assert_eq!(rules, vec![StyleRule::new("a", ["button"], "Link")]);
    }

    #[test]
    fn config_defaults_to_no_styles() {
        let config: ListStyleConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.is_empty());
        assert_eq!(config, ListStyleConfig::default());
    }

    #[test]
    fn config_yaml_shape() {
        let config = ListStyleConfig::from_rules(&sample_rules()[1..]);
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("label: Steps"));

        let back: ListStyleConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
