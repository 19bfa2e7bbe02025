//! Host-facing plugin interface.
//!
//! A host that edits list styles needs four things: an empty starting
//! configuration, a way to turn submitted text into a configuration, the text
//! to pre-fill the edit field with, and the editor configuration to embed.
//! Configuration is always passed in explicitly; the plugin holds no state.

use crate::editor::EditorConfig;
use crate::error::Result;
use crate::projector::StyleProjector;
use list_style::ListStyleConfig;
use tracing::{debug, info};

/// A configurable editor plugin.
pub trait EditorPlugin {
    /// Persisted configuration value.
    type Config;

    /// Configuration used before the host saved anything.
    fn default_config(&self) -> Self::Config;

    /// Validates submitted text and returns the configuration to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission must not be saved.
    fn validate(&self, text: &str) -> Result<Self::Config>;

    /// Builds the editor configuration for a persisted value.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted value cannot be read.
    fn apply(&self, config: &Self::Config) -> Result<EditorConfig>;
}

/// The list style plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListStylePlugin;

impl ListStylePlugin {
    /// Creates the plugin.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Text form of a persisted configuration, for the edit field.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored element descriptor cannot be decomposed.
    pub fn display(&self, config: &ListStyleConfig) -> Result<String> {
        Ok(list_style::serialize_config(config)?)
    }
}

impl EditorPlugin for ListStylePlugin {
    type Config = ListStyleConfig;

    fn default_config(&self) -> ListStyleConfig {
        ListStyleConfig::default()
    }

    /// Any unparseable line rejects the whole submission with
    /// [`list_style::Error::UnparseableLines`] naming every bad line.
    fn validate(&self, text: &str) -> Result<ListStyleConfig> {
        let rules = list_style::parse(text).into_rules()?;
        let count = rules.len();
        info!("Validated {count} list styles");
        Ok(ListStyleConfig::from_rules(&rules))
    }

    fn apply(&self, config: &ListStyleConfig) -> Result<EditorConfig> {
        let rules = config.rules()?;
        let count = rules.len();
        debug!("Applying {count} list styles to editor configuration");
        Ok(StyleProjector::editor_config(&rules))
    }
}
