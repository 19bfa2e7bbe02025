//! Project command implementation.

use super::{load_config, parse_format};
use anyhow::{Context, Result};
use list_style_editor::{ProjectOptions, StyleProjector};
use std::fs;
use tracing::{info, warn};

/// Runs the project command.
pub fn run(config_path: &str, output_path: &str, format: &str) -> Result<()> {
    info!("Projecting list styles: {config_path}");

    let config = load_config(config_path)?;
    if config.is_empty() {
        warn!("No list styles configured; the editor will not allow list classes");
    }

    let projector = StyleProjector::with_options(ProjectOptions {
        format: parse_format(format)?,
    });
    let output = projector
        .project(&config)
        .with_context(|| "Failed to project list styles")?;

    fs::write(output_path, &output)
        .with_context(|| format!("Failed to write output file: {output_path}"))?;

    info!("Editor configuration written to: {output_path}");
    Ok(())
}
