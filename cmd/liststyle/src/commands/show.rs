//! Show command implementation.

use super::load_config;
use anyhow::{Context, Result};
use tracing::info;

/// Runs the show command.
pub fn run(config_path: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let count = config.styles.len();
    info!("Loaded {count} list styles from {config_path}");

    let text = list_style::serialize_config(&config)
        .with_context(|| format!("Stored configuration is corrupt: {config_path}"))?;

    print!("{text}");
    Ok(())
}
