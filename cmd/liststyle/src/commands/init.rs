//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Sample styles written by `liststyle init`.
pub const SAMPLE_STYLES: &str = "ul.list-unstyled|Unstyled list
ul.list-inline|Inline list
ol.steps.steps-compact|Compact steps
";

/// Runs the init command.
pub fn run(path: &str) -> Result<()> {
    let project_path = Path::new(path);

    let path_display = project_path.display();
    info!("Initializing list styles at: {path_display}");

    fs::create_dir_all(project_path)
        .with_context(|| format!("Failed to create directory: {path_display}"))?;

    let styles_path = project_path.join("styles.txt");
    let styles_display = styles_path.display();
    if styles_path.exists() {
        info!("Skipped: {styles_display} (already exists)");
    } else {
        fs::write(&styles_path, SAMPLE_STYLES)
            .with_context(|| "Failed to create styles.txt")?;
        info!("Created: {styles_display}");
    }

    info!("Next steps:");
    info!("  1. Edit styles.txt, one 'tag.class|Label' per line (tag is ol or ul)");
    info!("  2. Run 'liststyle validate' to produce styles.yaml");
    info!("  3. Run 'liststyle project' to generate editor.yaml");

    Ok(())
}
