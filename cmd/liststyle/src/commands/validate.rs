//! Validate command implementation.

use super::{render_config, storage_format};
use anyhow::{Context, Result};
use list_style::ListStyleConfig;
use std::fs;
use tracing::{error, info};

/// Runs the validate command.
pub fn run(input_path: &str, output_path: &str, format: Option<&str>) -> Result<()> {
    info!("Validating styles: {input_path}");

    let output_format = storage_format(output_path, format)?;

    let text = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read styles file: {input_path}"))?;

    let parsed = list_style::parse(&text);

    for (line, content) in &parsed.errors {
        let content = content.trim();
        error!("{input_path}:{line}: not a valid style: {content}");
    }

    // Nothing is written unless every line parsed
    let rules = parsed
        .into_rules()
        .with_context(|| format!("Invalid styles in {input_path}"))?;

    let count = rules.len();
    info!("Parsed {count} list styles");

    let config = ListStyleConfig::from_rules(&rules);
    let output = render_config(&config, output_format)?;

    fs::write(output_path, &output)
        .with_context(|| format!("Failed to write configuration file: {output_path}"))?;

    info!("Configuration written to: {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::load_config;
    use list_style::StyleRule;
    use std::path::Path;

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn written_config_loads_back_for_each_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("styles.txt");
        fs::write(&input, "ul.btn.large|Big\n\nol.steps|Steps\n").unwrap();

        let expected = vec![
            StyleRule::new("ul", ["btn", "large"], "Big"),
            StyleRule::new("ol", ["steps"], "Steps"),
        ];

        for name in ["styles.json", "styles.yaml", "styles.yml"] {
            let output = dir.path().join(name);
            run(path_str(&input), path_str(&output), None).unwrap();

            let config = load_config(path_str(&output)).unwrap();
            assert_eq!(config.rules().unwrap(), expected, "reading back {name}");
        }
    }

    #[test]
    fn explicit_format_must_match_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("styles.txt");
        fs::write(&input, "ul.btn|Button\n").unwrap();

        let output = dir.path().join("styles.json");
        assert!(run(path_str(&input), path_str(&output), Some("yaml")).is_err());
        assert!(!output.exists());

        run(path_str(&input), path_str(&output), Some("json")).unwrap();
        assert_eq!(load_config(path_str(&output)).unwrap().styles.len(), 1);
    }

    #[test]
    fn invalid_lines_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("styles.txt");
        fs::write(&input, "ul.btn|Button\na.link|Link\n").unwrap();

        let output = dir.path().join("styles.yaml");
        let err = run(path_str(&input), path_str(&output), None).unwrap_err();
        assert!(format!("{err:#}").contains("unparseable line: 2"));
        assert!(!output.exists());
    }
}
