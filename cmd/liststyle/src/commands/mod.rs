//! Command implementations and shared file helpers.

pub mod init;
pub mod project;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use list_style::ListStyleConfig;
use list_style_editor::OutputFormat;
use std::fs;
use std::path::Path;

/// Parses a `--format` value.
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "yaml" | "yml" => Ok(OutputFormat::Yaml),
        _ => anyhow::bail!("Unknown output format: {format}. Use 'yaml' or 'json'."),
    }
}

/// Format of a stored configuration, by file extension. Anything but `.json`
/// is YAML.
pub fn format_for_path(path: &str) -> OutputFormat {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Yaml,
    }
}

/// Format for writing a stored configuration to `path`.
///
/// The extension decides, so the file reads back with [`load_config`]. An
/// explicit format must agree with it.
pub fn storage_format(path: &str, format: Option<&str>) -> Result<OutputFormat> {
    let inferred = format_for_path(path);
    let Some(format) = format else {
        return Ok(inferred);
    };

    let requested = parse_format(format)?;
    if requested != inferred {
        anyhow::bail!("Format '{format}' does not match the extension of {path}");
    }
    Ok(requested)
}

/// Reads a stored configuration.
pub fn load_config(path: &str) -> Result<ListStyleConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {path}"))?;

    let config: ListStyleConfig = match format_for_path(path) {
        OutputFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON configuration: {path}"))?,
        OutputFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML configuration: {path}"))?,
    };

    Ok(config)
}

/// Renders a configuration for storage.
pub fn render_config(config: &ListStyleConfig, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_style::StyleRule;

    #[test]
    fn parse_format_values() {
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_format("yml").unwrap(), OutputFormat::Yaml);
        assert!(parse_format("toml").is_err());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(format_for_path("styles.json"), OutputFormat::Json);
        assert_eq!(format_for_path("dir/styles.JSON"), OutputFormat::Json);
        assert_eq!(format_for_path("styles.yaml"), OutputFormat::Yaml);
        assert_eq!(format_for_path("styles"), OutputFormat::Yaml);
    }

    #[test]
    fn storage_format_follows_extension() {
        assert_eq!(storage_format("styles.json", None).unwrap(), OutputFormat::Json);
        assert_eq!(storage_format("styles.yaml", None).unwrap(), OutputFormat::Yaml);
        assert_eq!(
            storage_format("styles.json", Some("json")).unwrap(),
            OutputFormat::Json
        );
        assert!(storage_format("styles.json", Some("yaml")).is_err());
        assert!(storage_format("styles.yaml", Some("json")).is_err());
        assert!(storage_format("styles.yaml", Some("toml")).is_err());
    }

    #[test]
    fn rendered_config_reads_back() {
        let config = ListStyleConfig::from_rules(&[StyleRule::new("ul", ["btn"], "Button")]);

        let json = render_config(&config, OutputFormat::Json).unwrap();
        let back: ListStyleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let yaml = render_config(&config, OutputFormat::Yaml).unwrap();
        let back: ListStyleConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
