use crate::error::{CliError, Result};
use provis::view::{ColorScheme, Style, ViewConfig};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Output format for the statistics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Argument(format!(
                "Unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

/// Optional settings loaded from a TOML configuration file.
///
/// Every field is optional; resolution order is CLI argument, then config
/// file, then built-in default.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    #[serde(default)]
    pub view: ViewSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ViewSection {
    pub style: Option<String>,
    pub color_scheme: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct OutputSection {
    pub format: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file from {:?}", path);
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| CliError::Config(format!("Failed to parse '{}': {}", path.display(), e)))
    }

    /// Loads the file at `path`, or the built-in defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}

/// Resolves the effective view configuration from CLI overrides and the file.
pub fn resolve_view_config(
    file: &FileConfig,
    style_arg: Option<&str>,
    color_arg: Option<&str>,
) -> Result<ViewConfig> {
    let style = match style_arg.or(file.view.style.as_deref()) {
        Some(s) => Style::from_str(s)
            .map_err(|_| CliError::Argument(format!("Unknown style '{}'", s)))?,
        None => Style::default(),
    };
    let color_scheme = match color_arg.or(file.view.color_scheme.as_deref()) {
        Some(s) => ColorScheme::from_str(s)
            .map_err(|_| CliError::Argument(format!("Unknown color scheme '{}'", s)))?,
        None => ColorScheme::default(),
    };
    Ok(ViewConfig {
        style,
        color_scheme,
    })
}

/// Resolves the effective output format from the CLI override and the file.
pub fn resolve_output_format(file: &FileConfig, format_arg: Option<&str>) -> Result<OutputFormat> {
    match format_arg.or(file.output.format.as_deref()) {
        Some(s) => OutputFormat::from_str(s),
        None => Ok(OutputFormat::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let file = FileConfig::default();
        let view = resolve_view_config(&file, None, None).unwrap();
        assert_eq!(view.style, Style::Cartoon);
        assert_eq!(view.color_scheme, ColorScheme::Chain);
        assert_eq!(
            resolve_output_format(&file, None).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn cli_arguments_override_file_values() {
        let file: FileConfig = toml::from_str(
            "[view]\nstyle = \"stick\"\ncolor-scheme = \"element\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let view = resolve_view_config(&file, Some("sphere"), None).unwrap();
        assert_eq!(view.style, Style::Sphere);
        assert_eq!(view.color_scheme, ColorScheme::Element);
        assert_eq!(
            resolve_output_format(&file, Some("text")).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn file_values_apply_without_cli_overrides() {
        let file: FileConfig =
            toml::from_str("[view]\nstyle = \"surface\"\n[output]\nformat = \"json\"\n").unwrap();

        let view = resolve_view_config(&file, None, None).unwrap();
        assert_eq!(view.style, Style::Surface);
        assert_eq!(
            resolve_output_format(&file, None).unwrap(),
            OutputFormat::Json
        );
    }

    #[test]
    fn unknown_style_is_an_argument_error() {
        let file = FileConfig::default();
        let result = resolve_view_config(&file, Some("ribbon"), None);
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn unknown_keys_in_the_config_file_are_rejected() {
        let result: std::result::Result<FileConfig, _> =
            toml::from_str("[view]\nstile = \"cartoon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn from_file_reads_a_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provis.toml");
        std::fs::write(&path, "[view]\nstyle = \"stick\"\n").unwrap();

        let file = FileConfig::from_file(&path).unwrap();
        assert_eq!(file.view.style.as_deref(), Some("stick"));
    }

    #[test]
    fn load_without_a_path_yields_defaults() {
        let file = FileConfig::load(None).unwrap();
        assert!(file.view.style.is_none());
        assert!(file.output.format.is_none());
    }
}
