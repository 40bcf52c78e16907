//! Configuration file support for findbugs-ingest.
//!
//! Provides YAML-based configuration through `findbugs-ingest.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "findbugs-ingest.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Directory holding the FindBugs XML reports
    pub results_dir: Option<PathBuf>,
    /// Glob pattern selecting report files
    pub pattern: Option<String>,
    /// File name of the warning mapping inside `results_dir`
    pub mapping_file: Option<String>,
    /// Workspace root used to resolve Java source files
    pub workspace: Option<PathBuf>,
    pub format: Option<String>,
    pub fail_on_warnings: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validation(message: String) -> anyhow::Error {
    ReportError::Validation { message }.into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(pattern) = &config.pattern {
        if pattern.trim().is_empty() {
            return Err(validation(
                "Invalid config: pattern must not be empty.\n\n\
                 💡 Hint: Use a glob such as \"*.xml\" or \"findbugs-*.xml\"."
                    .to_string(),
            ));
        }
    }

    if let Some(mapping_file) = &config.mapping_file {
        if mapping_file.trim().is_empty() {
            return Err(validation(
                "Invalid config: mapping_file must not be empty.\n\n\
                 💡 Hint: Omit the field to use \"file-mapping.properties\"."
                    .to_string(),
            ));
        }
        if mapping_file.contains(['/', '\\']) {
            return Err(validation(format!(
                "Invalid config: mapping_file '{}' must be a file name, not a path.\n\n\
                 💡 Hint: The mapping is always stored inside results_dir.",
                mapping_file
            )));
        }
    }

    if let Some(format) = &config.format {
        format.parse::<OutputFormat>().map_err(validation)?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}
