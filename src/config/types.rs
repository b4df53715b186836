use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::file_store::JsonStyle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid setting '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "langFolder")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Failure to load or validate [`StoreSettings`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid settings:\n{}", list_validation_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Failed to read settings file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One numbered line per error, indented under the heading.
fn list_validation_errors(errors: &[ValidationError]) -> String {
    let lines: Vec<String> = errors
        .iter()
        .zip(1..)
        .map(|(err, n)| format!("  {n}. {}: {}", err.field_path, err.message))
        .collect();
    lines.join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSettings {
    /// Folder holding one file per language.
    pub lang_folder: PathBuf,

    /// Extension of language files, without the leading dot.
    pub extension: String,

    /// Write indented JSON instead of a single line.
    pub pretty_print: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            lang_folder: PathBuf::from("./lang"),
            extension: "json".to_string(),
            pretty_print: false,
        }
    }
}

impl StoreSettings {
    /// Default settings for the given language folder.
    #[must_use]
    pub fn with_folder(lang_folder: impl Into<PathBuf>) -> Self {
        Self { lang_folder: lang_folder.into(), ..Self::default() }
    }

    /// Loads the settings file from `dir`, falling back to defaults when absent,
    /// then validates the result.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn resolve(dir: &Path) -> Result<Self, ConfigError> {
        let settings = super::load_settings(dir)?.unwrap_or_default();
        settings.validate().map_err(ConfigError::Validation)?;
        Ok(settings)
    }

    /// # Errors
    /// - Language folder is empty
    /// - Extension is empty or contains a dot or path separator
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.lang_folder.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "langFolder",
                "The folder cannot be empty. Example: \"./lang\"",
            ));
        }

        if self.extension.is_empty() {
            errors.push(ValidationError::new(
                "extension",
                "The extension cannot be empty. Example: \"json\"",
            ));
        } else if self.extension.contains(['.', '/', '\\']) {
            errors.push(ValidationError::new(
                "extension",
                format!(
                    "Invalid extension '{}': give the bare extension without dots or separators (e.g., \"json\")",
                    self.extension
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Output layout for saved language files.
    #[must_use]
    pub const fn json_style(&self) -> JsonStyle {
        if self.pretty_print { JsonStyle::Pretty } else { JsonStyle::Compact }
    }
}
