//! Error types for the translation store.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by [`crate::file_store`] and [`crate::TranslationTable`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading, writing or creating a directory failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold JSON of the expected shape,
    /// or the value could not be serialized.
    #[error("Invalid JSON in '{}': {source}", path.display())]
    Json {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying codec error
        #[source]
        source: serde_json::Error,
    },

    /// No language with this id is loaded.
    #[error("Language not found: {0}")]
    LanguageNotFound(String),

    /// The language id cannot name a file inside the language folder.
    #[error("Invalid language id '{0}': must be a non-empty file name inside the language folder")]
    InvalidLanguage(String),

    /// The language is loaded but has no entry for the key.
    #[error("Translation key '{key}' not found in language '{language}'")]
    KeyNotFound {
        /// Language that was searched
        language: String,
        /// Missing key
        key: String,
    },

    /// Settings could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }

    /// Whether the error reports a missing language or key.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::LanguageNotFound(_) | Self::KeyNotFound { .. })
    }

    /// Whether the error came from the filesystem or the JSON codec.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Json { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = StoreError> = std::result::Result<T, E>;
