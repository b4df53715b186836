//! Translation table backed by a folder of per-language JSON files.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use crate::config::StoreSettings;
use crate::error::{
    Result,
    StoreError,
};
use crate::file_store::{
    self,
    JsonStyle,
};

/// Translation key → translated text for one language.
pub type LanguageMap = HashMap<String, String>;

/// In-memory language → key → text store, mirrored to one file per language.
///
/// The table is filled from disk when opened. Setters persist the affected
/// language and read it back; the in-memory state may otherwise run ahead of
/// the files until [`save_all`](Self::save_all) or [`save_one`](Self::save_one)
/// is called.
///
/// The table takes `&mut self` for every mutation and holds no lock; share it
/// across threads behind a `Mutex` if needed. Writes are not atomic, so a crash
/// mid-write can leave a truncated file.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    /// Language id → translations
    languages: HashMap<String, LanguageMap>,

    /// Folder holding `<language>.<extension>` files
    folder: PathBuf,

    /// Language file extension, without the dot
    extension: String,

    /// Output layout for saved files
    style: JsonStyle,
}

impl TranslationTable {
    /// Opens the table over `folder` with default settings and loads every
    /// `.json` file in it.
    ///
    /// A missing folder gives an empty table; it is created on the first save.
    pub fn open(folder: impl Into<PathBuf>) -> Result<Self> {
        Self::from_settings(&StoreSettings::with_folder(folder))
    }

    /// Opens the table described by `settings` and loads every language file.
    pub fn from_settings(settings: &StoreSettings) -> Result<Self> {
        settings.validate().map_err(crate::config::ConfigError::Validation)?;

        let mut table = Self {
            languages: HashMap::new(),
            folder: settings.lang_folder.clone(),
            extension: settings.extension.clone(),
            style: settings.json_style(),
        };
        table.reload_all()?;

        tracing::info!(
            folder = %table.folder.display(),
            languages = table.languages.len(),
            "Translation table loaded"
        );
        Ok(table)
    }

    /// Folder the language files live in.
    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Path of the backing file for `language`.
    #[must_use]
    pub fn language_path(&self, language: &str) -> PathBuf {
        self.folder.join(format!("{language}.{}", self.extension))
    }

    /// Ids of the loaded languages, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Whether `language` is loaded.
    #[must_use]
    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Reloads every language that has a file in the folder.
    ///
    /// Languages that only exist in memory are left as they are. Files whose
    /// base name is not a valid language id are skipped.
    pub fn reload_all(&mut self) -> Result<()> {
        let names = file_store::list_file_base_names(&self.folder, Some(self.extension.as_str()));
        for language in names {
            if check_language(&language).is_err() {
                tracing::warn!(%language, "Skipping language file with an invalid id");
                continue;
            }
            self.reload_one(&language)?;
        }
        Ok(())
    }

    /// Reads the file of `language` into memory, replacing what was there.
    ///
    /// When the file no longer exists the language is dropped from the table.
    pub fn reload_one(&mut self, language: &str) -> Result<()> {
        check_language(language)?;
        let path = self.language_path(language);

        if let Some(map) = file_store::read_json::<LanguageMap>(&path)? {
            tracing::debug!(language, entries = map.len(), "Loaded language");
            self.languages.insert(language.to_string(), map);
        } else if self.languages.remove(language).is_some() {
            tracing::debug!(language, path = %path.display(), "Language file gone, dropped");
        }

        Ok(())
    }

    /// Writes every loaded language to its file, in language id order.
    ///
    /// Stops at the first failure; files written before it stay written.
    pub fn save_all(&self) -> Result<()> {
        let mut languages: Vec<&str> = self.languages().collect();
        languages.sort_unstable();

        for language in languages {
            self.save_one(language)?;
        }
        Ok(())
    }

    /// Writes the translations of `language` to its file.
    ///
    /// # Errors
    /// - [`StoreError::LanguageNotFound`] if `language` is not loaded
    /// - [`StoreError::Io`] / [`StoreError::Json`] if the write fails
    pub fn save_one(&self, language: &str) -> Result<()> {
        let map = self
            .languages
            .get(language)
            .ok_or_else(|| StoreError::LanguageNotFound(language.to_string()))?;

        file_store::write_json_with(&self.language_path(language), map, self.style)
    }

    /// Replaces the translations of `language` wholesale, then saves and
    /// reloads it.
    pub fn set_language(&mut self, language: &str, map: LanguageMap) -> Result<()> {
        check_language(language)?;
        self.languages.insert(language.to_string(), map);
        self.sync_language(language)
    }

    /// Translations of `language`, if loaded.
    #[must_use]
    pub fn language(&self, language: &str) -> Option<&LanguageMap> {
        self.languages.get(language)
    }

    /// Sets one translation, creating the language if it is not loaded yet,
    /// then saves and reloads that language.
    pub fn set_translation(&mut self, language: &str, key: &str, value: &str) -> Result<()> {
        check_language(language)?;
        self.insert_entry(language, key, value);
        self.sync_language(language)
    }

    /// Sets `key` in every language of `values` (language → text).
    ///
    /// All entries are applied in memory first, then the whole table is saved
    /// once and reloaded once. The first I/O failure is returned; languages
    /// written before it are not rolled back. An invalid language id rejects
    /// the whole call before anything changes.
    pub fn set_translation_for_languages<L, V>(
        &mut self,
        key: &str,
        values: impl IntoIterator<Item = (L, V)>,
    ) -> Result<()>
    where
        L: AsRef<str>,
        V: AsRef<str>,
    {
        let values: Vec<(L, V)> = values.into_iter().collect();
        for (language, _) in &values {
            check_language(language.as_ref())?;
        }

        for (language, value) in &values {
            self.insert_entry(language.as_ref(), key, value.as_ref());
        }

        self.save_all()?;
        self.reload_all()
    }

    /// Translated text of `key` in `language`.
    ///
    /// # Errors
    /// - [`StoreError::LanguageNotFound`] if `language` is not loaded
    /// - [`StoreError::KeyNotFound`] if the language has no such key
    pub fn translation(&self, language: &str, key: &str) -> Result<&str> {
        let map = self
            .languages
            .get(language)
            .ok_or_else(|| StoreError::LanguageNotFound(language.to_string()))?;

        map.get(key).map(String::as_str).ok_or_else(|| StoreError::KeyNotFound {
            language: language.to_string(),
            key: key.to_string(),
        })
    }

    /// Inserts or overwrites one entry in memory only.
    fn insert_entry(&mut self, language: &str, key: &str, value: &str) {
        self.languages
            .entry(language.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Persists `language` and reads it back from disk.
    fn sync_language(&mut self, language: &str) -> Result<()> {
        self.save_one(language)?;
        self.reload_one(language)
    }
}

/// Accepts only ids that name a file directly inside the language folder.
fn check_language(language: &str) -> Result<()> {
    if language.is_empty() || language.starts_with("..") || language.contains(['/', '\\']) {
        return Err(StoreError::InvalidLanguage(language.to_string()));
    }
    Ok(())
}
