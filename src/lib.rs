//! translation-store
//!
//! Per-language translation tables kept in memory and persisted as one JSON
//! file per language inside a folder.
//!
//! ```no_run
//! use translation_store::TranslationTable;
//!
//! # fn main() -> translation_store::Result<()> {
//! let mut table = TranslationTable::open("./lang")?;
//! table.set_translation("en", "greeting", "Hello")?;
//! table.set_translation_for_languages("farewell", [("en", "Goodbye"), ("fr", "Au revoir")])?;
//!
//! assert_eq!(table.translation("fr", "farewell")?, "Au revoir");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod file_store;
pub mod table;
mod test_utils;

pub use config::StoreSettings;
pub use error::{
    Result,
    StoreError,
};
pub use table::{
    LanguageMap,
    TranslationTable,
};
