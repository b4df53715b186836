//! Store settings: types, validation and the settings file loader.
/// Settings file loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::{
    SETTINGS_FILE_NAME,
    load_settings,
};
pub use types::{
    ConfigError,
    StoreSettings,
    ValidationError,
};
