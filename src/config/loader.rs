//! 設定ファイルの読み込み関数

use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    StoreSettings,
};

/// 設定ファイル名
pub const SETTINGS_FILE_NAME: &str = ".translation-store.json";

/// ディレクトリから設定を読み込む
///
/// `.translation-store.json` ファイルを探して読み込む
///
/// # Arguments
/// * `dir` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub fn load_settings(dir: &Path) -> Result<Option<StoreSettings>, ConfigError> {
    let config_path = dir.join(SETTINGS_FILE_NAME);

    // NotFound は設定なし
    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Configuration file not found: {:?}", config_path);
            return Ok(None);
        }
        Err(source) => return Err(ConfigError::Io { path: config_path, source }),
    };

    tracing::debug!("Read configuration file: {:?}", config_path);

    let settings: StoreSettings = serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: config_path, source })?;

    Ok(Some(settings))
}
