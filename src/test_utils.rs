//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::Path;

use rstest::fixture;
use tempfile::TempDir;

/// テスト用のトレース出力を初期化する
///
/// `RUST_LOG` で出力レベルを切り替えられる。二回目以降の呼び出しは無視される。
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 空の一時ディレクトリ
#[fixture]
pub(crate) fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// 言語ファイルを直接書き込む
///
/// # Arguments
/// * `folder` - 言語フォルダ
/// * `language` - 言語コード（例: "en", "ja"）
/// * `content` - ファイルの中身（JSON テキスト）
pub(crate) fn write_language_file(folder: &Path, language: &str, content: &str) {
    std::fs::create_dir_all(folder).unwrap();
    std::fs::write(folder.join(format!("{language}.json")), content).unwrap();
}

/// 言語ファイルを読み込んでマップとして返す
pub(crate) fn read_language_file(folder: &Path, language: &str) -> HashMap<String, String> {
    let content = std::fs::read_to_string(folder.join(format!("{language}.json"))).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// キーと値のペアから翻訳マップを作成する
pub(crate) fn entries(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

/// ソート済みの一覧を返す
pub(crate) fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}
