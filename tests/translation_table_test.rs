//! End-to-end tests for the translation table over a real folder.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use googletest::prelude::*;
use rstest::{
    fixture,
    rstest,
};
use tempfile::TempDir;
use translation_store::config::SETTINGS_FILE_NAME;
use translation_store::file_store::{
    list_file_base_names,
    read_json,
    write_json,
};
use translation_store::{
    StoreError,
    StoreSettings,
    TranslationTable,
};

#[fixture]
fn workspace() -> TempDir {
    TempDir::new().unwrap()
}

fn read_file(path: &Path) -> HashMap<String, String> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

#[rstest]
fn test_round_trip_through_file_store(workspace: TempDir) {
    let path = workspace.path().join("lang").join("en.json");
    let original = map(&[("greeting", "Hello"), ("farewell", "Goodbye")]);

    write_json(&path, &original).unwrap();
    let read: Option<HashMap<String, String>> = read_json(&path).unwrap();

    assert_eq!(read, Some(original));
}

#[rstest]
fn test_list_only_json_base_names(workspace: TempDir) {
    for name in ["a.json", "b.json", "c.txt"] {
        fs::write(workspace.path().join(name), "{}").unwrap();
    }

    let mut names = list_file_base_names(workspace.path(), Some("json"));
    names.sort();

    assert_eq!(names, vec!["a", "b"]);
}

#[rstest]
fn test_single_translation_on_empty_table(workspace: TempDir) {
    let folder = workspace.path().join("lang");
    let mut table = TranslationTable::open(&folder).unwrap();

    table.set_translation("en", "hello", "Hi").unwrap();

    assert_eq!(table.translation("en", "hello").unwrap(), "Hi");
    assert_eq!(fs::read_to_string(folder.join("en.json")).unwrap(), r#"{"hello":"Hi"}"#);
}

#[rstest]
fn test_bulk_translation_updates_every_file(workspace: TempDir) {
    let folder = workspace.path().join("lang");
    let mut table = TranslationTable::open(&folder).unwrap();

    let values = map(&[("en", "Hi"), ("fr", "Salut")]);
    table.set_translation_for_languages("greet", &values).unwrap();

    assert_eq!(table.translation("en", "greet").unwrap(), "Hi");
    assert_eq!(table.translation("fr", "greet").unwrap(), "Salut");
    assert_eq!(read_file(&folder.join("en.json")), map(&[("greet", "Hi")]));
    assert_eq!(read_file(&folder.join("fr.json")), map(&[("greet", "Salut")]));
}

#[rstest]
fn test_reload_after_set_language_is_idempotent(workspace: TempDir) {
    let mut table = TranslationTable::open(workspace.path().join("lang")).unwrap();

    table.set_language("de", map(&[("x", "y")])).unwrap();
    let before = table.language("de").cloned();
    table.reload_all().unwrap();

    assert_eq!(table.language("de").cloned(), before);
    assert_eq!(before, Some(map(&[("x", "y")])));
}

#[rstest]
#[case::absent_language("it", "hello")]
#[case::absent_key("en", "missing")]
fn test_lookup_failures_are_typed(
    workspace: TempDir,
    #[case] language: &str,
    #[case] key: &str,
) {
    let mut table = TranslationTable::open(workspace.path().join("lang")).unwrap();
    table.set_translation("en", "hello", "Hello").unwrap();

    let err = table.translation(language, key).unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, StoreError::LanguageNotFound(_) | StoreError::KeyNotFound { .. }));
}

#[rstest]
fn test_reopen_sees_persisted_state(workspace: TempDir) {
    let folder = workspace.path().join("lang");
    {
        let mut table = TranslationTable::open(&folder).unwrap();
        table.set_translation_for_languages("yes", [("en", "Yes"), ("ja", "はい")]).unwrap();
    }

    let table = TranslationTable::open(&folder).unwrap();

    assert_eq!(table.translation("ja", "yes").unwrap(), "はい");
    assert_eq!(table.languages().count(), 2);
}

#[googletest::test]
fn test_settings_file_drives_table() {
    let workspace = TempDir::new().unwrap();
    let folder = workspace.path().join("i18n");
    let settings_json =
        format!(r#"{{"langFolder": {}, "prettyPrint": true}}"#, serde_json::json!(folder));
    fs::write(workspace.path().join(SETTINGS_FILE_NAME), settings_json).unwrap();

    let settings = StoreSettings::resolve(workspace.path()).unwrap();
    let mut table = TranslationTable::from_settings(&settings).unwrap();
    table.set_translation("en", "k", "v").unwrap();

    expect_that!(table.folder(), eq(folder.as_path()));
    let written = fs::read_to_string(folder.join("en.json")).unwrap();
    expect_that!(written.as_str(), eq("{\n  \"k\": \"v\"\n}"));
}
