//! 過濾設定存放區的整合測試
//!
//! 每個測試使用獨立的暫存目錄

use std::fs;
use std::path::Path;

use filter_settings::config::{
    FallbackReason, FilterSettings, FilterSettingsStore, KeywordList, LoadOutcome,
};
use serde_json::{Value, json};
use tempfile::TempDir;

fn write_settings(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_empty_object_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");
    write_settings(&path, "{}");

    let store = FilterSettingsStore::new(&path);

    assert_eq!(
        serde_json::to_value(store.get()).unwrap(),
        json!({ "excluded_keywords": [], "included_keywords": [], "days_limit": 3 })
    );
    assert_eq!(
        store.load_outcome(),
        &LoadOutcome::Merged {
            applied: vec![],
            rejected: vec![],
        }
    );
}

#[test]
fn test_every_key_subset_overrides_exactly_present_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");

    let excluded = json!(["spam", "ad"]);
    let included = json!(["seo"]);
    let days = json!(9);

    for mask in 0..8u8 {
        let mut object = serde_json::Map::new();
        let mut expected = FilterSettings::default();

        if mask & 1 != 0 {
            object.insert("excluded_keywords".into(), excluded.clone());
            expected.excluded_keywords = vec!["spam".into(), "ad".into()];
        }
        if mask & 2 != 0 {
            object.insert("included_keywords".into(), included.clone());
            expected.included_keywords = vec!["seo".into()];
        }
        if mask & 4 != 0 {
            object.insert("days_limit".into(), days.clone());
            expected.days_limit = 9;
        }

        write_settings(&path, &Value::Object(object).to_string());
        let store = FilterSettingsStore::new(&path);

        assert_eq!(store.get(), &expected, "key subset mask {mask:03b}");
        assert!(!store.load_outcome().is_defaults());
    }
}

#[test]
fn test_nonexistent_path_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("filter_settings.json");

    let store = FilterSettingsStore::new(&path);

    assert_eq!(store.get(), &FilterSettings::default());
    assert_eq!(
        store.load_outcome(),
        &LoadOutcome::Defaults(FallbackReason::Missing)
    );
    // 只讀取不應建立檔案
    assert!(!path.exists());
}

#[test]
fn test_invalid_json_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");
    write_settings(&path, r#"{"excluded_keywords": ["spam""#);

    let store = FilterSettingsStore::new(&path);

    assert_eq!(store.get(), &FilterSettings::default());
    assert_eq!(
        store.load_outcome(),
        &LoadOutcome::Defaults(FallbackReason::Malformed)
    );
}

#[test]
fn test_save_then_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");

    let mut store = FilterSettingsStore::new(&path);
    store
        .update_keywords(
            KeywordList::Excluded,
            vec!["красоты".to_string(), "маркетплейс".to_string()],
        )
        .unwrap();
    store
        .update_keywords(KeywordList::Included, vec!["adwords".to_string()])
        .unwrap();
    store.set_days_limit(14).unwrap();

    let reloaded = FilterSettingsStore::new(&path);
    assert_eq!(reloaded.get(), store.get());

    // 再存一次內容不變
    let before = fs::read_to_string(&path).unwrap();
    reloaded.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_update_excluded_keywords_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");
    let mut store = FilterSettingsStore::new(&path);

    store
        .update_keywords(
            KeywordList::Excluded,
            vec!["spam".to_string(), "ad".to_string()],
        )
        .unwrap();

    assert_eq!(store.get().excluded_keywords, vec!["spam", "ad"]);
    assert_eq!(read_json(&path)["excluded_keywords"], json!(["spam", "ad"]));
}

#[test]
fn test_update_keywords_by_key_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");
    let mut store = FilterSettingsStore::new(&path);

    let list: KeywordList = "included_keywords".parse().unwrap();
    store.update_keywords(list, vec!["seo".to_string()]).unwrap();

    assert_eq!(read_json(&path)["included_keywords"], json!(["seo"]));
}

#[test]
fn test_set_days_limit_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");
    let mut store = FilterSettingsStore::new(&path);

    store.set_days_limit(7).unwrap();

    assert_eq!(store.get().days_limit, 7);
    assert_eq!(FilterSettingsStore::new(&path).get().days_limit, 7);
}

#[test]
fn test_partial_merge_keeps_defaults_for_bad_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");
    write_settings(
        &path,
        r#"{"excluded_keywords": "spam", "included_keywords": ["seo"], "days_limit": 5, "mode": "include"}"#,
    );

    let store = FilterSettingsStore::new(&path);

    assert!(store.get().excluded_keywords.is_empty());
    assert_eq!(store.get().included_keywords, vec!["seo"]);
    assert_eq!(store.get().days_limit, 5);

    let LoadOutcome::Merged {
        mut applied,
        mut rejected,
    } = store.load_outcome().clone()
    else {
        panic!("expected a merged outcome");
    };
    applied.sort();
    rejected.sort();
    assert_eq!(applied, vec!["days_limit", "included_keywords"]);
    assert_eq!(rejected, vec!["excluded_keywords", "mode"]);
}

#[test]
fn test_save_rewrites_whole_file_without_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");
    write_settings(&path, r#"{"days_limit": 1, "legacy": true}"#);

    let mut store = FilterSettingsStore::new(&path);
    store.set_days_limit(2).unwrap();

    assert_eq!(
        read_json(&path),
        json!({ "excluded_keywords": [], "included_keywords": [], "days_limit": 2 })
    );
}

#[test]
fn test_stores_do_not_share_state() {
    let dir = TempDir::new().unwrap();
    let mut first = FilterSettingsStore::new(dir.path().join("first.json"));
    let second = FilterSettingsStore::new(dir.path().join("second.json"));

    first
        .update_keywords(KeywordList::Excluded, vec!["spam".to_string()])
        .unwrap();
    first.set_days_limit(30).unwrap();

    assert_eq!(second.get(), &FilterSettings::default());
    assert_eq!(
        FilterSettingsStore::new(dir.path().join("third.json")).get(),
        &FilterSettings::default()
    );
}

#[test]
fn test_save_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("data");
    write_settings(&blocker, "not a directory");

    let mut store = FilterSettingsStore::new(blocker.join("filter_settings.json"));
    let err = store
        .update_keywords(KeywordList::Included, vec!["seo".to_string()])
        .unwrap_err();

    assert!(format!("{err:#}").contains("filter_settings.json"));
}

#[test]
fn test_whole_number_float_days_limit_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filter_settings.json");
    write_settings(&path, r#"{"days_limit": 7.0, "excluded_keywords": ["a"]}"#);

    let store = FilterSettingsStore::new(&path);

    assert_eq!(
        store.get(),
        &FilterSettings {
            excluded_keywords: vec!["a".to_string()],
            included_keywords: vec![],
            days_limit: 7,
        }
    );

    write_settings(&path, r#"{"days_limit": 7.5}"#);
    assert_eq!(FilterSettingsStore::new(&path).get().days_limit, 3);
}
