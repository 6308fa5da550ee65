use crate::config::types::{
    AppConfig, FallbackReason, FilterSettings, FilterSettingsStore, KeywordList, Language,
    LoadOutcome,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SETTINGS_PATH_ENV: &str = "FILTER_SETTINGS_PATH";
pub const LANGUAGE_ENV: &str = "FILTER_SETTINGS_LANG";

impl FilterSettingsStore {
    /// 以預設值建立，並嘗試從 `path` 合併覆蓋值
    ///
    /// 讀取或解析失敗不會回傳錯誤，結果可由 [`Self::load_outcome`] 取得。
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut settings = FilterSettings::default();
        let load_outcome = Self::load_into(&path, &mut settings);

        Self {
            path,
            settings,
            load_outcome,
        }
    }

    fn load_into(path: &Path, settings: &mut FilterSettings) -> LoadOutcome {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return LoadOutcome::Defaults(FallbackReason::Missing);
            }
            Err(_) => return LoadOutcome::Defaults(FallbackReason::Unreadable),
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(overrides)) => settings.merge(overrides),
            Ok(_) => LoadOutcome::Defaults(FallbackReason::NotAnObject),
            Err(_) => LoadOutcome::Defaults(FallbackReason::Malformed),
        }
    }

    #[must_use]
    pub fn get(&self) -> &FilterSettings {
        &self.settings
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }
}

impl FilterSettings {
    /// 逐一合併 JSON 物件中的 key
    ///
    /// 型別正確的已知 key 覆蓋目前值；未知 key 或型別錯誤的值保留原值並記入 `rejected`。
    pub fn merge(&mut self, overrides: Map<String, Value>) -> LoadOutcome {
        let mut applied = Vec::new();
        let mut rejected = Vec::new();

        for (key, value) in overrides {
            let accepted = match key.as_str() {
                "days_limit" => assign_days_limit(&mut self.days_limit, &value),
                other => match other.parse::<KeywordList>() {
                    Ok(list) => assign(self.keywords_mut(list), value),
                    Err(_) => false,
                },
            };

            if accepted {
                applied.push(key);
            } else {
                rejected.push(key);
            }
        }

        LoadOutcome::Merged { applied, rejected }
    }
}

/// 接受整數或小數部分為 0 的浮點數（例如 `7.0`），其餘數字與非數字一律拒絕
fn assign_days_limit(slot: &mut i64, value: &Value) -> bool {
    let days = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    });

    match days {
        Some(days) => {
            *slot = days;
            true
        }
        None => false,
    }
}

fn assign<T: DeserializeOwned>(slot: &mut T, value: Value) -> bool {
    match serde_json::from_value(value) {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 由任意查詢函式建立，方便測試時不動到行程環境變數
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let settings_path = lookup(SETTINGS_PATH_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or(defaults.settings_path, PathBuf::from);

        let language = lookup(LANGUAGE_ENV)
            .map_or(defaults.language, |tag| Language::from_tag(&tag));

        Self {
            settings_path,
            language,
        }
    }
}
