use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// 預設設定檔路徑（相對於工作目錄）
pub const DEFAULT_SETTINGS_PATH: &str = "data/filter_settings.json";

pub const DEFAULT_DAYS_LIMIT: i64 = 3;

/// 過濾設定：排除關鍵字、包含關鍵字與天數上限
///
/// 欄位順序即為寫入 JSON 時的 key 順序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSettings {
    pub excluded_keywords: Vec<String>,
    pub included_keywords: Vec<String>,
    pub days_limit: i64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            excluded_keywords: Vec::new(),
            included_keywords: Vec::new(),
            days_limit: DEFAULT_DAYS_LIMIT,
        }
    }
}

impl FilterSettings {
    #[must_use]
    pub fn keywords(&self, list: KeywordList) -> &[String] {
        match list {
            KeywordList::Excluded => &self.excluded_keywords,
            KeywordList::Included => &self.included_keywords,
        }
    }

    pub(crate) fn keywords_mut(&mut self, list: KeywordList) -> &mut Vec<String> {
        match list {
            KeywordList::Excluded => &mut self.excluded_keywords,
            KeywordList::Included => &mut self.included_keywords,
        }
    }
}

/// 關鍵字清單種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordList {
    Excluded,
    Included,
}

impl KeywordList {
    pub const ALL: [Self; 2] = [Self::Excluded, Self::Included];

    /// 對應的 JSON key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Excluded => "excluded_keywords",
            Self::Included => "included_keywords",
        }
    }
}

impl fmt::Display for KeywordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for KeywordList {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|list| list.key() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown keyword list: {s}"))
    }
}

/// 載入設定檔時沒有合併任何值的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// 檔案不存在
    Missing,
    /// 檔案存在但無法讀取
    Unreadable,
    /// 內容不是合法的 JSON
    Malformed,
    /// 合法 JSON，但頂層不是物件
    NotAnObject,
}

/// 建構時載入設定檔的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 檔案為 JSON 物件，`applied` 中的 key 已覆蓋預設值，
    /// `rejected` 中的 key 因名稱未知或型別錯誤而被忽略
    Merged {
        applied: Vec<String>,
        rejected: Vec<String>,
    },
    /// 未合併任何值，全部使用預設值
    Defaults(FallbackReason),
}

impl LoadOutcome {
    #[must_use]
    pub const fn is_defaults(&self) -> bool {
        matches!(self, Self::Defaults(_))
    }
}

/// 以 JSON 檔案為後端的過濾設定存放區
///
/// 建構時讀取一次，之後每次修改都會立即寫回檔案。
#[derive(Debug)]
pub struct FilterSettingsStore {
    pub(crate) path: PathBuf,
    pub(crate) settings: FilterSettings,
    pub(crate) load_outcome: LoadOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    EnUs,
    RuRu,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::EnUs, Self::RuRu];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::RuRu => "ru-RU",
        }
    }

    /// 不認得的值回退為 `en-US`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(tag.trim()))
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::RuRu => write!(f, "Русский"),
        }
    }
}

/// 執行期設定，來自環境變數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub settings_path: PathBuf,
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            language: Language::default(),
        }
    }
}
