use crate::config::types::{FilterSettingsStore, KeywordList};
use crate::tools::ensure_directory_exists;
use anyhow::{Context, Result};
use log::debug;
use std::fs;

impl FilterSettingsStore {
    /// 將目前設定完整覆寫到設定檔
    ///
    /// 格式化輸出，非 ASCII 字元原樣寫入。寫入失敗直接回傳錯誤。
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.settings)
            .context("Failed to serialize filter settings")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory_exists(parent).with_context(|| {
                format!("Failed to write filter settings to {}", self.path.display())
            })?;
        }

        fs::write(&self.path, content).with_context(|| {
            format!("Failed to write filter settings to {}", self.path.display())
        })?;

        debug!("Filter settings saved to {}", self.path.display());
        Ok(())
    }

    /// 以 `words` 取代指定的關鍵字清單後寫回檔案
    pub fn update_keywords(&mut self, list: KeywordList, words: Vec<String>) -> Result<()> {
        *self.settings.keywords_mut(list) = words;
        self.save()
    }

    pub fn set_days_limit(&mut self, days: i64) -> Result<()> {
        self.settings.days_limit = days;
        self.save()
    }
}
