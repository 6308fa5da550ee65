//! 依過濾設定判斷項目是否應被處理

use super::keyword_matcher::KeywordMatcher;
use super::recency::{is_within_days_limit, parse_posted_age};
use crate::config::FilterSettings;
use log::{debug, info};
use std::fmt;
use std::time::Duration;

/// 過濾模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// 必須命中至少一個包含關鍵字
    Include,
    /// 命中任何排除關鍵字即被過濾
    #[default]
    Exclude,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => write!(f, "include"),
            Self::Exclude => write!(f, "exclude"),
        }
    }
}

/// 待過濾的項目
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterItem {
    pub id: String,
    pub title: String,
    pub body: String,
    /// 相對發布時間文字，例如「2 часа назад」
    pub posted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { matched: Vec<String> },
    Excluded { matched: Vec<String> },
    NoIncludedMatch,
    TooOld { age: Duration },
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

pub struct ItemFilter {
    mode: FilterMode,
    days_limit: i64,
    excluded: KeywordMatcher,
    included: KeywordMatcher,
}

impl ItemFilter {
    #[must_use]
    pub fn new(settings: &FilterSettings, mode: FilterMode) -> Self {
        Self {
            mode,
            days_limit: settings.days_limit,
            excluded: KeywordMatcher::new(&settings.excluded_keywords),
            included: KeywordMatcher::new(&settings.included_keywords),
        }
    }

    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    #[must_use]
    pub fn evaluate(&self, item: &FilterItem) -> Verdict {
        // 無法解析的發布時間視為新項目
        if let Some(age) = item
            .posted
            .as_deref()
            .and_then(parse_posted_age)
            .filter(|age| !is_within_days_limit(*age, self.days_limit))
        {
            return Verdict::TooOld { age };
        }

        let text = format!("{} {}", item.title, item.body);

        match self.mode {
            FilterMode::Exclude => {
                let matched = self.excluded.find_matches(&text);
                if matched.is_empty() {
                    Verdict::Accepted { matched }
                } else {
                    Verdict::Excluded { matched }
                }
            }
            FilterMode::Include => {
                let matched = self.included.find_matches(&text);
                if matched.is_empty() {
                    Verdict::NoIncludedMatch
                } else {
                    Verdict::Accepted { matched }
                }
            }
        }
    }

    /// 保留通過過濾的項目
    pub fn retain(&self, items: Vec<FilterItem>) -> Vec<FilterItem> {
        let total = items.len();

        if self.mode == FilterMode::Include && self.included.is_empty() {
            info!("No included keywords configured, all {total} items filtered out");
            return Vec::new();
        }

        let accepted: Vec<FilterItem> = items
            .into_iter()
            .filter(|item| {
                let verdict = self.evaluate(item);
                match &verdict {
                    Verdict::Accepted { matched } if !matched.is_empty() => {
                        debug!("Item {} accepted, matched {:?}", item.id, matched);
                    }
                    Verdict::Accepted { .. } => debug!("Item {} accepted", item.id),
                    Verdict::Excluded { matched } => {
                        debug!("Item {} excluded by {:?}", item.id, matched);
                    }
                    Verdict::NoIncludedMatch => {
                        debug!("Item {} has no included keyword", item.id);
                    }
                    Verdict::TooOld { age } => {
                        debug!("Item {} too old ({}s)", item.id, age.as_secs());
                    }
                }
                verdict.is_accepted()
            })
            .collect();

        info!(
            "Filtered {} of {} items ({} mode)",
            total - accepted.len(),
            total,
            self.mode
        );
        accepted
    }
}
