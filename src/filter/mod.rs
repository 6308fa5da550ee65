//! 項目過濾
//!
//! 依據 [`FilterSettings`](crate::config::FilterSettings) 判斷項目是否應被處理：
//! 關鍵字比對（包含或排除模式）加上發布天數上限

mod item_filter;
mod keyword_matcher;
pub mod recency;

pub use item_filter::{FilterItem, FilterMode, ItemFilter, Verdict};
pub use keyword_matcher::KeywordMatcher;
pub use recency::{is_within_days_limit, parse_posted_age};
