//! 關鍵字輸入解析
//!
//! 使用者輸入以逗號或換行分隔，`#` 開頭的行視為註解

use std::collections::HashSet;

/// 將使用者輸入解析為關鍵字清單
///
/// 去除前後空白並轉為小寫，略過空字串與註解行，重複的關鍵字只保留第一次出現的位置。
#[must_use]
pub fn parse_keywords(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// 以逗號連接，用於顯示與預填輸入框
#[must_use]
pub fn format_keywords(words: &[String]) -> String {
    words.join(", ")
}
