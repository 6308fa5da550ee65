//! 發布時間解析
//!
//! 將「5 минут назад」「2 hours ago」「вчера」之類的相對時間轉為經過時間

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

static REGEX_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:минут[уы]?\s+назад|minutes?\s+ago)").expect("Invalid regex")
});

static REGEX_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:час(?:а|ов)?\s+назад|hours?\s+ago)").expect("Invalid regex")
});

static REGEX_DAYS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:(?:день|дня|дней)\s+назад|days?\s+ago)").expect("Invalid regex")
});

static REGEX_DAY_BEFORE_YESTERDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)позавчера|day\s+before\s+yesterday").expect("Invalid regex")
});

static REGEX_YESTERDAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)вчера|yesterday").expect("Invalid regex"));

static REGEX_TODAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)сегодня|today").expect("Invalid regex"));

/// 解析相對發布時間，無法辨識時回傳 `None`
///
/// 數字過大時飽和為 `Duration::MAX`，視為極舊的項目
#[must_use]
pub fn parse_posted_age(text: &str) -> Option<Duration> {
    let units: [(&Regex, u64); 3] = [
        (&*REGEX_MINUTES, SECONDS_PER_MINUTE),
        (&*REGEX_HOURS, SECONDS_PER_HOUR),
        (&*REGEX_DAYS, SECONDS_PER_DAY),
    ];

    for (regex, unit_seconds) in units {
        if let Some(caps) = regex.captures(text) {
            let age = caps[1]
                .parse::<u64>()
                .ok()
                .and_then(|amount| amount.checked_mul(unit_seconds))
                .map_or(Duration::MAX, Duration::from_secs);
            return Some(age);
        }
    }

    // 「позавчера」包含「вчера」，必須先比對
    if REGEX_DAY_BEFORE_YESTERDAY.is_match(text) {
        return Some(Duration::from_secs(2 * SECONDS_PER_DAY));
    }
    if REGEX_YESTERDAY.is_match(text) {
        return Some(Duration::from_secs(SECONDS_PER_DAY));
    }
    // 「今天」視為剛發布（經過 0 秒），而非整整 24 小時
    if REGEX_TODAY.is_match(text) {
        return Some(Duration::ZERO);
    }

    None
}

/// 經過時間是否未超過天數上限；負數上限視為 0
#[must_use]
pub fn is_within_days_limit(age: Duration, days_limit: i64) -> bool {
    let limit_seconds = u64::try_from(days_limit)
        .unwrap_or(0)
        .saturating_mul(SECONDS_PER_DAY);
    age <= Duration::from_secs(limit_seconds)
}
