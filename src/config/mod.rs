pub mod load;
pub mod save;
pub mod types;

pub use load::{LANGUAGE_ENV, SETTINGS_PATH_ENV};
pub use types::{
    AppConfig, DEFAULT_DAYS_LIMIT, DEFAULT_SETTINGS_PATH, FallbackReason, FilterSettings,
    FilterSettingsStore, KeywordList, Language, LoadOutcome,
};
