use crate::config::{FilterSettingsStore, KeywordList};
use crate::menu::handlers::{edit_days_limit, edit_keywords, show_current_settings};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use rust_i18n::t;

/// 顯示主選單並執行選擇的項目
///
/// 回傳 `false` 表示使用者選擇離開
pub fn show_main_menu(term: &Term, store: &mut FilterSettingsStore) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());
    println!(
        "{}",
        style(t!("main_menu.file", path = store.path().display().to_string())).dim()
    );

    let options = vec![
        t!("main_menu.opt_show"),
        t!("main_menu.opt_excluded"),
        t!("main_menu.opt_included"),
        t!("main_menu.opt_days_limit"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            show_current_settings(term, store)?;
            Ok(true)
        }
        Some(1) => {
            edit_keywords(term, store, KeywordList::Excluded)?;
            Ok(true)
        }
        Some(2) => {
            edit_keywords(term, store, KeywordList::Included)?;
            Ok(true)
        }
        Some(3) => {
            edit_days_limit(term, store)?;
            Ok(true)
        }
        Some(4) => Ok(false),
        None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}
