use crate::config::{FilterSettings, FilterSettingsStore, KeywordList};
use crate::pause;
use crate::tools::{format_keywords, parse_keywords};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use log::info;
use rust_i18n::t;
use std::time::Duration;

fn keyword_list_label(list: KeywordList) -> String {
    match list {
        KeywordList::Excluded => t!("settings.excluded").to_string(),
        KeywordList::Included => t!("settings.included").to_string(),
    }
}

fn display_keywords(words: &[String]) -> String {
    if words.is_empty() {
        t!("settings.empty").to_string()
    } else {
        format_keywords(words)
    }
}

fn print_settings(settings: &FilterSettings) {
    for list in KeywordList::ALL {
        println!(
            "  {} {}",
            style(keyword_list_label(list)).bold(),
            display_keywords(settings.keywords(list))
        );
    }
    println!(
        "  {} {}",
        style(t!("settings.days_limit")).bold(),
        settings.days_limit
    );
}

pub fn show_current_settings(term: &Term, store: &FilterSettingsStore) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.title")).cyan().bold());
    println!();
    print_settings(store.get());

    pause(term)
}

/// 編輯關鍵字清單
///
/// 輸入框預填目前的關鍵字，清空後送出即清除清單
pub fn edit_keywords(
    term: &Term,
    store: &mut FilterSettingsStore,
    list: KeywordList,
) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(keyword_list_label(list)).cyan().bold());
    println!("{}", style(t!("keywords.hint")).dim());
    println!();

    let current = store.get().keywords(list).to_vec();

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("keywords.prompt"))
        .with_initial_text(format_keywords(&current))
        .allow_empty(true)
        .interact_text_on(term)?;

    let words = parse_keywords(&input);

    if words == current {
        println!("\n{}", style(t!("settings.unchanged")).dim());
    } else {
        let count = words.len();
        store.update_keywords(list, words)?;
        info!("Updated {list}: {count} keywords");
        println!(
            "\n{} {}",
            style(t!("settings.saved")).green(),
            display_keywords(store.get().keywords(list))
        );
    }

    std::thread::sleep(Duration::from_secs(1));
    Ok(())
}

pub fn edit_days_limit(term: &Term, store: &mut FilterSettingsStore) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style(t!("settings.days_limit")).cyan().bold());
    println!();

    let current = store.get().days_limit;

    let days: i64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("days_limit.prompt"))
        .default(current)
        .interact_text_on(term)?;

    if days == current {
        println!("\n{}", style(t!("settings.unchanged")).dim());
    } else {
        store.set_days_limit(days)?;
        info!("Updated days_limit: {current} -> {days}");
        println!("\n{} {}", style(t!("settings.saved")).green(), days);
    }

    std::thread::sleep(Duration::from_secs(1));
    Ok(())
}
