use anyhow::Result;
use console::{Term, style};
use filter_settings::config::{AppConfig, FallbackReason, FilterSettingsStore, LoadOutcome};
use filter_settings::init;
use filter_settings::menu::show_main_menu;
use log::{info, warn};
use rust_i18n::t;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();

    let app_config = AppConfig::from_env();
    rust_i18n::set_locale(app_config.language.as_str());

    let mut store = FilterSettingsStore::new(&app_config.settings_path);
    report_load_outcome(&store);

    loop {
        match show_main_menu(&term, &mut store) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e:#}");
                eprintln!("{} {:#}", style(t!("main_menu.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}

fn report_load_outcome(store: &FilterSettingsStore) {
    let path = store.path().display();

    match store.load_outcome() {
        LoadOutcome::Merged { applied, rejected } => {
            info!("Loaded filter settings from {path}, applied {applied:?}");
            if !rejected.is_empty() {
                warn!("Ignored unknown or mistyped keys in {path}: {rejected:?}");
            }
        }
        LoadOutcome::Defaults(FallbackReason::Missing) => {
            info!("No filter settings at {path}, using defaults");
        }
        LoadOutcome::Defaults(reason) => {
            warn!("Could not load filter settings from {path} ({reason:?}), using defaults");
        }
    }
}
