#[macro_use]
extern crate rust_i18n;

pub mod config;
pub mod filter;
pub mod init;
pub mod menu;
pub mod tools;

i18n!("locales", fallback = "en-US");

use anyhow::Result;
use console::{Term, style};

pub fn pause(term: &Term) -> Result<()> {
    println!("\n{}", style(t!("common.press_enter")).dim());
    term.read_line()?;
    Ok(())
}
