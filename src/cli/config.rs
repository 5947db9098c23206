//! Configuration CLI commands
//!
//! `init` writes a default settings file, `config` shows what is in effect.

use crate::config::{BankPaths, Settings};
use crate::error::BankResult;

/// Write the settings file, keeping an existing one untouched
pub fn handle_init_command(paths: &BankPaths, settings: &Settings) -> BankResult<()> {
    if paths.is_initialized() {
        println!(
            "Settings already exist at: {}",
            paths.settings_file().display()
        );
        return Ok(());
    }

    settings.save(paths)?;
    log::info!("wrote settings to {}", paths.settings_file().display());
    println!("Settings written to: {}", paths.settings_file().display());
    Ok(())
}

/// Print the resolved paths and settings
pub fn handle_config_command(paths: &BankPaths, settings: &Settings) {
    print!("{}", format_config(paths, settings));
}

/// Format the resolved paths and settings
pub fn format_config(paths: &BankPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("bank-menu Configuration\n");
    output.push_str("=======================\n");
    output.push_str(&format!(
        "Config directory: {}\n",
        paths.base_dir().display()
    ));
    output.push_str(&format!(
        "Settings file:    {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!(
        "  Welcome banner:  {}\n",
        if settings.show_welcome { "Yes" } else { "No" }
    ));
    output
}
