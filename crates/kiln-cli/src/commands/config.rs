//! `kiln config` — read configuration values.

use kiln_core::{application::ConfigStore, domain::Settings};

use crate::{
    cli::ConfigCommands,
    commands::info::print_settings,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, store: &ConfigStore, output: &OutputManager) -> CliResult<()> {
    let settings = store.settings();

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(settings, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.print(&value)?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(settings)?;
            } else {
                output.header("Current Configuration:")?;
                print_settings(settings, output)?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(settings: &Settings, key: &str) -> CliResult<String> {
    settings
        .get(key)
        .ok_or_else(|| CliError::UnknownSetting { key: key.to_string() })
}

// ── tests ─────────────────────────────────────────────────────────────────────
