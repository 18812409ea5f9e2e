//! `kiln info` — show the resolved configuration.

use kiln_core::{application::ConfigStore, domain::Settings};

use crate::{error::CliResult, output::OutputManager};

pub fn execute(store: &ConfigStore, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(store.settings())?;
        return Ok(());
    }

    output.header("Project configuration")?;
    print_settings(store.settings(), output)
}

/// One aligned `field = value` line per setting, in registry order.
pub fn print_settings(settings: &Settings, output: &OutputManager) -> CliResult<()> {
    for (name, value) in settings.entries() {
        output.print(&format!("  {name:<13} = {value}"))?;
    }
    Ok(())
}
