//! `kiln run` — start the main process with the resolved configuration.
//!
//! `--debug` / `--no-debug` are applied while the store is built (see
//! `crate::config`), so logging already reflects them here.

use kiln_core::application::ConfigStore;
use tracing::info;

use crate::{
    cli::GlobalArgs, commands::info::print_settings, error::CliResult, output::OutputManager,
};

pub fn execute(global: &GlobalArgs, store: &ConfigStore, output: &OutputManager) -> CliResult<()> {
    let settings = store.settings();

    if output.is_json() {
        output.json(settings)?;
    } else {
        if let Some(path) = &global.config {
            output.success(&format!(
                "Extra configuration loaded from {}",
                path.display()
            ))?;
        }
        output.header("Starting system")?;
        print_settings(settings, output)?;
        output.info("\u{2192} Executing main logic...")?;
    }

    info!(
        debug = settings.debug(),
        workers = settings.workers(),
        "Main logic started"
    );
    Ok(())
}
