//! Settings bootstrap.
//!
//! Builds the [`ConfigStore`] once at startup and hands it down by value.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `run --debug` / `--no-debug`
//! 2. `--config FILE` (`.env` reloads, `.toml`/`.json` patch)
//! 3. Process environment variables
//! 4. `.env` in the current directory
//! 5. Built-in defaults

use std::path::Path;

use kiln_adapters::{DOTENV_FILE, FileConfigParser, LocalFilesystem, capture_environment};
use kiln_core::application::ConfigStore;
use tracing::debug;

use crate::{cli::GlobalArgs, error::CliResult};

/// Resolve settings for this invocation.
pub fn load(args: &GlobalArgs, debug_override: Option<bool>) -> CliResult<ConfigStore> {
    let environment = capture_environment(Path::new(DOTENV_FILE));

    let mut store = ConfigStore::resolve(
        environment,
        Box::new(LocalFilesystem::new()),
        Box::new(FileConfigParser::new()),
    )?;

    if let Some(path) = &args.config {
        store.load_external(path)?;
    }

    if let Some(debug) = debug_override {
        store.set_debug(debug)?;
    }

    debug!(settings = ?store.settings(), "Settings ready");
    Ok(store)
}
