//! # Kiln CLI
//!
//! Layered project settings and idempotent module scaffolding.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Resolve settings (defaults, `.env`, environment, `--config`, flags).
//! 3. Initialise the tracing subscriber from flags and settings.
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal / filesystem error      |
//! |  2   | User / input error               |
//! |  3   | Configuration file not found     |
//! |  4   | Invalid configuration            |

use std::process::ExitCode;

use clap::Parser;
use kiln_core::{application::ConfigStore, error::KilnError};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if !e.use_stderr() {
                // --help / --version
                let _ = e.print();
                return ExitCode::SUCCESS;
            }
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Resolve settings ───────────────────────────────────────────────
    // Completions never need settings; a broken .env must not block them.
    let store = match &cli.command {
        Commands::Completions(_) => None,
        _ => Some(config::load(&cli.global, cli.debug_override())),
    };
    let settings = match &store {
        Some(Ok(store)) => Some(store.settings()),
        _ => None,
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global, settings) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;
    let store = match store.transpose() {
        Ok(store) => store,
        Err(e) => return handle_error(e, verbose, no_color),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, store, output) {
        Ok(()) => {
            info!("Kiln completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, store: Option<ConfigStore>, output: OutputManager) -> CliResult<()> {
    let Cli { global, command } = cli;

    match command {
        Commands::Info => commands::info::execute(resolved(&store)?, &output),
        Commands::Run(_) => commands::run::execute(&global, resolved(&store)?, &output),
        Commands::Generate(args) => commands::generate::execute(args, &output),
        Commands::Config(cmd) => commands::config::execute(cmd, resolved(&store)?, &output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

fn resolved(store: &Option<ConfigStore>) -> CliResult<&ConfigStore> {
    store.as_ref().ok_or_else(|| {
        KilnError::Internal {
            message: "settings were not resolved".into(),
        }
        .into()
    })
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // stderr, so the report survives a redirected stdout.
    let color = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.report(verbose, color));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
