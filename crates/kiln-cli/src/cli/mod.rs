//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kiln_core::domain::{Archetype, DomainError};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f525} Layered settings and module scaffolding",
    long_about = "Kiln resolves project settings from defaults, .env, the process \
                  environment and optional config files, and generates Python \
                  modules with their tests.",
    after_help = "EXAMPLES:\n\
        \x20 kiln info\n\
        \x20 kiln run --debug --config prod.toml\n\
        \x20 kiln generate service billing\n\
        \x20 kiln completions bash > /usr/share/bash-completion/completions/kiln",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `Some(_)` when `run` was given `--debug` or `--no-debug`.
    pub fn debug_override(&self) -> Option<bool> {
        match &self.command {
            Commands::Run(args) => args.debug_override(),
            _ => None,
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved configuration.
    #[command(
        about = "Show the current configuration",
        after_help = "EXAMPLES:\n\
            \x20 kiln info\n\
            \x20 kiln info --config app.toml --output-format json"
    )]
    Info,

    /// Run the main process with the resolved configuration.
    #[command(
        about = "Run the main process",
        after_help = "EXAMPLES:\n\
            \x20 kiln run\n\
            \x20 kiln run --debug\n\
            \x20 kiln run --config prod.env --no-debug"
    )]
    Run(RunArgs),

    /// Generate a module, service, model or utility with its test.
    #[command(
        visible_alias = "g",
        about = "Generate a module and its test",
        after_help = "EXAMPLES:\n\
            \x20 kiln generate module reports\n\
            \x20 kiln generate service billing\n\
            \x20 kiln generate model order --package-root src/shop\n\
            \x20 kiln generate util slugify"
    )]
    Generate(GenerateArgs),

    /// Inspect configuration values.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kiln config get workers\n\
            \x20 kiln config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
            \x20 kiln completions zsh  > ~/.zfunc/_kiln\n\
            \x20 kiln completions fish > ~/.config/fish/completions/kiln.fish"
    )]
    Completions(CompletionsArgs),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `kiln run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Force debug mode on.
    #[arg(long = "debug", conflicts_with = "no_debug", help = "Run in debug mode")]
    pub debug: bool,

    /// Force debug mode off.
    #[arg(long = "no-debug", help = "Run with debug mode disabled")]
    pub no_debug: bool,
}

impl RunArgs {
    pub fn debug_override(&self) -> Option<bool> {
        match (self.debug, self.no_debug) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `kiln generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What kind of unit to generate.
    #[arg(
        value_name = "ARCHETYPE",
        value_parser = parse_archetype,
        help = "Kind of unit to generate: module, service, model or util"
    )]
    pub archetype: Archetype,

    /// Unit name; becomes the directory, file and identifier stem.
    #[arg(value_name = "NAME", help = "Name of the unit")]
    pub name: String,

    /// Package directory the unit is created in.
    #[arg(
        long = "package-root",
        value_name = "DIR",
        env = "KILN_PACKAGE_ROOT",
        default_value = "src/app",
        help = "Package directory for generated modules"
    )]
    pub package_root: PathBuf,

    /// Directory the test file is created in.
    #[arg(
        long = "tests-root",
        value_name = "DIR",
        env = "KILN_TESTS_ROOT",
        default_value = "tests",
        help = "Directory for generated tests"
    )]
    pub tests_root: PathBuf,
}

/// Accepts the archetype names and their aliases (`mod`, `svc`, `utility`).
fn parse_archetype(s: &str) -> Result<Archetype, DomainError> {
    s.parse()
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `kiln config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a single setting.
    Get {
        /// Field name, e.g. `workers` (case-insensitive).
        key: String,
    },
    /// Print every setting.
    List,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kiln completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
