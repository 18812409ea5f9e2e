//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `kiln-core` and
//! `kiln-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)   | Filter level                         |
//! |-----------|--------------------------------------|
//! | (none)    | `log_level` setting (`debug` forces DEBUG) |
//! | `-v`      | INFO                                 |
//! | `-vv`     | DEBUG                                |
//! | `-vvv`    | TRACE                                |
//! | `--quiet` | ERROR                                |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use kiln_core::domain::{LogLevel, Settings};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire. `settings`
/// is `None` when they failed to resolve; the level then falls back to WARN.
pub fn init_logging(args: &GlobalArgs, settings: Option<&Settings>) -> anyhow::Result<()> {
    let level = derive_level(args, settings);

    // RUST_LOG wins; otherwise every kiln crate gets the same level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "kiln={level},kiln_core={level},kiln_adapters={level}"
        ))
    });

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate flags, then settings, to a level string.
fn derive_level(args: &GlobalArgs, settings: Option<&Settings>) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => {}
        1 => return "info",
        2 => return "debug",
        _ => return "trace",
    }

    match settings {
        Some(s) if s.debug() => LogLevel::Debug.filter_directive(),
        Some(s) => s.log_level().filter_directive(),
        None => "warn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use kiln_core::domain::{Environment, SettingValue};

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    fn settings(log_level: &str, debug: bool) -> Settings {
        let mut s = Settings::derive(&Environment::empty()).unwrap();
        s.apply("log_level", &SettingValue::text(log_level)).unwrap();
        s.apply("debug", &SettingValue::Bool(debug)).unwrap();
        s
    }

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(&args_with(0, true), None), "error");
    }

    #[test]
    fn level_without_settings() {
        assert_eq!(derive_level(&args_with(0, false), None), "warn");
    }

    #[test]
    fn level_verbose_flags() {
        let s = settings("ERROR", false);
        assert_eq!(derive_level(&args_with(1, false), Some(&s)), "info");
        assert_eq!(derive_level(&args_with(2, false), Some(&s)), "debug");
        assert_eq!(derive_level(&args_with(3, false), Some(&s)), "trace");
        assert_eq!(derive_level(&args_with(10, false), Some(&s)), "trace");
    }

    #[test]
    fn level_from_settings() {
        assert_eq!(
            derive_level(&args_with(0, false), Some(&settings("WARNING", false))),
            "warn"
        );
        assert_eq!(
            derive_level(&args_with(0, false), Some(&settings("INFO", false))),
            "info"
        );
    }

    #[test]
    fn debug_setting_forces_debug_level() {
        assert_eq!(
            derive_level(&args_with(0, false), Some(&settings("ERROR", true))),
            "debug"
        );
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true), None), "error");
    }
}
