//! CLI error type, exit codes and the stderr report.

use std::error::Error;
use std::fmt::Write as _;
use std::iter;

use owo_colors::OwoColorize;
use thiserror::Error;

use kiln_core::domain::{ConfigError, FIELDS};
use kiln_core::error::KilnError;

pub use kiln_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// `config get` was asked for a field that does not exist.
    #[error("Unknown setting '{key}'")]
    UnknownSetting { key: String },

    /// Settings could not be resolved from the environment or a config file.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scaffolding failed in `kiln-core`.
    #[error("{0}")]
    Core(#[from] KilnError),

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownSetting { .. } => iter::once("Known settings:".to_string())
                .chain(
                    FIELDS
                        .iter()
                        .map(|field| format!("  • {:<13} - {}", field.name, field.kind)),
                )
                .chain(iter::once("Example: kiln config get workers".to_string()))
                .collect(),
            Self::Config(e) => e.suggestions(),
            Self::Core(e) => e.suggestions(),
            Self::Io(_) => vec!["Check that stdout is still open".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownSetting { .. } => ErrorCategory::UserError,
            Self::Config(e) => e.category().into(),
            Self::Core(e) => e.category().into(),
            Self::Io(_) => ErrorCategory::Internal,
        }
    }

    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Underlying causes whose text is not already part of the message.
    fn causes(&self) -> Vec<String> {
        let message = self.to_string();
        iter::successors(self.source(), |e| (*e).source())
            .map(ToString::to_string)
            .filter(|cause| !message.contains(cause.as_str()))
            .collect()
    }

    /// Text written to stderr when a command fails.
    ///
    /// `verbose` adds the cause chain; `color` enables ANSI styling.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_string() }
        };

        let mut out = format!(
            "\n{} {self}\n",
            paint("Error:", |s| s.red().bold().to_string())
        );

        if verbose {
            for cause in self.causes() {
                let line = format!("Caused by: {cause}");
                let _ = writeln!(out, "  {}", paint(&line, |s| s.dimmed().to_string()));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Suggestions:", |s| s.yellow().bold().to_string())
            );
            for suggestion in suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            let hint = "Use -v / --verbose for more details.";
            let _ = writeln!(out, "\n{}", paint(hint, |s| s.dimmed().to_string()));
        }
        out
    }

    pub fn log(&self) {
        let category = self.category();
        let causes = self.causes();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, ?causes, error = %self, "Command failed")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, ?causes, error = %self, "Command failed")
            }
        }
    }
}

/// Error categories as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Configuration => Self::Configuration,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use kiln_core::application::ApplicationError;
    use kiln_core::domain::DomainError;

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn missing_config_file_exits_3() {
        let err = CliError::Config(ConfigError::FileNotFound {
            path: "missing.toml".into(),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn invalid_config_value_exits_4() {
        let err = CliError::Config(ConfigError::ValidationFailure {
            field: "workers".into(),
            reason: "must be at least 1".into(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn invalid_unit_name_exits_2() {
        let err = CliError::Core(KilnError::Domain(DomainError::InvalidName {
            name: "a/b".into(),
            reason: "path separators".into(),
        }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn filesystem_failure_exits_1() {
        let err = CliError::Core(KilnError::Application(ApplicationError::FilesystemError {
            path: "src/app".into(),
            reason: "read-only".into(),
        }));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed")).exit_code(),
            1
        );
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn unknown_setting_lists_known_fields() {
        let err = CliError::UnknownSetting { key: "colour".into() };
        let suggestions = err.suggestions();
        assert_eq!(suggestions.len(), FIELDS.len() + 2);
        for name in ["debug", "database_url", "workers", "log_level"] {
            assert!(suggestions.iter().any(|s| s.contains(name)), "{name}");
        }
        assert_eq!(err.exit_code(), 2);
    }

    // ── report ────────────────────────────────────────────────────────────

    #[test]
    fn plain_report_has_message_suggestions_and_hint() {
        let err = CliError::Config(ConfigError::UnknownField {
            field: "colour".into(),
        });
        let report = err.report(false, false);
        assert!(report.starts_with("\nError: Configuration error: "));
        assert!(report.contains("colour"));
        assert!(report.contains("--verbose"));
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn verbose_report_shows_new_causes_only() {
        let err = CliError::from(io::Error::other("disk full"));
        let report = err.report(true, false);
        assert!(!report.contains("Caused by"));
        assert!(!report.contains("--verbose"));

        let err = CliError::Core(KilnError::Domain(DomainError::InvalidName {
            name: "a/b".into(),
            reason: "path separators".into(),
        }));
        assert!(err.causes().is_empty());
    }

    #[test]
    fn colored_report_uses_ansi() {
        let err = CliError::UnknownSetting { key: "colour".into() };
        assert!(err.report(false, true).contains('\u{1b}'));
    }
}
