// ============================================================================
// domain/error.rs - DOMAIN AND CONFIGURATION ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type for scaffolding rules.
///
/// All errors are:
/// - Cloneable (reports can be kept after the failing call)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid scaffold name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid module layout at '{path}': {reason}")]
    InvalidLayout { path: PathBuf, reason: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown archetype '{0}' (expected module, service, model or util)")]
    UnknownArchetype(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("'{name}' cannot be used as a module directory"),
                "Use a plain identifier such as: widget, billing, user_profile".into(),
            ],
            Self::InvalidLayout { path, .. } => vec![
                format!("Check the package root: {}", path.display()),
                "Pass --package-root src/<package> explicitly".into(),
            ],
            Self::UnknownArchetype(_) => vec![
                "Supported archetypes: module, service, model, util".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::InvalidLayout { .. } => ErrorCategory::Validation,
            Self::UnknownArchetype(_) => ErrorCategory::NotFound,
        }
    }
}

/// Failures raised while loading or overriding settings.
///
/// Every variant leaves the settings snapshot untouched: overrides are staged
/// on a copy and only swapped in once the copy validates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported configuration format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Malformed configuration payload in {path}: {reason}")]
    MalformedPayload { path: PathBuf, reason: String },

    #[error("Invalid value for '{field}': {reason}")]
    ValidationFailure { field: String, reason: String },

    #[error("Unknown configuration field '{field}'")]
    UnknownField { field: String },

    #[error("Failed to read configuration file {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailure {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileNotFound { path } => vec![
                format!("No file exists at {}", path.display()),
                "Check the path passed to --config".into(),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Supported formats: .env, .toml, .json".into(),
            ],
            Self::MalformedPayload { .. } => vec![
                "The top level of a .toml or .json file must be a key/value mapping".into(),
                "Example: workers = 8".into(),
            ],
            Self::ValidationFailure { field, .. } => vec![
                format!("Fix the value of '{field}'"),
                "log_level accepts: DEBUG, INFO, WARNING, ERROR".into(),
                "workers must be a positive integer".into(),
            ],
            Self::UnknownField { .. } => vec![
                "Known fields: debug, database_url, workers, log_level".into(),
            ],
            Self::Unreadable { .. } => vec!["Check that the file is readable".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::Unreadable { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
