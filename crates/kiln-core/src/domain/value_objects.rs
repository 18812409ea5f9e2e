//! Domain value objects: Archetype, LogLevel, SettingValue, ConfigFormat,
//! WriteOutcome.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. This file's
//! only job is to define the types, their string representations, and their
//! `FromStr` parsers.

use crate::domain::error::{ConfigError, DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ── Archetype ────────────────────────────────────────────────────────────────

/// One of the four fixed code-generation shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Module,
    Service,
    Model,
    Util,
}

impl Archetype {
    pub const ALL: [Self; 4] = [Self::Module, Self::Service, Self::Model, Self::Util];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Service => "service",
            Self::Model => "model",
            Self::Util => "util",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "module" | "mod" => Ok(Self::Module),
            "service" | "svc" => Ok(Self::Service),
            "model" => Ok(Self::Model),
            "util" | "utility" => Ok(Self::Util),
            other => Err(DomainError::UnknownArchetype(other.to_string())),
        }
    }
}

// ── LogLevel ─────────────────────────────────────────────────────────────────

/// Log level accepted by the `log_level` setting.
///
/// Parsing is case-insensitive; the canonical spelling is upper-case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub const fn filter_directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(ConfigError::invalid(
                "log_level",
                format!("'{s}' is not one of DEBUG, INFO, WARNING, ERROR"),
            )),
        }
    }
}

// ── SettingValue ─────────────────────────────────────────────────────────────

/// A raw value as supplied by a configuration source, before coercion.
///
/// Environment sources only ever produce `Text`; structured files keep their
/// native scalar types. Tables and arrays become `Nested` so the field registry
/// can reject them with a readable type name.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
    Nested(&'static str),
}

impl SettingValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Human-readable type name used in validation messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::Null => "null",
            Self::Nested(kind) => kind,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ── ConfigFormat ─────────────────────────────────────────────────────────────

/// File formats accepted by `ConfigStore::load_external`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// `KEY=VALUE` per line; triggers a full re-derivation.
    EnvFile,
    /// Structured key/value mapping; applied as a shallow patch.
    Toml,
    /// Structured key/value mapping; applied as a shallow patch.
    Json,
}

impl ConfigFormat {
    /// Detect the format from a path's extension (case-insensitive).
    ///
    /// A file literally named `.env` has no extension but is the conventional
    /// environment file, so it is recognised by name.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if path.file_name().and_then(|n| n.to_str()) == Some(".env") {
            return Ok(Self::EnvFile);
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "env" => Ok(Self::EnvFile),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: if extension.is_empty() {
                    "<none>".into()
                } else {
                    format!(".{extension}")
                },
            }),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EnvFile => "env",
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── WriteOutcome ─────────────────────────────────────────────────────────────

/// What happened when a file was offered to the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// The file did not exist and was written.
    Created,
    /// The file already existed and was left untouched.
    Skipped,
}

impl WriteOutcome {
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Skipped => f.write_str("skipped"),
        }
    }
}
