//! The settings snapshot and its field registry.
//!
//! Every write to a [`Settings`] value goes through [`FIELDS`]: a static table
//! mapping each known field name to a coercing setter. Structured file patches,
//! environment derivation and direct overrides all share the same rules, and
//! unknown keys are rejected instead of silently ignored.

use serde::Serialize;

use super::environment::Environment;
use crate::domain::{
    error::ConfigError,
    value_objects::{LogLevel, SettingValue},
};

const DEFAULT_WORKERS: u32 = 4;

/// Fully resolved configuration at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    debug: bool,
    database_url: Option<String>,
    workers: u32,
    log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            database_url: None,
            workers: DEFAULT_WORKERS,
            log_level: LogLevel::Info,
        }
    }
}

impl Settings {
    /// Rebuild a snapshot from scratch: defaults first, then every field the
    /// environment defines.
    pub fn derive(env: &Environment) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        for field in FIELDS {
            if let Some(raw) = env.lookup(field.name) {
                (field.apply)(&mut settings, &SettingValue::text(raw))?;
            }
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Set a single field by name through the registry.
    pub fn apply(&mut self, key: &str, value: &SettingValue) -> Result<(), ConfigError> {
        let field = field(key).ok_or_else(|| ConfigError::UnknownField {
            field: key.to_string(),
        })?;
        (field.apply)(self, value)
    }

    /// Whole-object invariants, re-checked after every merge.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::invalid("workers", "must be at least 1"));
        }
        if self
            .database_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            return Err(ConfigError::invalid("database_url", "must not be blank"));
        }
        Ok(())
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn workers(&self) -> u32 {
        self.workers
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// `(field, display value)` pairs in registry order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        FIELDS
            .iter()
            .map(|f| (f.name, (f.display)(self)))
            .collect()
    }

    /// Display value of a single field.
    pub fn get(&self, key: &str) -> Option<String> {
        field(key).map(|f| (f.display)(self))
    }
}

// ── Field registry ───────────────────────────────────────────────────────────

/// One entry of the field registry.
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: &'static str,
    apply: fn(&mut Settings, &SettingValue) -> Result<(), ConfigError>,
    display: fn(&Settings) -> String,
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// All known fields, in display order.
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "debug",
        kind: "boolean",
        apply: |s, v| {
            s.debug = coerce_bool("debug", v)?;
            Ok(())
        },
        display: |s| s.debug.to_string(),
    },
    FieldSpec {
        name: "database_url",
        kind: "optional string",
        apply: |s, v| {
            s.database_url = coerce_optional_text("database_url", v)?;
            Ok(())
        },
        display: |s| s.database_url.clone().unwrap_or_else(|| "None".into()),
    },
    FieldSpec {
        name: "workers",
        kind: "integer",
        apply: |s, v| {
            s.workers = coerce_workers(v)?;
            Ok(())
        },
        display: |s| s.workers.to_string(),
    },
    FieldSpec {
        name: "log_level",
        kind: "DEBUG | INFO | WARNING | ERROR",
        apply: |s, v| {
            s.log_level = match v {
                SettingValue::Text(text) => text.parse::<LogLevel>()?,
                other => return Err(type_mismatch("log_level", "string", other)),
            };
            Ok(())
        },
        display: |s| s.log_level.to_string(),
    },
];

/// Find a registry entry by name, case-insensitively.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name.eq_ignore_ascii_case(name.trim()))
}

// ── Coercion ─────────────────────────────────────────────────────────────────

fn type_mismatch(field: &str, expected: &str, got: &SettingValue) -> ConfigError {
    ConfigError::invalid(
        field,
        format!("expected {expected}, got {}", got.type_name()),
    )
}

fn coerce_bool(field: &str, value: &SettingValue) -> Result<bool, ConfigError> {
    match value {
        SettingValue::Bool(b) => Ok(*b),
        SettingValue::Integer(0) => Ok(false),
        SettingValue::Integer(1) => Ok(true),
        SettingValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::invalid(
                field,
                format!("'{text}' is not a valid boolean"),
            )),
        },
        other => Err(type_mismatch(field, "boolean", other)),
    }
}

/// Empty text means "unset", matching how `.env` files spell an absent URL.
fn coerce_optional_text(field: &str, value: &SettingValue) -> Result<Option<String>, ConfigError> {
    match value {
        SettingValue::Null => Ok(None),
        SettingValue::Text(text) if text.is_empty() => Ok(None),
        SettingValue::Text(text) => Ok(Some(text.clone())),
        other => Err(type_mismatch(field, "string", other)),
    }
}

fn coerce_workers(value: &SettingValue) -> Result<u32, ConfigError> {
    let raw = match value {
        SettingValue::Integer(i) => *i,
        SettingValue::Text(text) => text.trim().parse::<i64>().map_err(|_| {
            ConfigError::invalid("workers", format!("'{text}' is not a valid integer"))
        })?,
        other => return Err(type_mismatch("workers", "integer", other)),
    };

    if raw < 1 {
        return Err(ConfigError::invalid(
            "workers",
            format!("must be at least 1, got {raw}"),
        ));
    }
    u32::try_from(raw).map_err(|_| ConfigError::invalid("workers", format!("{raw} is too large")))
}
