//! Configuration file parsing.
//!
//! - `.env` files are read with `dotenvy` (quotes, `export` prefixes and
//!   comments follow its rules).
//! - `.toml` and `.json` files must have a key/value mapping at the top level.
//!   Scalar values keep their native type; tables and arrays are passed
//!   through as [`SettingValue::Nested`] so the settings registry can reject
//!   them by name.

use std::path::Path;

use kiln_core::{
    application::ports::{ConfigParser, ParsedConfig},
    domain::{ConfigError, ConfigFormat, SettingValue},
};
use tracing::debug;

/// Dispatches on [`ConfigFormat`] to the matching parser crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigParser;

impl FileConfigParser {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigParser for FileConfigParser {
    fn parse(
        &self,
        format: ConfigFormat,
        path: &Path,
        text: &str,
    ) -> Result<ParsedConfig, ConfigError> {
        let parsed = match format {
            ConfigFormat::EnvFile => parse_env(path, text)?,
            ConfigFormat::Toml => parse_toml(path, text)?,
            ConfigFormat::Json => parse_json(path, text)?,
        };

        debug!(%format, path = %path.display(), "Configuration file parsed");
        Ok(parsed)
    }
}

fn malformed(path: &Path, reason: impl ToString) -> ConfigError {
    ConfigError::MalformedPayload {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn parse_env(path: &Path, text: &str) -> Result<ParsedConfig, ConfigError> {
    let vars = dotenvy::from_read_iter(text.as_bytes())
        .collect::<Result<Vec<(String, String)>, _>>()
        .map_err(|e| malformed(path, e))?;
    Ok(ParsedConfig::Environment(vars))
}

fn parse_toml(path: &Path, text: &str) -> Result<ParsedConfig, ConfigError> {
    let table: toml::Table = toml::from_str(text).map_err(|e| malformed(path, e.message()))?;

    let entries = table
        .into_iter()
        .map(|(key, value)| (key, from_toml(value)))
        .collect();
    Ok(ParsedConfig::Mapping(entries))
}

fn from_toml(value: toml::Value) -> SettingValue {
    match value {
        toml::Value::String(s) => SettingValue::Text(s),
        toml::Value::Integer(i) => SettingValue::Integer(i),
        toml::Value::Float(f) => SettingValue::Float(f),
        toml::Value::Boolean(b) => SettingValue::Bool(b),
        toml::Value::Datetime(dt) => SettingValue::Text(dt.to_string()),
        toml::Value::Array(_) => SettingValue::Nested("array"),
        toml::Value::Table(_) => SettingValue::Nested("table"),
    }
}

fn parse_json(path: &Path, text: &str) -> Result<ParsedConfig, ConfigError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| malformed(path, e))?;

    let object = match value {
        serde_json::Value::Object(object) => object,
        other => {
            return Err(malformed(
                path,
                format!("top level must be an object, got {}", json_type(&other)),
            ));
        }
    };

    let entries = object
        .into_iter()
        .map(|(key, value)| (key, from_json(value)))
        .collect();
    Ok(ParsedConfig::Mapping(entries))
}

fn from_json(value: serde_json::Value) -> SettingValue {
    use serde_json::Value;

    match value {
        Value::Null => SettingValue::Null,
        Value::Bool(b) => SettingValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SettingValue::Integer(i),
            None => SettingValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => SettingValue::Text(s),
        Value::Array(_) => SettingValue::Nested("array"),
        Value::Object(_) => SettingValue::Nested("object"),
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(format: ConfigFormat, text: &str) -> Result<ParsedConfig, ConfigError> {
        FileConfigParser::new().parse(format, Path::new("test"), text)
    }

    fn mapping(parsed: ParsedConfig) -> Vec<(String, SettingValue)> {
        match parsed {
            ParsedConfig::Mapping(entries) => entries,
            other => panic!("expected mapping, got {other:?}"),
        }
    }

    #[test]
    fn env_file_keeps_raw_pairs() {
        let parsed = parse(
            ConfigFormat::EnvFile,
            "# comment\nDEBUG=true\nexport WORKERS=8\nDATABASE_URL=\"postgres://db\"\n",
        )
        .unwrap();

        assert_eq!(
            parsed,
            ParsedConfig::Environment(vec![
                ("DEBUG".into(), "true".into()),
                ("WORKERS".into(), "8".into()),
                ("DATABASE_URL".into(), "postgres://db".into()),
            ])
        );
    }

    #[test]
    fn toml_keeps_native_types() {
        let entries = mapping(
            parse(
                ConfigFormat::Toml,
                "debug = true\nworkers = 8\nlog_level = \"DEBUG\"\n[extra]\nx = 1\n",
            )
            .unwrap(),
        );

        assert!(entries.contains(&("debug".into(), SettingValue::Bool(true))));
        assert!(entries.contains(&("workers".into(), SettingValue::Integer(8))));
        assert!(entries.contains(&("log_level".into(), SettingValue::text("DEBUG"))));
        assert!(entries.contains(&("extra".into(), SettingValue::Nested("table"))));
    }

    #[test]
    fn invalid_toml_is_malformed() {
        assert!(matches!(
            parse(ConfigFormat::Toml, "debug = = true"),
            Err(ConfigError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn json_object_becomes_mapping() {
        let entries = mapping(
            parse(
                ConfigFormat::Json,
                r#"{"workers": 2, "database_url": null, "ratio": 0.5}"#,
            )
            .unwrap(),
        );

        assert!(entries.contains(&("workers".into(), SettingValue::Integer(2))));
        assert!(entries.contains(&("database_url".into(), SettingValue::Null)));
        assert!(entries.contains(&("ratio".into(), SettingValue::Float(0.5))));
    }

    #[test]
    fn json_top_level_must_be_object() {
        match parse(ConfigFormat::Json, "[1, 2, 3]") {
            Err(ConfigError::MalformedPayload { reason, .. }) => {
                assert!(reason.contains("array"), "{reason}")
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            parse(ConfigFormat::Json, "{not json"),
            Err(ConfigError::MalformedPayload { .. })
        ));
    }
}
