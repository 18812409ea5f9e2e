//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `kiln-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ConfigError, ConfigFormat, SettingValue};
use crate::error::KilnResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kiln_adapters::filesystem::LocalFilesystem` (production)
/// - `kiln_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KilnResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> KilnResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> KilnResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Entries produced by a [`ConfigParser`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedConfig {
    /// `KEY=VALUE` pairs from an environment file, in file order.
    Environment(Vec<(String, String)>),
    /// Top-level entries of a structured mapping.
    Mapping(Vec<(String, SettingValue)>),
}

/// Port for configuration file parsing.
///
/// Implemented by:
/// - `kiln_adapters::config_parser::FileConfigParser` (dotenvy / toml / serde_json)
pub trait ConfigParser: Send + Sync {
    /// Parse `text` read from `path` as `format`.
    ///
    /// Structured formats must yield [`ParsedConfig::Mapping`]; anything whose
    /// top level is not a key/value mapping is `ConfigError::MalformedPayload`.
    fn parse(
        &self,
        format: ConfigFormat,
        path: &Path,
        text: &str,
    ) -> Result<ParsedConfig, ConfigError>;
}
