//! Config Store - the single authoritative settings snapshot.
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults ([`Settings::default`])
//! 2. The conventional `.env` file found at startup
//! 3. Process environment variables
//! 4. An external file loaded on demand with [`ConfigStore::load_external`]
//!
//! Direct field overrides ([`ConfigStore::override_field`]) are applied last.
//!
//! Environment files trigger a *full re-derivation* of the snapshot, while
//! structured files are a *shallow patch* of the current one. Every change is
//! staged on a copy and only swapped in once the copy validates, so a failed
//! load never leaves a half-applied snapshot behind.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{ConfigParser, Filesystem, ParsedConfig},
    domain::{
        ConfigError, ConfigFormat, DomainValidator as validator, Environment, SettingValue,
        Settings,
    },
};

pub struct ConfigStore {
    settings: Settings,
    environment: Environment,
    filesystem: Box<dyn Filesystem>,
    parser: Box<dyn ConfigParser>,
}

impl ConfigStore {
    /// Derive the initial snapshot from defaults and `environment`.
    #[instrument(skip_all, fields(variables = environment.len()))]
    pub fn resolve(
        environment: Environment,
        filesystem: Box<dyn Filesystem>,
        parser: Box<dyn ConfigParser>,
    ) -> Result<Self, ConfigError> {
        let settings = Settings::derive(&environment)?;
        debug!(?settings, "Settings resolved from environment");

        Ok(Self {
            settings,
            environment,
            filesystem,
            parser,
        })
    }

    /// The current snapshot.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The environment layers the snapshot is derived from.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Load an external configuration file.
    ///
    /// - environment file (`.env`): variables are injected with override
    ///   semantics and the snapshot is rebuilt from defaults + environment.
    ///   Earlier patches and overrides are discarded.
    /// - structured file (`.toml`, `.json`): each top-level key is applied to
    ///   the current snapshot; unspecified fields keep their value.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_external(&mut self, path: &Path) -> Result<(), ConfigError> {
        if !self.filesystem.exists(path) {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = ConfigFormat::from_path(path)?;
        let text = self
            .filesystem
            .read_to_string(path)
            .map_err(|e| ConfigError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        match self.parser.parse(format, path, &text)? {
            ParsedConfig::Environment(vars) => self.reload_environment(vars)?,
            ParsedConfig::Mapping(entries) => self.patch(entries)?,
        }

        info!(%format, "External configuration loaded");
        Ok(())
    }

    /// Set a single field, bypassing file parsing. Highest precedence.
    pub fn override_field(
        &mut self,
        key: &str,
        value: impl Into<SettingValue>,
    ) -> Result<(), ConfigError> {
        self.patch(vec![(key.to_string(), value.into())])
    }

    /// Shorthand for the `--debug` / `--no-debug` flag.
    pub fn set_debug(&mut self, debug: bool) -> Result<(), ConfigError> {
        self.override_field("debug", debug)
    }

    fn reload_environment(&mut self, vars: Vec<(String, String)>) -> Result<(), ConfigError> {
        let mut environment = self.environment.clone();
        environment.inject(vars);

        let settings = Settings::derive(&environment)?;

        self.environment = environment;
        self.settings = settings;
        debug!(settings = ?self.settings, "Settings re-derived from environment");
        Ok(())
    }

    fn patch(&mut self, entries: Vec<(String, SettingValue)>) -> Result<(), ConfigError> {
        let mut staged = self.settings.clone();
        for (key, value) in &entries {
            staged.apply(key, value)?;
        }
        validator::validate_settings(&staged)?;

        debug!(fields = entries.len(), "Settings patched");
        self.settings = staged;
        Ok(())
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("settings", &self.settings)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
