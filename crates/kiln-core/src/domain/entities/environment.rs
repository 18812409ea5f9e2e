//! Layered view over environment variables.
//!
//! [`Environment`] replaces direct reads of the process environment. It is a
//! plain value owned by the `ConfigStore`, so injecting variables from an
//! environment file never touches the real process state.
//!
//! # Layers (highest priority first)
//!
//! | Layer      | Source                                         |
//! |------------|------------------------------------------------|
//! | `injected` | environment files passed to `load_external`    |
//! | `process`  | process variables captured at startup          |
//! | `dotenv`   | the conventional `.env` file found at startup  |
//!
//! Keys are matched case-insensitively: they are stored lower-cased.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    dotenv: BTreeMap<String, String>,
    process: BTreeMap<String, String>,
    injected: BTreeMap<String, String>,
}

impl Environment {
    /// An environment with no variables at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture process variables (e.g. `std::env::vars()`).
    pub fn from_process<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            process: normalize(vars),
            ..Self::default()
        }
    }

    /// Add the startup `.env` layer. Process variables keep precedence over it.
    pub fn with_dotenv<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.dotenv = normalize(vars);
        self
    }

    /// Inject variables with override semantics: they shadow every other layer
    /// and later injections win over earlier ones.
    pub fn inject<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.injected.extend(normalize(vars));
    }

    /// Resolve a key across the layers.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.injected
            .get(&key)
            .or_else(|| self.process.get(&key))
            .or_else(|| self.dotenv.get(&key))
            .map(String::as_str)
    }

    /// Number of distinct keys visible through all layers.
    pub fn len(&self) -> usize {
        let mut keys: Vec<&String> = self
            .dotenv
            .keys()
            .chain(self.process.keys())
            .chain(self.injected.keys())
            .collect();
        keys.sort();
        keys.dedup();
        keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lower-case keys. Input is sorted by original key first so that collisions
/// such as `WORKERS` / `workers` resolve the same way on every run.
fn normalize<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut vars: Vec<(String, String)> = vars.into_iter().collect();
    vars.sort_by(|a, b| a.0.cmp(&b.0));
    vars.into_iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v))
        .collect()
}
