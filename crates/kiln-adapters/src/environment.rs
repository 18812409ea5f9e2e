//! Capture of the process environment at startup.

use std::ffi::OsString;
use std::path::Path;

use kiln_core::domain::Environment;
use tracing::{debug, warn};

/// Conventional name of the startup environment file.
pub const DOTENV_FILE: &str = ".env";

/// Build the startup [`Environment`]: process variables over the `.env` file
/// found at `dotenv`.
///
/// A missing `.env` is normal and an unreadable one is logged and ignored.
/// Malformed lines are logged and skipped; every other line is kept.
/// Process variables that are not valid UTF-8 are skipped.
pub fn capture_environment(dotenv: &Path) -> Environment {
    let process = Environment::from_process(utf8_vars(std::env::vars_os()));

    if !dotenv.is_file() {
        debug!(path = %dotenv.display(), "No .env file found");
        return process;
    }

    match std::fs::read_to_string(dotenv) {
        Ok(text) => {
            let vars = parse_dotenv(dotenv, &text);
            debug!(path = %dotenv.display(), count = vars.len(), ".env file loaded");
            process.with_dotenv(vars)
        }
        Err(e) => {
            warn!(path = %dotenv.display(), error = %e, "Could not read .env file");
            process
        }
    }
}

fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                let key = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                debug!(%key, "Skipping non UTF-8 environment variable");
                None
            }
        })
}

/// Parse `.env` text with dotenvy, skipping lines it rejects.
///
/// A binding starts on a line and may span the following ones (quoted
/// multi-line values). Each candidate span is parsed after the lines already
/// accepted so `${VAR}` substitution still sees earlier bindings. When no
/// span starting at a line parses, that line is reported and dropped.
fn parse_dotenv(path: &Path, text: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = text.lines().collect();
    let mut accepted: Vec<&str> = Vec::with_capacity(lines.len());
    let mut vars = Vec::new();
    let mut start = 0;

    while start < lines.len() {
        let parsed = (start + 1..=lines.len()).find_map(|end| {
            let candidate = [accepted.as_slice(), &lines[start..end]].concat();
            parse_lines(&candidate).map(|pairs| (end, pairs))
        });

        match parsed {
            Some((end, pairs)) => {
                accepted.extend_from_slice(&lines[start..end]);
                vars = pairs;
                start = end;
            }
            None => {
                warn!(
                    path = %path.display(),
                    line = start + 1,
                    "Skipping malformed .env line"
                );
                start += 1;
            }
        }
    }

    vars
}

fn parse_lines(lines: &[&str]) -> Option<Vec<(String, String)>> {
    let text = lines.join("\n");
    dotenvy::from_read_iter(text.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .ok()
}
