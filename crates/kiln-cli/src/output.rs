//! Stdout rendering for command results.
//!
//! Everything is silenced by `--quiet` except JSON documents, which are the
//! requested output rather than chatter.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    const fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Self::Success => text.green().to_string(),
            Self::Warning => text.yellow().to_string(),
            Self::Info => text.blue().to_string(),
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// `Auto` becomes `Human` on a terminal and `Plain` otherwise. Only
    /// `Human` output is coloured.
    pub fn new(args: &GlobalArgs) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color,
            term: Term::stdout(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// A bare line of the command's answer, e.g. a setting value.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.color {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.emit(&line)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.status(Tone::Success, msg))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.status(Tone::Warning, msg))
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.status(Tone::Info, msg))
    }

    /// Pretty-printed JSON, written even under `--quiet`.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    fn status(&self, tone: Tone, msg: &str) -> String {
        if self.color {
            format!("{} {}", tone.paint(tone.glyph()).bold(), tone.paint(msg))
        } else {
            format!("{} {msg}", tone.glyph())
        }
    }

    fn emit(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, no_color: bool, output_format: OutputFormat) -> OutputManager {
        OutputManager::new(&GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
        })
    }

    #[test]
    fn quiet_suppresses_status_lines() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.success("written").is_ok());
        assert!(out.print("value").is_ok());
    }

    #[test]
    fn only_human_format_uses_color() {
        assert!(manager(false, false, OutputFormat::Human).color);
        assert!(!manager(false, true, OutputFormat::Human).color);
        assert!(!manager(false, false, OutputFormat::Plain).color);
        assert!(!manager(false, false, OutputFormat::Json).color);
    }

    #[test]
    fn plain_status_lines_carry_glyphs_without_ansi() {
        let out = manager(false, false, OutputFormat::Plain);
        assert_eq!(out.status(Tone::Success, "done"), "\u{2713} done");
        assert_eq!(out.status(Tone::Warning, "exists"), "\u{26a0} exists");
        assert_eq!(out.status(Tone::Info, "noop"), "\u{2139} noop");
    }

    #[test]
    fn colored_status_lines_use_ansi() {
        let out = manager(false, false, OutputFormat::Human);
        let line = out.status(Tone::Success, "done");
        assert!(line.contains('\u{1b}'));
        assert!(line.contains("done"));
    }

    #[test]
    fn json_format_is_reported() {
        let out = manager(true, false, OutputFormat::Json);
        assert!(out.is_json());
        assert_eq!(out.format, OutputFormat::Json);
        assert!(out.json(&serde_json::json!({"workers": 4})).is_ok());
    }
}
