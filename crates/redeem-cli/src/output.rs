//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::warn;

use redeem_core::domain::{Course, Token};

use crate::cli::{
    ListFormat,
    global::{GlobalArgs, OutputFormat},
};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    default_list_format: ListFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        let default_list_format = ListFormat::from_str(&config.output.format, true)
            .unwrap_or_else(|_| {
                warn!(
                    format = %config.output.format,
                    "Unknown output.format in configuration, using table"
                );
                ListFormat::Table
            });

        Self {
            resolved_format,
            default_list_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Listing format: the command's `--format`, else JSON when
    /// `--output-format json`, else `output.format` from config.
    pub fn list_format(&self, explicit: Option<ListFormat>) -> ListFormat {
        match (explicit, self.resolved_format) {
            (Some(format), _) => format,
            (None, OutputFormat::Json) => ListFormat::Json,
            (None, _) => self.default_list_format,
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Machine-readable result line. Never suppressed.
    pub fn data(&self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    /// Pretty-printed JSON document. Never suppressed.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.data(&rendered)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Failure indicator: `✗ <msg>`, used for rejected tokens.
    pub fn failure(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed detail line.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        };
        self.term.write_line(&line)
    }
}

// ── Row rendering ─────────────────────────────────────────────────────────────

/// One table row for a token.
pub fn token_row(token: &Token) -> String {
    let tier = if token.category().is_empty() {
        "-"
    } else {
        token.category()
    };
    format!(
        "  {:<5} {:<10} {:>6}  {}",
        token.id().to_string(),
        tier,
        token.value().to_string(),
        token.scope()
    )
}

/// One table row for a course.
pub fn course_row(course: &Course) -> String {
    format!(
        "  {:<5} {:<14} {:>6}  {}",
        course.id().to_string(),
        course.category().as_str(),
        course.cost().to_string(),
        course.title().unwrap_or("")
    )
    .trim_end()
    .to_owned()
}

// ── tests ─────────────────────────────────────────────────────────────────────
