//! Output management and formatting.
//!
//! Status lines go through [`OutputManager`]; listings go through
//! [`TerminalSink`], the CLI's implementation of the core `ListingSink`
//! port.

use std::io::{self, IsTerminal};

use console::{Term, measure_text_width};
use owo_colors::OwoColorize;

use trellis_core::{
    application::{ApplicationError, ports::ListingSink},
    domain::Listing,
    error::TrellisResult,
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format`; `auto` resolves to
    /// human on a TTY and plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args.output_format.unwrap_or(config.output.format);
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.status_term().write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.status_term().write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.status_term().write_line(&line)
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
        self.status_term().write_line(&line)
    }

    /// Write data to stdout. Machine formats are written even in quiet
    /// mode; they are the command's result, not chatter.
    pub fn data(&self, text: &str) -> io::Result<()> {
        if self.quiet && self.resolved_format == OutputFormat::Human {
            return Ok(());
        }
        self.stdout.write_str(text)
    }

    /// Render a listing in the resolved format.
    pub fn render(&self, listing: &Listing) -> io::Result<String> {
        render_listing(listing, self.resolved_format, !self.no_color)
    }

    /// Status lines must not interleave with machine-readable stdout.
    fn status_term(&self) -> &Term {
        if self.resolved_format == OutputFormat::Human {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

// ── Listing sink ──────────────────────────────────────────────────────────────

/// Displays listings on the terminal, rows sorted for stable output.
pub struct TerminalSink<'a> {
    output: &'a OutputManager,
}

impl<'a> TerminalSink<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self { output }
    }
}

impl ListingSink for TerminalSink<'_> {
    fn display(&self, listing: &Listing) -> TrellisResult<()> {
        let sorted = listing.clone().sorted();
        self.output
            .render(&sorted)
            .and_then(|text| self.output.data(&text))
            .map_err(|e| {
                ApplicationError::SinkFailed {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render `listing` as text. Rows are written in the order given.
pub fn render_listing(listing: &Listing, format: OutputFormat, color: bool) -> io::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(listing)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(io::Error::other),
        OutputFormat::Csv => Ok(render_csv(listing)),
        OutputFormat::Plain => Ok(listing.rows.iter().map(|r| format!("{r}\n")).collect()),
        OutputFormat::Human | OutputFormat::Auto => Ok(render_table(listing, color)),
    }
}

/// Titled table with a zero-based index column.
fn render_table(listing: &Listing, color: bool) -> String {
    let index_width = listing.len().saturating_sub(1).to_string().len();
    let column_width = listing
        .rows
        .iter()
        .map(|r| measure_text_width(r))
        .chain(std::iter::once(measure_text_width(&listing.column)))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    if color {
        out.push_str(&listing.title.cyan().bold().to_string());
    } else {
        out.push_str(&listing.title);
    }
    out.push('\n');

    let header = format!("{:>index_width$}  {:<column_width$}", "", listing.column);
    if color {
        out.push_str(header.trim_end().bold().to_string().as_str());
    } else {
        out.push_str(header.trim_end());
    }
    out.push('\n');

    for (i, row) in listing.rows.iter().enumerate() {
        out.push_str(&format!("{i:>index_width$}  {row}\n"));
    }

    if listing.is_empty() {
        out.push_str("(no files)\n");
    }
    out
}

fn render_csv(listing: &Listing) -> String {
    let mut out = csv_field(&listing.column);
    out.push('\n');
    for row in &listing.rows {
        out.push_str(&csv_field(row));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
