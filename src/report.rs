//! Reporting a verdict to whoever invoked the gate.
//!
//! Three formats are supported:
//! - Human: per-section status list with colored icons, then the summary
//! - Json: a single JSON document for programmatic consumption
//! - Github: workflow commands, so a failure becomes an error annotation
//!
//! The reporter auto-detects TTY for color support and can be injected with
//! a custom writer for test capture.

use anyhow::{Context, Result};
use serde_json::json;
use std::io::{self, Write};

use crate::ui;
use crate::validator::ValidationVerdict;

/// Consumes a validation verdict.
pub trait ResultSink {
    fn report(&mut self, verdict: &ValidationVerdict) -> Result<()>;
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable colored output
    #[default]
    Human,
    /// JSON document
    Json,
    /// GitHub Actions workflow commands
    Github,
}

/// Writes verdicts in the selected format.
pub struct Reporter {
    format: ReportFormat,
    writer: Box<dyn Write + Send>,
    is_tty: bool,
    quiet: bool,
}

impl Reporter {
    /// Create a reporter writing to stdout
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            writer: Box::new(io::stdout()),
            is_tty: atty::is(atty::Stream::Stdout),
            quiet: false,
        }
    }

    /// Create a reporter with a custom writer (for testing)
    pub fn with_writer(format: ReportFormat, writer: Box<dyn Write + Send>) -> Self {
        Self {
            format,
            writer,
            is_tty: false, // Assume non-TTY for custom writers
            quiet: false,
        }
    }

    /// Suppress human output for passing verdicts
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    fn write_human(&mut self, verdict: &ValidationVerdict) -> io::Result<()> {
        if verdict.passed && self.quiet {
            return Ok(());
        }

        let width = verdict
            .sections
            .iter()
            .map(|s| s.label.chars().count())
            .max()
            .unwrap_or(0);

        for section in &verdict.sections {
            let icon = if self.is_tty {
                ui::outcome_icon(section.outcome).to_string()
            } else {
                ui::outcome_symbol(section.outcome).to_string()
            };
            writeln!(
                self.writer,
                "  {:<width$}  {} {}",
                section.label,
                icon,
                section.outcome,
                width = width
            )?;
        }
        writeln!(self.writer)?;

        match (self.is_tty, verdict.passed) {
            (false, _) => writeln!(self.writer, "{}", verdict.summary),
            (true, true) => writeln!(self.writer, "{}", ui::colors::success(&verdict.summary)),
            (true, false) => writeln!(self.writer, "{}", ui::colors::error(&verdict.summary)),
        }
    }

    fn write_json(&mut self, verdict: &ValidationVerdict) -> io::Result<()> {
        let document = json!({
            "passed": verdict.passed,
            "checked_at": crate::utc_now_iso(),
            "messages": verdict.messages,
            "sections": verdict.sections,
            "summary": verdict.summary,
        });
        writeln!(self.writer, "{}", document)
    }

    fn write_github(&mut self, verdict: &ValidationVerdict) -> io::Result<()> {
        if verdict.passed {
            writeln!(self.writer, "{}", verdict.summary)
        } else {
            writeln!(self.writer, "::error::{}", escape_command_data(&verdict.summary))
        }
    }
}

impl ResultSink for Reporter {
    fn report(&mut self, verdict: &ValidationVerdict) -> Result<()> {
        match self.format {
            ReportFormat::Human => self.write_human(verdict),
            ReportFormat::Json => self.write_json(verdict),
            ReportFormat::Github => self.write_github(verdict),
        }
        .and_then(|_| self.writer.flush())
        .context("Failed to write validation report")
    }
}

/// Escape a workflow command message so it stays on one line.
pub fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
