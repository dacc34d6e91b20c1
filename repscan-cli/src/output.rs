//! Output formatting abstraction for text vs JSON rendering
//!
//! All subcommand output flows through [`OutputWriter`] which handles format switching.
//! This keeps format-specific logic out of command handlers entirely.

use std::io::Write;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use repscan_core::types::{CheckStatus, RiskLevel};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Width of the horizontal rules in text reports.
pub const RULE_WIDTH: usize = 60;

/// Abstraction for writing CLI output in different formats.
///
/// Subcommand handlers call `writer.render(&payload)` where `payload`
/// implements both `Serialize` (for JSON) and `Render` (for text).
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    /// Create a new output writer with the specified format.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use repscan_cli::output::OutputWriter;
    /// use repscan_cli::cli::OutputFormat;
    ///
    /// let writer = OutputWriter::new(OutputFormat::Text);
    /// ```
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a progress line to stdout in `Text` format; ignored for `Json`.
    pub fn progress(&self, line: &str) -> std::io::Result<()> {
        if self.format == OutputFormat::Text {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{line}")?;
        }
        Ok(())
    }

    /// Render a payload to stdout.
    pub fn render<T: Render + Serialize>(&self, payload: &T) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.render_to(&mut handle, payload)
    }

    /// Render a payload to an arbitrary writer.
    ///
    /// For `Text` format, delegates to `Render::render_text()`.
    /// For `Json` format, serialises via `serde_json`.
    pub fn render_to<T: Render + Serialize>(
        &self,
        w: &mut dyn Write,
        payload: &T,
    ) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => {
                payload.render_text(w)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, payload)?;
                writeln!(w)?;
            }
        }
        Ok(())
    }
}

/// Trait for human-readable text rendering.
///
/// Implemented by every CLI output payload alongside `serde::Serialize`.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

/// Glyph shown next to a risk level.
pub fn risk_glyph(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "🟢",
        RiskLevel::Medium => "🟡",
        RiskLevel::High => "🟠",
        RiskLevel::Critical => "🔴",
    }
}

/// Icon shown in front of a check line.
pub fn status_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "✓",
        CheckStatus::Warning => "⚠️",
        CheckStatus::Fail => "✗",
    }
}

/// Colour a piece of text by risk level.
pub fn paint_risk(level: RiskLevel, text: &str) -> ColoredString {
    match level {
        RiskLevel::Low => text.green(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::High => text.truecolor(255, 140, 0),
        RiskLevel::Critical => text.red().bold(),
    }
}

/// Colour a piece of text by check status.
pub fn paint_status(status: CheckStatus, text: &str) -> ColoredString {
    match status {
        CheckStatus::Pass => text.green(),
        CheckStatus::Warning => text.yellow(),
        CheckStatus::Fail => text.red(),
    }
}

/// Heavy horizontal rule.
pub fn heavy_rule() -> String {
    "═".repeat(RULE_WIDTH)
}

/// Light horizontal rule.
pub fn light_rule() -> String {
    "─".repeat(RULE_WIDTH)
}
