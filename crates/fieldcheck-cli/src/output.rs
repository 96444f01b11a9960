//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output in
//! various formats (JSON, YAML, human-readable), with specialized rendering
//! for single-value checks, tax-ID checks, form reports, and rule listings.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use fieldcheck_core::{FormReport, RuleKind, ValidationMode};
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

/// Outcome of checking one value against a rule list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub rules: String,
    pub mode: ValidationMode,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of a tax-ID check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxIdOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One entry of the rule catalogue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleInfo {
    pub name: &'static str,
    pub params: Vec<&'static str>,
    pub description: &'static str,
}

impl From<RuleKind> for RuleInfo {
    fn from(kind: RuleKind) -> Self {
        Self {
            name: kind.name(),
            params: kind.params().to_vec(),
            description: kind.description(),
        }
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the outcome of a single-value check
    fn format_check_outcome(&self, outcome: &CheckOutcome) -> Result<String>;

    /// Format the outcome of a tax-ID check
    fn format_tax_id_outcome(&self, outcome: &TaxIdOutcome) -> Result<String>;

    /// Format a form report; `show_passing` lists passing fields in human output
    fn format_form_report(&self, report: &FormReport, show_passing: bool) -> Result<String>;

    /// Format the rule catalogue
    fn format_rules(&self, rules: &[RuleInfo]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // For human format, use pretty JSON as fallback
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_check_outcome(&self, outcome: &CheckOutcome) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_check_outcome_human(outcome)),
            _ => self.format(outcome),
        }
    }

    fn format_tax_id_outcome(&self, outcome: &TaxIdOutcome) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_tax_id_outcome_human(outcome)),
            _ => self.format(outcome),
        }
    }

    fn format_form_report(&self, report: &FormReport, show_passing: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_form_report_human(report, show_passing)),
            _ => self.format(report),
        }
    }

    fn format_rules(&self, rules: &[RuleInfo]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_rules_human(rules)),
            _ => self.format(&rules),
        }
    }
}

fn pass_mark() -> String {
    "✓".green().to_string()
}

fn fail_mark() -> String {
    "✗".red().to_string()
}

/// Human-readable single-value check
pub fn format_check_outcome_human(outcome: &CheckOutcome) -> String {
    match &outcome.message {
        None => format!("{} valid ({})", pass_mark(), outcome.rules.dimmed()),
        Some(message) => format!("{} {} ({})", fail_mark(), message.red(), outcome.rules.dimmed()),
    }
}

/// Human-readable tax-ID check
pub fn format_tax_id_outcome_human(outcome: &TaxIdOutcome) -> String {
    if outcome.valid {
        format!(
            "{} valid tax ID {}",
            pass_mark(),
            outcome.formatted.as_deref().unwrap_or_default().bold()
        )
    } else {
        format!(
            "{} invalid tax ID: {}",
            fail_mark(),
            outcome.reason.as_deref().unwrap_or("unknown reason")
        )
    }
}

/// Human-readable form report
pub fn format_form_report_human(report: &FormReport, show_passing: bool) -> String {
    let mut lines = Vec::new();

    for field in &report.fields {
        match (&field.message, field.valid) {
            (Some(message), false) => {
                lines.push(format!("  {} {}: {}", fail_mark(), field.name.bold(), message));
            }
            _ if show_passing => {
                lines.push(format!("  {} {}", pass_mark(), field.name.bold()));
            }
            _ => {}
        }
    }

    let summary = if report.valid {
        format!("{} all {} field(s) valid", pass_mark(), report.fields.len())
            .green()
            .to_string()
    } else {
        format!(
            "{} {} of {} field(s) failed",
            fail_mark(),
            report.failure_count(),
            report.fields.len()
        )
        .red()
        .to_string()
    };
    lines.push(summary);

    lines.join("\n")
}

/// Human-readable rule catalogue
pub fn format_rules_human(rules: &[RuleInfo]) -> String {
    let signatures: Vec<String> = rules
        .iter()
        .map(|rule| {
            std::iter::once(rule.name)
                .chain(rule.params.iter().copied())
                .collect::<Vec<_>>()
                .join(":")
        })
        .collect();
    let width = signatures.iter().map(|s| s.len()).max().unwrap_or(0);

    signatures
        .iter()
        .zip(rules)
        .map(|(signature, rule)| format!("{:width$}  {}", signature, rule.description, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write a single-value check outcome
    pub fn check_outcome(&mut self, outcome: &CheckOutcome) -> Result<()> {
        log_redacted(outcome);
        let formatted = self.format.format_check_outcome(outcome)?;
        self.writeln(formatted.trim_end())
    }

    /// Write a tax-ID outcome
    pub fn tax_id_outcome(&mut self, outcome: &TaxIdOutcome) -> Result<()> {
        log_redacted(outcome);
        let formatted = self.format.format_tax_id_outcome(outcome)?;
        self.writeln(formatted.trim_end())
    }

    /// Write a form report
    pub fn form_report(&mut self, report: &FormReport, show_passing: bool) -> Result<()> {
        log_redacted(report);
        let formatted = self.format.format_form_report(report, show_passing)?;
        self.writeln(formatted.trim_end())
    }

    /// Write the rule catalogue
    pub fn rules(&mut self, rules: &[RuleInfo]) -> Result<()> {
        let formatted = self.format.format_rules(rules)?;
        self.writeln(formatted.trim_end())
    }
}

fn log_redacted<T: Serialize>(value: &T) {
    if let Ok(mut json) = serde_json::to_value(value) {
        redaction::redact_json_value(&mut json);
        trace!(output = %json, "Writing output");
    }
}
