mod error_output;
mod json;
mod markdown;
mod text;

#[cfg(test)]
mod test_fixtures;

pub use error_output::{ErrorOutput, print_error_full, print_info, print_warning};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analyzer::{FileIssues, Severity, SmatchIssue, SparseIssue};
use crate::error::Result;
use crate::report::Report;

/// Trait for rendering a report into various output formats.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "md")]
    #[serde(alias = "md")]
    Markdown,
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Per-<https://no-color.org>: presence of the variable (any value) disables color.
pub(crate) fn is_no_color_set() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// One rendered line of a file's findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Finding<'a> {
    pub tool: &'static str,
    pub severity: Severity,
    pub location: String,
    pub function: Option<&'a str>,
    pub message: &'a str,
}

/// Flatten a file's four categories for display: errors before warnings,
/// sparse before smatch, each category in its recorded order.
pub(crate) fn findings(issues: &FileIssues) -> Vec<Finding<'_>> {
    issues
        .sparse_errors()
        .iter()
        .map(|i| sparse_finding(Severity::Error, i))
        .chain(issues.smatch_errors().iter().map(|i| smatch_finding(Severity::Error, i)))
        .chain(issues.sparse_warnings().iter().map(|i| sparse_finding(Severity::Warning, i)))
        .chain(issues.smatch_warnings().iter().map(|i| smatch_finding(Severity::Warning, i)))
        .collect()
}

fn sparse_finding(severity: Severity, issue: &SparseIssue) -> Finding<'_> {
    Finding {
        tool: "sparse",
        severity,
        location: format!("{}:{}", issue.file_path(), issue.line_number()),
        function: None,
        message: issue.message(),
    }
}

fn smatch_finding(severity: Severity, issue: &SmatchIssue) -> Finding<'_> {
    Finding {
        tool: "smatch",
        severity,
        location: format!("{}:{}", issue.file_path(), issue.line_number()),
        function: Some(issue.function_name()),
        message: issue.message(),
    }
}

/// Render a report in the requested format.
///
/// # Errors
/// Returns an error if the formatter fails.
pub fn format_report(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Markdown => MarkdownFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
