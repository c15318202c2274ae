use std::fmt::Write;

use crate::error::Result;
use crate::report::Report;

use super::{ReportFormatter, findings};

pub struct MarkdownFormatter;

/// Pipes would end the table cell early.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Inline code span that survives backticks in `text`: the fence is one
/// backtick longer than the longest run inside it.
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    if longest_run > 0 {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Build Log Issues\n\n");
        let _ = writeln!(output, "**Summary:** {}", report.summary);
        if report.excluded_files > 0 {
            let _ = writeln!(
                output,
                "\n_{} file(s) excluded by filter._",
                report.excluded_files
            );
        }

        if report.files.is_empty() {
            output.push_str("\nNo sparse or smatch issues found.\n");
            return Ok(output);
        }

        for file in &report.files {
            let _ = writeln!(output, "\n## {}\n", code_span(&file.path));
            output.push_str("| Tool | Severity | Location | Function | Message |\n");
            output.push_str("|------|----------|----------|----------|---------|\n");
            for finding in findings(&file.issues) {
                let _ = writeln!(
                    output,
                    "| {} | {} | {} | {} | {} |",
                    finding.tool,
                    finding.severity.as_str(),
                    escape_cell(&code_span(&finding.location)),
                    finding.function.map_or(String::new(), |f| format!("`{f}()`")),
                    escape_cell(finding.message)
                );
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
