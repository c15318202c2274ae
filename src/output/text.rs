use std::fmt::Write;
use std::io::Write as IoWrite;

use crate::analyzer::Severity;
use crate::error::Result;
use crate::report::{FileReport, Report};

use super::{ColorMode, ReportFormatter, ansi, findings, is_no_color_set};

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if is_no_color_set() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        }
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_file(&self, file: &FileReport, output: &mut Vec<u8>) {
        let issues = &file.issues;
        let (icon, color) = if issues.error_count() > 0 {
            ("✗", ansi::RED)
        } else {
            ("⚠", ansi::YELLOW)
        };

        writeln!(
            output,
            "{} {} ({} error(s), {} warning(s))",
            self.colorize_with_color(icon, color),
            file.path,
            issues.error_count(),
            issues.warning_count()
        )
        .ok();

        if self.verbose > 0 {
            writeln!(
                output,
                "   Breakdown: sparse errors={}, sparse warnings={}, smatch errors={}, smatch warnings={}",
                issues.sparse_errors().len(),
                issues.sparse_warnings().len(),
                issues.smatch_errors().len(),
                issues.smatch_warnings().len()
            )
            .ok();
        }

        for finding in findings(issues) {
            let label = format!("{} {}", finding.tool, finding.severity.as_str());
            let label = self.colorize_with_color(&label, Self::severity_color(finding.severity));
            let _ = match finding.function {
                Some(function) => writeln!(
                    output,
                    "   {label}: {} {function}(): {}",
                    finding.location, finding.message
                ),
                None => writeln!(output, "   {label}: {}: {}", finding.location, finding.message),
            };
        }
    }

    fn format_summary(&self, report: &Report) -> String {
        let summary = &report.summary;
        let errors = self.colorize_with_color(
            &summary.error_count.to_string(),
            if summary.error_count > 0 {
                ansi::RED
            } else {
                ansi::GREEN
            },
        );
        let warnings = self.colorize_with_color(
            &summary.warning_count.to_string(),
            if summary.warning_count > 0 {
                ansi::YELLOW
            } else {
                ansi::GREEN
            },
        );

        let mut line = format!(
            "Summary: {errors} error(s) and {warnings} warning(s) in {} file(s)",
            summary.file_count
        );
        if report.excluded_files > 0 {
            let excluded =
                self.colorize_with_color(&report.excluded_files.to_string(), ansi::CYAN);
            let _ = write!(line, " (excluded: {excluded} file(s))");
        }
        line
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = Vec::new();

        if report.files.is_empty() {
            writeln!(output, "No sparse or smatch issues found.").ok();
            writeln!(output).ok();
        }

        for file in &report.files {
            self.format_file(file, &mut output);
            writeln!(output).ok();
        }

        writeln!(output, "{}", self.format_summary(report)).ok();

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
