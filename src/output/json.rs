use serde::Serialize;

use crate::analyzer::RunStats;
use crate::error::Result;
use crate::report::{FileReport, Report};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: &'a RunStats,
    excluded_files: usize,
    files: &'a [FileReport],
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: &report.summary,
            excluded_files: report.excluded_files,
            files: &report.files,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
