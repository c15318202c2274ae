use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::analyzer::{FileIssues, IssueRegistry, MessageAnalyser, RunStats};
use crate::filesystem::FileSystem;
use crate::filter::PathFilter;

/// Which findings turn into a non-zero exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Always exit 0
    Never,
    /// Exit 1 when any error was found (default)
    #[default]
    Errors,
    /// Exit 1 when any warning or error was found
    Warnings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub issues: FileIssues,
}

/// What gets rendered: the analyser's registry minus excluded files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub summary: RunStats,
    pub excluded_files: usize,
    pub files: Vec<FileReport>,
}

impl Report {
    #[must_use]
    pub fn from_analyser<F: FileSystem>(analyser: &MessageAnalyser<F>, filter: &PathFilter) -> Self {
        Self::new(analyser.errors_and_warnings(), filter)
    }

    /// Build a report, keeping registry order. Summary counts cover only the
    /// files that survive the filter.
    #[must_use]
    pub fn new(registry: &IssueRegistry, filter: &PathFilter) -> Self {
        let files: Vec<FileReport> = registry
            .iter()
            .filter(|(path, _)| !filter.is_excluded(path))
            .map(|(path, issues)| FileReport {
                path: path.clone(),
                issues: issues.clone(),
            })
            .collect();

        let summary = RunStats {
            warning_count: files.iter().map(|f| f.issues.warning_count()).sum(),
            error_count: files.iter().map(|f| f.issues.error_count()).sum(),
            file_count: files.len(),
        };

        Self {
            summary,
            excluded_files: registry.len() - files.len(),
            files,
        }
    }

    #[must_use]
    pub const fn should_fail(&self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::Never => false,
            FailOn::Errors => self.summary.error_count > 0,
            FailOn::Warnings => !self.summary.is_clean(),
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
