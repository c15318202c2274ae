//! Build log classification.
//!
//! [`MessageAnalyser`] walks a complete build log once, hands every line to
//! the [`RuleTable`] and files the resulting diagnostics under the source file
//! they belong to. Sparse-style lines carry a path that is often a header
//! pulled in by the file being checked, so they are grouped under the most
//! recent `CHECK` target when there is one. Smatch lines always name their own
//! file and are grouped by it.

mod issue;
mod rules;
mod stats;

pub use issue::{FileIssues, IssueRegistry, SmatchIssue, SparseIssue};
pub use rules::{LineMatch, Rule, RuleTable, Severity};
pub use stats::RunStats;

use crate::filesystem::{FileSystem, RealFileSystem};
use crate::path_utils::canonical_path;

use stats::Counters;

/// Classifies build log lines into a per-file issue registry.
///
/// An instance can be reused: every [`process`](Self::process) call starts
/// from a clean slate. Results are read through
/// [`errors_and_warnings`](Self::errors_and_warnings) and
/// [`stats`](Self::stats) once `process` has returned.
pub struct MessageAnalyser<F: FileSystem = RealFileSystem> {
    fs: F,
    rules: RuleTable,
    /// Canonical path of the file named by the last `CHECK` line.
    active_file: Option<String>,
    registry: IssueRegistry,
    counters: Counters,
}

impl Default for MessageAnalyser<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageAnalyser<RealFileSystem> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_fs(RealFileSystem)
    }
}

impl<F: FileSystem> MessageAnalyser<F> {
    #[must_use]
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            rules: RuleTable::new(),
            active_file: None,
            registry: IssueRegistry::new(),
            counters: Counters::default(),
        }
    }

    /// Analyse a complete build log, replacing the results of any previous run.
    ///
    /// Lines no rule recognises are skipped. Files that end the run without a
    /// single issue are dropped from the registry.
    pub fn process<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear_state();

        for line in lines {
            let line = line.as_ref();
            if let Some(matched) = self.rules.classify(line) {
                self.apply(matched);
            }
        }

        self.registry.retain(|_, issues| issues.has_issues());
    }

    /// Issues per canonical file path, in the order files were first referenced.
    #[must_use]
    pub const fn errors_and_warnings(&self) -> &IssueRegistry {
        &self.registry
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        RunStats {
            warning_count: self.counters.warnings,
            error_count: self.counters.errors,
            file_count: self.registry.len(),
        }
    }

    fn clear_state(&mut self) {
        self.active_file = None;
        self.counters.reset();
        self.registry.clear();
    }

    fn apply(&mut self, matched: LineMatch<'_>) {
        match matched {
            LineMatch::Check { path } => {
                let file = canonical_path(&self.fs, path);
                self.registry.entry(file.clone()).or_default();
                self.active_file = Some(file);
            }
            LineMatch::Sparse {
                severity,
                path,
                line_number,
                message,
            } => {
                let own_path = canonical_path(&self.fs, path);
                // Interleaved output without make's --output-sync can land a
                // diagnostic under the wrong CHECK target; that is accepted.
                let key = self
                    .active_file
                    .clone()
                    .unwrap_or_else(|| own_path.clone());
                let issue = SparseIssue::new(own_path, line_number, message.to_string());
                let entry = self.registry.entry(key).or_default();
                match severity {
                    Severity::Warning => {
                        entry.add_sparse_warning(issue);
                        self.counters.warnings += 1;
                    }
                    Severity::Error => {
                        entry.add_sparse_error(issue);
                        self.counters.errors += 1;
                    }
                }
            }
            LineMatch::Smatch {
                severity,
                path,
                line_number,
                function_name,
                message,
            } => {
                let own_path = canonical_path(&self.fs, path);
                let issue = SmatchIssue::new(
                    own_path.clone(),
                    line_number,
                    function_name.to_string(),
                    message.to_string(),
                );
                let entry = self.registry.entry(own_path).or_default();
                match severity {
                    Severity::Warning => {
                        entry.add_smatch_warning(issue);
                        self.counters.warnings += 1;
                    }
                    Severity::Error => {
                        entry.add_smatch_error(issue);
                        self.counters.errors += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
