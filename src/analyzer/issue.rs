use indexmap::IndexMap;
use serde::Serialize;

/// Diagnostic that names a file and line but no enclosing function
/// (`file:line:col: warning: message`, as emitted by sparse and the compiler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SparseIssue {
    file_path: String,
    line_number: usize,
    message: String,
}

impl SparseIssue {
    #[must_use]
    pub const fn new(file_path: String, line_number: usize, message: String) -> Self {
        Self {
            file_path,
            line_number,
            message,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Diagnostic scoped to a named function (`file:line func() warn: message`,
/// as emitted by smatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmatchIssue {
    file_path: String,
    line_number: usize,
    function_name: String,
    message: String,
}

impl SmatchIssue {
    #[must_use]
    pub const fn new(
        file_path: String,
        line_number: usize,
        function_name: String,
        message: String,
    ) -> Self {
        Self {
            file_path,
            line_number,
            function_name,
            message,
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    #[must_use]
    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything recorded against one canonical file.
///
/// The four categories are kept apart and each keeps the order in which its
/// lines appeared; there is no ordering across categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileIssues {
    sparse_warnings: Vec<SparseIssue>,
    sparse_errors: Vec<SparseIssue>,
    smatch_warnings: Vec<SmatchIssue>,
    smatch_errors: Vec<SmatchIssue>,
}

impl FileIssues {
    pub(crate) fn add_sparse_warning(&mut self, issue: SparseIssue) {
        self.sparse_warnings.push(issue);
    }

    pub(crate) fn add_sparse_error(&mut self, issue: SparseIssue) {
        self.sparse_errors.push(issue);
    }

    pub(crate) fn add_smatch_warning(&mut self, issue: SmatchIssue) {
        self.smatch_warnings.push(issue);
    }

    pub(crate) fn add_smatch_error(&mut self, issue: SmatchIssue) {
        self.smatch_errors.push(issue);
    }

    #[must_use]
    pub fn sparse_warnings(&self) -> &[SparseIssue] {
        &self.sparse_warnings
    }

    #[must_use]
    pub fn sparse_errors(&self) -> &[SparseIssue] {
        &self.sparse_errors
    }

    #[must_use]
    pub fn smatch_warnings(&self) -> &[SmatchIssue] {
        &self.smatch_warnings
    }

    #[must_use]
    pub fn smatch_errors(&self) -> &[SmatchIssue] {
        &self.smatch_errors
    }

    #[must_use]
    pub const fn warning_count(&self) -> usize {
        self.sparse_warnings.len() + self.smatch_warnings.len()
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.sparse_errors.len() + self.smatch_errors.len()
    }

    #[must_use]
    pub const fn issue_count(&self) -> usize {
        self.warning_count() + self.error_count()
    }

    #[must_use]
    pub const fn has_issues(&self) -> bool {
        self.issue_count() > 0
    }
}

/// Canonical file path to its issues, in first-reference order.
pub type IssueRegistry = IndexMap<String, FileIssues>;
