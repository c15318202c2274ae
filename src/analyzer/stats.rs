use std::fmt;

use serde::Serialize;

/// Totals for one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub warning_count: usize,
    pub error_count: usize,
    pub file_count: usize,
}

impl RunStats {
    #[must_use]
    pub const fn issue_count(&self) -> usize {
        self.warning_count + self.error_count
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s) and {} warning(s) in {} file(s)",
            self.error_count, self.warning_count, self.file_count
        )
    }
}

#[derive(Debug, Default)]
pub(super) struct Counters {
    pub warnings: usize,
    pub errors: usize,
}

impl Counters {
    pub const fn reset(&mut self) {
        self.warnings = 0;
        self.errors = 0;
    }
}
