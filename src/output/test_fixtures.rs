//! Shared reports for formatter tests.

use crate::analyzer::MessageAnalyser;
use crate::filter::PathFilter;
use crate::mock_fs::MockFileSystem;
use crate::report::Report;

pub const FILE_A: &str = "/k/linux/a.c";
pub const FILE_B: &str = "/k/linux/b.c";

/// Two files: `a.c` with one of each category, `b.c` with a single warning.
pub fn sample_report() -> Report {
    let mut analyser = MessageAnalyser::with_fs(MockFileSystem::new());
    analyser.process([
        "CHECK /k/linux/a.c",
        "/k/include/x.h:3:9: error: bad | token",
        "/k/include/x.h:4:1: warning: shadowed",
        "/k/linux/a.c:10 probe() error: null deref",
        "/k/linux/a.c:12 probe() warn: unused return",
        "CHECK /k/linux/b.c",
        "/k/linux/b.c:7:2: warning: missing prototype",
    ]);
    Report::from_analyser(&analyser, &PathFilter::default())
}

pub fn empty_report() -> Report {
    Report::default()
}
