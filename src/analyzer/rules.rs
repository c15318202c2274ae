use regex::{Captures, Regex};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// The closed set of line shapes, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `CHECK <path>` announcing the file about to be analysed.
    Check,
    /// `path:line:col: warning: message`
    SparseWarning,
    /// `path:line:col: error: message`
    SparseError,
    /// `path:line func() warn: message`
    SmatchWarning,
    /// `path:line func() error: message`
    SmatchError,
}

impl Rule {
    pub const ALL: [Self; 5] = [
        Self::Check,
        Self::SparseWarning,
        Self::SparseError,
        Self::SmatchWarning,
        Self::SmatchError,
    ];

    // Character classes are ASCII only: `[0-9]` so every captured number
    // parses, and `(?-u:\s)` / `(?-u:\w)` so NBSP, em-spaces and non-ASCII
    // identifiers do not make a line look like a diagnostic.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Check => r"^(?-u:\s)*CHECK(?-u:\s)+(.+)$",
            Self::SparseWarning => {
                r"^(?-u:\s)*(.+):([0-9]+):([0-9]+):(?-u:\s)+warning:(?-u:\s)+(.+)$"
            }
            Self::SparseError => {
                r"^(?-u:\s)*(.+):([0-9]+):([0-9]+):(?-u:\s)+error:(?-u:\s)+(.+)$"
            }
            Self::SmatchWarning => {
                r"^(?-u:\s)*(.+):([0-9]+)(?-u:\s)+((?-u:\w)+)\(\)(?-u:\s)+warn:(?-u:\s)+(.+)$"
            }
            Self::SmatchError => {
                r"^(?-u:\s)*(.+):([0-9]+)(?-u:\s)+((?-u:\w)+)\(\)(?-u:\s)+error:(?-u:\s)+(.+)$"
            }
        }
    }

    fn extract<'a>(self, caps: &Captures<'a>) -> LineMatch<'a> {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        match self {
            Self::Check => LineMatch::Check { path: group(1) },
            Self::SparseWarning | Self::SparseError => LineMatch::Sparse {
                severity: if self == Self::SparseWarning {
                    Severity::Warning
                } else {
                    Severity::Error
                },
                path: group(1),
                line_number: parse_line_number(group(2)),
                // group 3 is the column, which is not recorded
                message: group(4),
            },
            Self::SmatchWarning | Self::SmatchError => LineMatch::Smatch {
                severity: if self == Self::SmatchWarning {
                    Severity::Warning
                } else {
                    Severity::Error
                },
                path: group(1),
                line_number: parse_line_number(group(2)),
                function_name: group(3),
                message: group(4),
            },
        }
    }
}

/// What a line turned out to be, with its fields borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    Check {
        path: &'a str,
    },
    Sparse {
        severity: Severity,
        path: &'a str,
        line_number: usize,
        message: &'a str,
    },
    Smatch {
        severity: Severity,
        path: &'a str,
        line_number: usize,
        function_name: &'a str,
        message: &'a str,
    },
}

/// Ordered rule table. The first rule whose pattern matches the whole line owns it.
pub struct RuleTable {
    rules: Vec<(Rule, Regex)>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTable {
    #[must_use]
    pub fn new() -> Self {
        let rules = Rule::ALL
            .iter()
            .map(|&rule| (rule, Regex::new(rule.pattern()).expect("Invalid regex")))
            .collect();
        Self { rules }
    }

    /// Classify a single log line. Returns `None` for lines no rule recognises.
    #[must_use]
    pub fn classify<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        self.rules.iter().find_map(|(rule, regex)| {
            regex.captures(line).map(|caps| rule.extract(&caps))
        })
    }
}

/// Line numbers too large for `usize` saturate instead of failing the line.
fn parse_line_number(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
