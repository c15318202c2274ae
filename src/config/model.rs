use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::report::FailOn;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Top-level configuration loaded from `.smatch-digest.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Optional; when present must be `"1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub filter: FilterConfig,
}

/// How results are rendered and when the run counts as failed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub fail_on: FailOn,
}

/// Files to leave out of the rendered report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterConfig {
    /// Glob patterns matched against canonical file paths.
    #[serde(default)]
    pub exclude: Vec<String>,
}
