use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmatchDigestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SmatchDigestError {
    /// Short category label used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileRead { path, .. } => format!("Failed to read {}", path.display()),
            Self::InvalidPattern { pattern, .. } => format!("Invalid glob pattern '{pattern}'"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(_) => "Failed to parse TOML configuration".to_string(),
            Self::TomlSerialize(_) => "Failed to serialize configuration".to_string(),
            Self::JsonSerialize(_) => "Failed to serialize JSON".to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Config(_) | Self::Io(_) => None,
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => Some(e.to_string()),
            Self::TomlSerialize(e) => Some(e.to_string()),
            Self::JsonSerialize(e) => Some(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SmatchDigestError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
