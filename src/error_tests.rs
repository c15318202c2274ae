use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = SmatchDigestError::Config("unsupported version".to_string());
    assert_eq!(err.to_string(), "Configuration error: unsupported version");
}

#[test]
fn error_display_file_read() {
    let err = SmatchDigestError::FileRead {
        path: PathBuf::from("build.log"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("build.log"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        SmatchDigestError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        SmatchDigestError::FileRead {
            path: PathBuf::from("build.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .error_type(),
        "FileRead"
    );
    assert_eq!(
        SmatchDigestError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn invalid_pattern_carries_glob_detail() {
    let source = globset::Glob::new("[unclosed").unwrap_err();
    let err = SmatchDigestError::InvalidPattern {
        pattern: "[unclosed".to_string(),
        source,
    };
    assert_eq!(err.error_type(), "Pattern");
    assert_eq!(err.message(), "Invalid glob pattern '[unclosed'");
    assert!(err.detail().is_some());
}

#[test]
fn file_read_detail_is_io_message() {
    let err = SmatchDigestError::FileRead {
        path: PathBuf::from("missing.log"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };
    assert_eq!(err.message(), "Failed to read missing.log");
    assert_eq!(err.detail().as_deref(), Some("no such file"));
}

#[test]
fn toml_parse_error_has_detail() {
    let parse_err = toml::from_str::<toml::Table>("not [valid").unwrap_err();
    let err = SmatchDigestError::from(parse_err);
    assert_eq!(err.error_type(), "Config");
    assert!(err.detail().is_some());
}

#[test]
fn config_error_has_no_detail() {
    let err = SmatchDigestError::Config("bad".to_string());
    assert_eq!(err.message(), "bad");
    assert!(err.detail().is_none());
}
