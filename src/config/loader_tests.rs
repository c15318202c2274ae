use std::path::{Path, PathBuf};

use super::*;
use crate::mock_fs::MockFileSystem;
use crate::output::OutputFormat;
use crate::report::FailOn;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let content = r#"
[report]
format = "json"
fail_on = "warnings"
"#;
    let fs = MockFileSystem::new()
        .with_current_dir("/work/linux")
        .with_file("/work/linux/.smatch-digest.toml", content);

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.report.format, OutputFormat::Json);
    assert_eq!(config.report.fail_on, FailOn::Warnings);
}

#[test]
fn loads_user_config_as_fallback() {
    let content = r#"
[filter]
exclude = ["/opt/**"]
"#;
    let fs = MockFileSystem::new()
        .with_config_dir(Some(PathBuf::from("/home/dev/.config/smatch-digest")))
        .with_file("/home/dev/.config/smatch-digest/config.toml", content);

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.filter.exclude, vec!["/opt/**"]);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_current_dir("/work")
        .with_file("/work/.smatch-digest.toml", "[report]\nfail_on = \"never\"\n")
        .with_file(
            "/home/user/.config/smatch-digest/config.toml",
            "[report]\nfail_on = \"warnings\"\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.report.fail_on, FailOn::Never);
}

#[test]
fn missing_user_config_dir_is_not_an_error() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_from_explicit_path() {
    let fs = MockFileSystem::new().with_file(
        "/custom/digest.toml",
        "version = \"1\"\n[report]\nformat = \"markdown\"\n",
    );

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/custom/digest.toml"))
        .unwrap();

    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.report.format, OutputFormat::Markdown);
}

#[test]
fn returns_error_for_invalid_toml() {
    let fs = MockFileSystem::new().with_file("/work/bad.toml", "this is not valid toml [[[");

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/work/bad.toml"))
        .unwrap_err();

    assert!(matches!(err, SmatchDigestError::TomlParse(_)));
}

#[test]
fn returns_error_for_nonexistent_explicit_path() {
    let err = FileConfigLoader::with_fs(MockFileSystem::new())
        .load_from_path(Path::new("/does/not/exist.toml"))
        .unwrap_err();

    assert!(matches!(err, SmatchDigestError::FileRead { .. }));
}

#[test]
fn rejects_unknown_version() {
    let fs = MockFileSystem::new().with_file("/work/v9.toml", "version = \"9\"\n");

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/work/v9.toml"))
        .unwrap_err();

    assert!(err.to_string().contains("Unsupported config version '9'"));
}

#[test]
fn rejects_unknown_fail_on_value() {
    let fs = MockFileSystem::new().with_file("/work/x.toml", "[report]\nfail_on = \"sometimes\"\n");

    let result = FileConfigLoader::with_fs(fs).load_from_path(Path::new("/work/x.toml"));

    assert!(matches!(result, Err(SmatchDigestError::TomlParse(_))));
}
