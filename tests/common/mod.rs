#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the smatch-digest binary.
#[macro_export]
macro_rules! smatch_digest {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("smatch-digest"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The temp directory as the analyser will spell it after canonicalization.
    pub fn canonical_root(&self) -> PathBuf {
        dunce::canonicalize(self.dir.path()).expect("Failed to canonicalize temp directory")
    }

    /// Creates a `.smatch-digest.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".smatch-digest.toml", content);
    }

    /// Writes a build log and returns its path.
    pub fn create_log(&self, relative_path: &str, lines: &[String]) -> PathBuf {
        let mut content = String::new();
        for line in lines {
            let _ = writeln!(content, "{line}");
        }
        self.create_file(relative_path, &content);
        self.dir.path().join(relative_path)
    }

    /// Creates an empty source file under the temp directory and returns its
    /// canonical spelling.
    pub fn create_source(&self, relative_path: &str) -> String {
        self.create_file(relative_path, "");
        self.canonical_root()
            .join(relative_path)
            .to_string_lossy()
            .into_owned()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
