#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::filesystem::FileSystem;

/// In-memory filesystem double.
///
/// `canonicalize` behaves like the real call: it makes the path absolute
/// against `current_dir`, folds `.` and `..`, follows registered links and
/// fails with `NotFound` for anything that was never added.
pub struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    links: HashMap<PathBuf, PathBuf>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            links: HashMap::new(),
            current_dir: PathBuf::from("/build"),
            config_dir: Some(PathBuf::from("/home/user/.config/smatch-digest")),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    /// Registers `link` as a symlink resolving to `target`.
    pub fn with_link(mut self, link: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.links.insert(link.into(), target.into());
        self
    }

    pub fn with_current_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.current_dir = path.into();
        self
    }

    pub fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            normalize_path(path)
        } else {
            normalize_path(&self.current_dir.join(path))
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(&self.absolute(path))
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&self.absolute(path))
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        let absolute = self.absolute(path);
        let resolved = self.links.get(&absolute).cloned().unwrap_or(absolute);
        if self.files.contains_key(&resolved) {
            Ok(resolved)
        } else {
            Err(Error::new(ErrorKind::NotFound, "file not found"))
        }
    }
}

pub fn normalize_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let mut components = Vec::new();
    for part in path_str.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            _ => components.push(part),
        }
    }
    PathBuf::from(format!("/{}", components.join("/")))
}
