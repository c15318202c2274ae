use std::path::Path;

use crate::filesystem::FileSystem;

/// Resolve a path as written in a build log to its canonical spelling.
///
/// Two spellings of the same file (`bin/../lib/x.h` and `lib/x.h`) resolve to
/// the same string. Resolution fails open: a path that does not exist, cannot
/// be accessed, or whose canonical form is not valid UTF-8 comes back exactly
/// as it was passed in.
#[must_use]
pub fn canonical_path<F: FileSystem + ?Sized>(fs: &F, raw: &str) -> String {
    fs.canonicalize(Path::new(raw))
        .ok()
        .and_then(|resolved| resolved.into_os_string().into_string().ok())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
#[path = "path_utils_tests.rs"]
mod tests;
