use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, SmatchDigestError};

/// Glob-based exclusion applied to report entries (e.g. toolchain headers under `/opt/**`).
#[derive(Debug, Clone)]
pub struct PathFilter {
    patterns: Vec<String>,
    exclude_patterns: GlobSet,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl PathFilter {
    /// Create a filter from exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| SmatchDigestError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let glob_set = builder
            .build()
            .map_err(|e| SmatchDigestError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            patterns: exclude_patterns.to_vec(),
            exclude_patterns: glob_set,
        })
    }

    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude_patterns.is_match(path)
    }

    /// Patterns that match none of `paths`, in the order they were given.
    #[must_use]
    pub fn unmatched_patterns<'a, I>(&self, paths: I) -> Vec<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut used = vec![false; self.patterns.len()];
        for path in paths {
            for index in self.exclude_patterns.matches(path) {
                used[index] = true;
            }
        }
        self.patterns
            .iter()
            .zip(used)
            .filter(|(_, used)| !used)
            .map(|(pattern, _)| pattern.as_str())
            .collect()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
