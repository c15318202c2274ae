use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::filesystem::FileSystem;

/// Resolve the effective configuration for a command.
///
/// `--no-config` wins over everything, including an explicit `--config`.
///
/// # Errors
/// Returns an error if the selected config file cannot be read or is invalid.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    load_config_with_fs(FileConfigLoader::new(), config_path, no_config)
}

pub(crate) fn load_config_with_fs<F: FileSystem>(
    loader: FileConfigLoader<F>,
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write output to a file or stdout.
///
/// When `output_path` is `Some`, the content is written to the file (creating parent
/// directories if needed). The `quiet` flag only affects stdout output.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
