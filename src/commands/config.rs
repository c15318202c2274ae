use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, validate_config_version};
use crate::filter::PathFilter;
use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SmatchDigestError};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli.quiet),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), *format, cli.no_config)
        }
    }
}

fn run_config_validate(config_path: &Path, quiet: bool) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            if !quiet {
                println!("Configuration is valid: {}", config_path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error_full(e.error_type(), &e.message(), e.detail().as_deref(), None);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(SmatchDigestError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)
}

/// Checks what TOML parsing cannot: the version and every exclude glob.
///
/// # Errors
/// Returns an error for an unsupported version or an invalid glob pattern.
pub(crate) fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_config_version(config)?;
    PathFilter::new(&config.filter.exclude)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, no_config: bool) -> i32 {
    match run_config_show_impl(config_path, format, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error_full(e.error_type(), &e.message(), e.detail().as_deref(), None);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");
    if let Some(version) = &config.version {
        let _ = writeln!(output, "version = \"{version}\"\n");
    }

    output.push_str("[report]\n");
    let _ = writeln!(
        output,
        "  format = {}",
        serde_json::to_string(&config.report.format).unwrap_or_default()
    );
    let _ = writeln!(
        output,
        "  fail_on = {}",
        serde_json::to_string(&config.report.fail_on).unwrap_or_default()
    );

    output.push_str("\n[filter]\n");
    if config.filter.exclude.is_empty() {
        output.push_str("  exclude = []\n");
    } else {
        let _ = writeln!(output, "  exclude = {:?}", config.filter.exclude);
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
