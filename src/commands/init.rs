use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error_full;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SmatchDigestError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error_full(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                Some("Use --force to overwrite"),
            );
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SmatchDigestError::Config(format!(
            "Configuration file already exists: {}",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# smatch-digest configuration file
version = "1"

[report]
# Output format: "text", "json" or "markdown"
format = "text"

# Exit with code 1 when findings reach this level: "never", "errors" or "warnings"
fail_on = "errors"

[filter]
# Files left out of the report (glob syntax, matched against canonical paths).
# Totals in the summary only count files that remain.
exclude = [
    # "/usr/lib/gcc/**",
    # "**/include/generated/**",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
