use crate::analyzer::MessageAnalyser;
use crate::cli::{AnalyzeArgs, Cli};
use crate::config::Config;
use crate::filesystem::FileSystem;
use crate::filter::PathFilter;
use crate::input::{LogSource, read_sources};
use crate::output::{
    ColorMode, OutputFormat, format_report, print_error_full, print_info, print_warning,
};
use crate::report::{FailOn, Report};
use crate::{EXIT_CONFIG_ERROR, EXIT_ISSUES_FOUND, EXIT_SUCCESS, Result};

use super::context::{load_config, write_output};

/// Config values with command-line overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyzeSettings {
    pub format: OutputFormat,
    pub fail_on: FailOn,
    pub exclude: Vec<String>,
}

impl AnalyzeSettings {
    /// Flags replace scalar settings; `--exclude` patterns are added to the configured ones.
    pub(crate) fn resolve(config: &Config, args: &AnalyzeArgs) -> Self {
        let mut exclude = config.filter.exclude.clone();
        exclude.extend(args.exclude.iter().cloned());
        Self {
            format: args.format.unwrap_or(config.report.format),
            fail_on: args.fail_on.unwrap_or(config.report.fail_on),
            exclude,
        }
    }
}

#[must_use]
pub fn run_analyze(args: &AnalyzeArgs, cli: &Cli) -> i32 {
    match run_analyze_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error_full(e.error_type(), &e.message(), e.detail().as_deref(), None);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Reads the logs, classifies them and writes the report.
///
/// # Errors
/// Returns an error if configuration, log input, formatting or writing fails.
pub(crate) fn run_analyze_impl(args: &AnalyzeArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let settings = AnalyzeSettings::resolve(&config, args);
    let filter = PathFilter::new(&settings.exclude)?;

    let sources: Vec<LogSource> = args.logs.iter().cloned().map(LogSource::from).collect();
    let lines = read_sources(&sources)?;
    let verbose = cli.verbose > 0 && !cli.quiet;
    if verbose {
        let names: Vec<String> = sources.iter().map(ToString::to_string).collect();
        print_info(&format!(
            "Read {} line(s) from {}",
            lines.len(),
            names.join(", ")
        ));
    }

    let mut analyser = MessageAnalyser::new();
    let report = analyse_lines(&mut analyser, &lines, &filter);
    if verbose {
        print_info(&format!("Analysed: {}", analyser.stats()));
    }
    if !cli.quiet {
        for pattern in unused_excludes(&analyser, &filter) {
            print_warning(&format!("Exclude pattern '{pattern}' matched no file"));
        }
    }

    // Escape codes only belong on a terminal.
    let color_mode = if args.output.is_some() {
        ColorMode::Never
    } else {
        cli.color.into()
    };
    let output = format_report(settings.format, &report, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code_for(&report, settings.fail_on))
}

/// Run one analysis pass and build the filtered report.
pub(crate) fn analyse_lines<F: FileSystem>(
    analyser: &mut MessageAnalyser<F>,
    lines: &[String],
    filter: &PathFilter,
) -> Report {
    analyser.process(lines);
    Report::from_analyser(analyser, filter)
}

/// Exclude patterns that hid nothing, usually a typo or a path spelled
/// differently from its canonical form.
pub(crate) fn unused_excludes<'a, F: FileSystem>(
    analyser: &'a MessageAnalyser<F>,
    filter: &'a PathFilter,
) -> Vec<&'a str> {
    filter.unmatched_patterns(analyser.errors_and_warnings().keys().map(String::as_str))
}

pub(crate) const fn exit_code_for(report: &Report, fail_on: FailOn) -> i32 {
    if report.should_fail(fail_on) {
        EXIT_ISSUES_FOUND
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
