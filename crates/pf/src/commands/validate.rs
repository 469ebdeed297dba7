//! Validate command implementation.

use std::path::PathBuf;

use poe_filter_rs::filter::{validate_filter, ValidationReport};
use tracing::debug;

use super::config::load_config;
use super::{read_filter, CommandContext, CommandError, Result};
use crate::output::{format_report_json, format_report_table, report_passes};

/// Options for the validate command.
#[derive(Debug)]
pub struct ValidateOptions {
    /// Filter file ("-" for stdin).
    pub file: PathBuf,
    /// Treat warnings as errors.
    pub strict: bool,
}

/// Turns a report into the command outcome.
fn check_report(report: &ValidationReport, strict: bool) -> Result<()> {
    if report_passes(report, strict) {
        Ok(())
    } else {
        Err(CommandError::InvalidFilter {
            errors: report.error_count(),
            warnings: report.warning_count(),
        })
    }
}

/// Executes the validate command.
///
/// Prints the diagnostics and fails with [`CommandError::InvalidFilter`]
/// when the filter does not pass.
pub fn execute(ctx: &CommandContext, opts: &ValidateOptions) -> Result<()> {
    let strict = opts.strict || load_config()?.validate.warnings_as_errors.unwrap_or(false);

    let filter_text = read_filter(&opts.file)?;
    let report = validate_filter(&filter_text);
    let file = opts.file.display().to_string();
    debug!(file = %file, strict, diagnostics = report.errors.len(), "validated filter");

    if ctx.json_output {
        println!("{}", format_report_json(&file, &report, strict)?);
    } else if !ctx.quiet || !report_passes(&report, strict) {
        print!("{}", format_report_table(&file, &report, strict, ctx.use_colors));
    }

    check_report(&report, strict)
}
