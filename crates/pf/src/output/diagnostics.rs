//! Validation report formatting.

use owo_colors::OwoColorize;
use poe_filter_rs::filter::{ValidationError, ValidationReport};
use serde::Serialize;

use super::helpers::format_severity;

/// JSON output structure for the validate command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateOutput<'a> {
    pub file: &'a str,
    pub is_valid: bool,
    pub strict: bool,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: &'a [ValidationError],
}

/// Returns the validity a report has under the chosen mode.
pub fn report_passes(report: &ValidationReport, strict: bool) -> bool {
    if strict {
        report.is_valid_strict()
    } else {
        report.is_valid()
    }
}

/// Formats a validation report as JSON.
pub fn format_report_json(
    file: &str,
    report: &ValidationReport,
    strict: bool,
) -> Result<String, serde_json::Error> {
    let output = ValidateOutput {
        file,
        is_valid: report_passes(report, strict),
        strict,
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        errors: &report.errors,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a validation report as `file:line: severity: message` lines plus a summary.
pub fn format_report_table(
    file: &str,
    report: &ValidationReport,
    strict: bool,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    for diagnostic in &report.errors {
        let location = format!("{}:{}", file, diagnostic.line);
        let location = if use_colors {
            location.bold().to_string()
        } else {
            location
        };
        output.push_str(&format!(
            "{}: {}: {}\n",
            location,
            format_severity(diagnostic.severity, use_colors),
            diagnostic.message
        ));
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    let summary = if report.errors.is_empty() {
        "Filter is valid".to_string()
    } else {
        format!(
            "{} {}, {} {}",
            errors,
            if errors == 1 { "error" } else { "errors" },
            warnings,
            if warnings == 1 { "warning" } else { "warnings" }
        )
    };

    if !report.errors.is_empty() {
        output.push('\n');
    }
    if use_colors {
        if report_passes(report, strict) {
            output.push_str(&format!("{}\n", summary.green()));
        } else {
            output.push_str(&format!("{}\n", summary.red()));
        }
    } else {
        output.push_str(&summary);
        output.push('\n');
    }

    output
}
