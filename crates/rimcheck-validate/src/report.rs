use rimcheck_domain::{ValidationReport, SCHEMA_VERSION};

/// Assemble the immutable report value. Validity is derived from the error
/// list alone; warnings are advisory.
pub fn build_report(errors: Vec<String>, warnings: Vec<String>) -> ValidationReport {
    ValidationReport {
        schema_version: SCHEMA_VERSION,
        valid: errors.is_empty(),
        error_count: errors.len(),
        warning_count: warnings.len(),
        errors,
        warnings,
    }
}

/// Render a report for humans. Presentation only; never consults anything
/// beyond the lists inside the report.
pub fn format_report(report: &ValidationReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    if report.valid {
        lines.push("✔ XML is valid".to_string());
    } else {
        lines.push("✖ XML contains errors".to_string());
    }

    if !report.errors.is_empty() {
        lines.push(String::new());
        lines.push("Errors:".to_string());
        for (i, error) in report.errors.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, error));
        }
    }

    if !report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        for (i, warning) in report.warnings.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, warning));
        }
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        lines.push(String::new());
        lines.push("No issues found".to_string());
    }

    lines.join("\n")
}
