use std::collections::HashSet;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use rimcheck_domain::{FileReport, ValidationReport};

pub fn run_validate(
    file: Option<PathBuf>,
    root: Option<PathBuf>,
    format: Option<String>,
    strict: bool,
    use_color: bool,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "validate_args", file = ?file, root = ?root, format = ?format, strict = strict);

    let cfg = rimcheck_config::load_config().unwrap_or_default();
    let format = format
        .or(cfg.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let strict = strict || cfg.validate.as_ref().and_then(|v| v.strict).unwrap_or(false);
    let extra_tags = extra_tags_from(&cfg);

    let reports: Vec<FileReport> = if let Some(file) = file {
        let report = rimcheck_services::validate_file_with_tags(&file, &extra_tags)?;
        vec![FileReport {
            path: file.display().to_string(),
            report,
        }]
    } else {
        let Some(root) = root else {
            color_eyre::eyre::bail!("either --file or --root is required");
        };
        rimcheck_services::validate_defs_dir(&root, &extra_tags)?
    };

    if format == "json" {
        serde_json::to_writer(std::io::stdout().lock(), &reports)?;
    } else {
        for (i, file_report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_file_report(file_report, use_color);
        }
    }

    if strict && !reports.iter().all(|r| r.report.valid) {
        color_eyre::eyre::bail!("validation failed");
    }
    Ok(())
}

pub(crate) fn extra_tags_from(cfg: &rimcheck_config::RimCheckConfig) -> HashSet<String> {
    cfg.validate
        .as_ref()
        .and_then(|v| v.extra_tags.clone())
        .unwrap_or_default()
        .into_iter()
        .collect()
}

pub(crate) fn print_file_report(file_report: &FileReport, use_color: bool) {
    if use_color {
        println!("{}", file_report.path.blue());
    } else {
        println!("{}", file_report.path);
    }
    print_report(&file_report.report, use_color);
}

/// Same layout as `rimcheck_validate::format_report`, colorized per section.
pub(crate) fn print_report(report: &ValidationReport, use_color: bool) {
    if !use_color {
        println!("{}", rimcheck_validate::format_report(report));
        return;
    }

    if report.valid {
        println!("{} XML is valid", "✔".green());
    } else {
        println!("{} XML contains errors", "✖".red());
    }
    if !report.errors.is_empty() {
        println!("\nErrors:");
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.red());
        }
    }
    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.yellow());
        }
    }
    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("\nNo issues found");
    }
}
