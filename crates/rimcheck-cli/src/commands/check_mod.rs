use std::path::PathBuf;

use owo_colors::OwoColorize;

pub fn run_check_mod(
    root: PathBuf,
    format: Option<String>,
    strict: bool,
    use_color: bool,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "check_mod_args", root = ?root, format = ?format, strict = strict);

    let cfg = rimcheck_config::load_config().unwrap_or_default();
    let format = format
        .or(cfg.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let strict = strict || cfg.validate.as_ref().and_then(|v| v.strict).unwrap_or(false);
    let extra_tags = super::validate::extra_tags_from(&cfg);

    let report = rimcheck_services::validate_mod(&root, &extra_tags)?;

    if format == "json" {
        serde_json::to_writer(std::io::stdout().lock(), &report)?;
        if strict && !report.valid {
            color_eyre::eyre::bail!("mod check failed");
        }
        return Ok(());
    }

    if report.valid {
        if use_color {
            println!("{} Mod folder is valid", "✔".green());
        } else {
            println!("✔ Mod folder is valid");
        }
    } else if use_color {
        println!("{} Mod folder contains errors", "✖".red());
    } else {
        println!("✖ Mod folder contains errors");
    }

    for error in &report.errors {
        if use_color {
            println!("  {} {}", "✖".red(), error.red());
        } else {
            println!("  ✖ {error}");
        }
    }
    for warning in &report.warnings {
        if use_color {
            println!("  {} {}", "⚠".yellow(), warning.yellow());
        } else {
            println!("  ⚠ {warning}");
        }
    }

    for file_report in &report.files {
        if file_report.report.error_count == 0 && file_report.report.warning_count == 0 {
            continue;
        }
        println!();
        super::validate::print_file_report(file_report, use_color);
    }

    println!("\nChecked {} XML file(s)", report.checked);

    if strict && !report.valid {
        color_eyre::eyre::bail!("mod check failed");
    }
    Ok(())
}
