use std::path::PathBuf;

pub fn run_stats(file: PathBuf, format: Option<String>) -> color_eyre::Result<()> {
    tracing::debug!(event = "stats_args", file = ?file, format = ?format);

    let cfg = rimcheck_config::load_config().unwrap_or_default();
    let format = format
        .or(cfg.format)
        .unwrap_or_else(|| "text".to_string());

    let content = std::fs::read_to_string(&file)?;
    let stats = rimcheck_validate::xml_statistics(&content);

    if format == "json" {
        serde_json::to_writer(std::io::stdout().lock(), &stats)?;
        return Ok(());
    }

    println!("{}", file.display());
    println!("  elements:   {}", stats.total_elements);
    println!("  attributes: {}", stats.total_attributes);
    println!("  defs:       {}", stats.def_count);
    for (def_type, count) in &stats.def_types {
        println!("    {def_type}: {count}");
    }
    println!("  size:       {} bytes", stats.file_size);
    println!("  lines:      {}", stats.line_count);
    Ok(())
}
