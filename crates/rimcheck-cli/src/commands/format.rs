use std::path::PathBuf;

use tracing::warn;

pub fn run_format(
    file: PathBuf,
    indent: String,
    write: bool,
    backup: bool,
) -> color_eyre::Result<()> {
    tracing::debug!(event = "format_args", file = ?file, write = write, backup = backup);

    let content = std::fs::read_to_string(&file)?;
    let formatted = rimcheck_parsers_xml::format_document(&content, &indent);

    if !write {
        print!("{formatted}");
        return Ok(());
    }

    if backup && file.exists() {
        let bak = file.with_extension("xml.bak");
        std::fs::copy(&file, &bak)?;
        warn!("backup: {} -> {}", file.display(), bak.display());
    }
    std::fs::write(&file, formatted)?;
    println!("✔ Formatted {}", file.display());
    Ok(())
}
