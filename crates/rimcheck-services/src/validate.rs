use std::collections::HashSet;
use std::path::Path;

use rimcheck_core::Result;
use rimcheck_domain::{FileReport, ValidationReport};
use walkdir::WalkDir;

/// Validate a single XML file on disk. Reading the file is the only I/O;
/// the validator itself works on the in-memory text.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    validate_file_with_tags(path, &HashSet::new())
}

pub fn validate_file_with_tags(
    path: &Path,
    extra_tags: &HashSet<String>,
) -> Result<ValidationReport> {
    let content = std::fs::read_to_string(path)?;
    Ok(rimcheck_validate::validate_content_with_tags(
        &content, extra_tags,
    ))
}

/// Validate every `.xml` file under `root`, one independent report per
/// file. There is no cross-file state; duplicate defNames are only
/// detected within a single document.
pub fn validate_defs_dir(root: &Path, extra_tags: &HashSet<String>) -> Result<Vec<FileReport>> {
    let mut out: Vec<FileReport> = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if !p.is_file() {
            continue;
        }
        if p.extension()
            .and_then(|e| e.to_str())
            .map_or(true, |ext| !ext.eq_ignore_ascii_case("xml"))
        {
            continue;
        }

        tracing::debug!(event = "validate_file", path = %p.display());
        let report = match std::fs::read_to_string(p) {
            Ok(content) => rimcheck_validate::validate_content_with_tags(&content, extra_tags),
            Err(e) => {
                rimcheck_validate::build_report(vec![format!("Failed to read file: {e}")], Vec::new())
            }
        };
        out.push(FileReport {
            path: p.display().to_string(),
            report,
        });
    }

    // walkdir order is platform dependent
    out.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(out)
}
