use std::collections::HashSet;
use std::path::Path;

use rimcheck_core::Result;
use rimcheck_domain::{FileReport, ModReport, SCHEMA_VERSION};

/// Validate the on-disk layout of a mod folder: the required `About/`
/// folder with `About.xml`, plus every XML file under `Defs/` when that
/// folder exists. Folder-level problems land in the mod report itself,
/// document-level findings in the per-file reports.
pub fn validate_mod(root: &Path, extra_tags: &HashSet<String>) -> Result<ModReport> {
    tracing::debug!(event = "validate_mod", root = %root.display());

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut files: Vec<FileReport> = Vec::new();

    let about_dir = root.join("About");
    if !about_dir.is_dir() {
        errors.push("Missing required folder: About".to_string());
    }

    let about_xml = about_dir.join("About.xml");
    if about_xml.is_file() {
        let report = super::validate::validate_file_with_tags(&about_xml, extra_tags)?;
        files.push(FileReport {
            path: about_xml.display().to_string(),
            report,
        });
    } else {
        errors.push("Missing About.xml".to_string());
    }

    let defs_dir = root.join("Defs");
    if defs_dir.is_dir() {
        files.extend(super::validate::validate_defs_dir(&defs_dir, extra_tags)?);
    } else {
        warnings.push("Defs folder not found".to_string());
    }

    let valid = errors.is_empty() && files.iter().all(|f| f.report.valid);
    Ok(ModReport {
        schema_version: SCHEMA_VERSION,
        valid,
        errors,
        warnings,
        checked: files.len(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_ABOUT: &str = "<ModMetaData><name>M</name><author>A</author>\
        <packageId>a.m</packageId>\
        <supportedVersions><li>1.5</li></supportedVersions></ModMetaData>";

    fn write(root: &Path, rel: &str, content: &str) {
        let p = root.join(rel);
        std::fs::create_dir_all(p.parent().unwrap()).unwrap();
        std::fs::write(p, content).unwrap();
    }

    #[test]
    fn complete_mod_layout_is_valid() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write(tmp.path(), "About/About.xml", GOOD_ABOUT);
        write(
            tmp.path(),
            "Defs/Things.xml",
            "<Defs><ThingDef><defName>X</defName><label>x</label></ThingDef></Defs>",
        );

        let report = validate_mod(tmp.path(), &HashSet::new()).expect("ok");
        assert!(report.valid, "{:?}", report.errors);
        assert_eq!(report.checked, 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_about_folder_and_file_are_errors() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let report = validate_mod(tmp.path(), &HashSet::new()).expect("ok");
        assert!(!report.valid);
        assert!(report
            .errors
            .contains(&"Missing required folder: About".to_string()));
        assert!(report.errors.contains(&"Missing About.xml".to_string()));
        assert!(report
            .warnings
            .contains(&"Defs folder not found".to_string()));
    }

    #[test]
    fn invalid_defs_file_makes_mod_invalid() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write(tmp.path(), "About/About.xml", GOOD_ABOUT);
        write(
            tmp.path(),
            "Defs/Bad.xml",
            "<Defs><ThingDef><label>nameless</label></ThingDef></Defs>",
        );

        let report = validate_mod(tmp.path(), &HashSet::new()).expect("ok");
        assert!(!report.valid);
        assert!(report.errors.is_empty(), "folder layout itself was fine");
        let bad = report
            .files
            .iter()
            .find(|f| f.path.ends_with("Bad.xml"))
            .expect("Bad.xml report");
        assert!(bad
            .report
            .errors
            .contains(&"Definition ThingDef has no defName".to_string()));
    }
}
