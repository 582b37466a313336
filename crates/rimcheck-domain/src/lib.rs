use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Outcome of validating one XML document. Created fresh per call and
/// never mutated afterwards; `valid` is true iff `errors` is empty
/// (warnings never affect validity).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub schema_version: u32,
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub error_count: usize,
    pub warning_count: usize,
}

/// Per-file report used by directory batch modes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FileReport {
    pub path: String,
    pub report: ValidationReport,
}

/// Aggregate result of checking a mod folder layout.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModReport {
    pub schema_version: u32,
    pub valid: bool,
    /// Folder-level problems (missing About/, missing About.xml).
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Number of XML files that were validated.
    pub checked: usize,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct XmlStats {
    pub schema_version: u32,
    pub total_elements: usize,
    pub total_attributes: usize,
    pub def_count: usize,
    pub def_types: BTreeMap<String, usize>,
    /// UTF-8 byte length of the document.
    pub file_size: usize,
    pub line_count: usize,
}
